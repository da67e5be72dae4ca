//! # Watchlist Handlers

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use crate::utils::runtime;

/// Toggle a coin on the watchlist: remove the existing entry if the coin
/// is watched, add one otherwise.
pub(crate) fn handle_watchlist_toggle(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    coin_id: i64,
) {
    let (api_client, existing_id) = {
        let state = state.read();
        if !state.is_authenticated() {
            return;
        }
        (
            state.api_client.clone(),
            state.watchlist.entry_for(coin_id).map(|e| e.id),
        )
    };

    let tx = event_tx.clone();
    match existing_id {
        Some(id) => {
            runtime::spawn(async move {
                let result = api_client.remove_from_watchlist(id).await;
                let _ = tx.send(AppEvent::WatchlistRemoved { id, result }).await;
            });
        }
        None => {
            runtime::spawn(async move {
                let result = api_client.add_to_watchlist(coin_id).await;
                let _ = tx.send(AppEvent::WatchlistAdded(result)).await;
            });
        }
    }
}
