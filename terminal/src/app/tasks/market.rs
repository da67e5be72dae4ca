//! # Market Data Tasks
//!
//! Async tasks fetching coin listings and the market aggregate.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use shared::PageQuery;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use crate::utils::runtime;

/// Fetch the coin listing.
///
/// A `fetching` guard prevents task pileup when the user mashes refresh.
/// A request arriving while one is in flight is not dropped: it is
/// queued via `refetch_pending` and issued by the resolving task with
/// the query parameters current at that point, so a sort change during
/// a fetch still takes effect. In-flight requests are never cancelled;
/// the last resolved result wins.
pub(crate) fn fetch_coins(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, query) = {
        let mut state = state.write();
        if state.market.fetching {
            state.market.refetch_pending = true;
            return;
        }
        state.market.fetching = true;
        state.market.loading = true;

        let mut query = PageQuery::with_limit(50);
        query.sort = Some(state.market.sort_field.param().to_string());
        query.order = Some(state.market.sort_order);
        (state.api_client.clone(), query)
    };

    let state_arc = Arc::clone(&state);
    runtime::spawn(async move {
        let result = api_client.get_coins(Some(&query)).await;

        // Reset the guard before handing off; lock held briefly.
        let rerun = {
            let mut state = state_arc.write();
            state.market.fetching = false;
            std::mem::take(&mut state.market.refetch_pending)
        };

        let _ = event_tx.send(AppEvent::CoinsResult(result)).await;

        if rerun {
            fetch_coins(state_arc, event_tx);
        }
    });
}

/// Fetch the aggregate market summary.
pub(crate) fn fetch_market_data(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = state.read().api_client.clone();
    runtime::spawn(async move {
        let result = api_client.get_market_data().await;
        let _ = event_tx.send(AppEvent::MarketDataResult(result)).await;
    });
}
