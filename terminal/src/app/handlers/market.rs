//! # Market Screen Handlers

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use shared::SortOrder;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, SortField};
use crate::app::tasks::market;

/// Change the coin listing sort and re-fetch server-side.
pub(crate) fn handle_sort_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    field: SortField,
    order: SortOrder,
) {
    {
        let mut state = state.write();
        if state.market.sort_field == field && state.market.sort_order == order {
            return;
        }
        state.market.sort_field = field;
        state.market.sort_order = order;
    }
    market::fetch_coins(state, event_tx);
}

/// Re-fetch the coin listing and the market aggregate.
pub(crate) fn handle_refresh(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    market::fetch_coins(state.clone(), event_tx.clone());
    market::fetch_market_data(state, event_tx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{AuthState, Screen};
    use crate::services::api::ApiClient;
    use crate::services::session::SessionStore;
    use std::sync::atomic::{AtomicU32, Ordering};

    static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    fn test_state() -> Arc<RwLock<AppState>> {
        let dir = std::env::temp_dir().join(format!(
            "cointerm-market-test-{}-{}",
            std::process::id(),
            DIR_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        let session_store = Arc::new(SessionStore::with_dir(dir));
        let api_client = Arc::new(ApiClient::new(session_store.clone()));
        Arc::new(RwLock::new(AppState {
            current_screen: Screen::Market,
            auth: AuthState::login(),
            session: Default::default(),
            market: Default::default(),
            portfolio: Default::default(),
            trade: Default::default(),
            watchlist: Default::default(),
            pending_notifications: Vec::new(),
            api_client,
            session_store,
        }))
    }

    #[test]
    fn sort_change_during_fetch_queues_a_refetch() {
        let state = test_state();
        let (event_tx, _event_rx) = async_channel::unbounded();

        // Simulate an in-flight coins request.
        state.write().market.fetching = true;

        handle_sort_change(state.clone(), event_tx, SortField::Price, SortOrder::Asc);

        let state = state.read();
        assert_eq!(state.market.sort_field, SortField::Price);
        assert_eq!(state.market.sort_order, SortOrder::Asc);
        assert!(
            state.market.refetch_pending,
            "the sort change must be issued once the in-flight request resolves"
        );
    }

    #[test]
    fn repeated_sort_selection_is_a_no_op() {
        let state = test_state();
        let (event_tx, _event_rx) = async_channel::unbounded();
        state.write().market.fetching = true;

        let (field, order) = {
            let state = state.read();
            (state.market.sort_field, state.market.sort_order)
        };
        handle_sort_change(state.clone(), event_tx, field, order);

        assert!(!state.read().market.refetch_pending);
    }
}
