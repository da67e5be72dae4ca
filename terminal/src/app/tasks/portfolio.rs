//! # Portfolio Tasks
//!
//! Async tasks for the authenticated views: stats, holdings, trade
//! history, watchlist, balance, and the profile refresh used when a
//! persisted session is restored.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use crate::utils::runtime;

pub(crate) fn fetch_stats(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();
        state.portfolio.loading = true;
        state.api_client.clone()
    };
    runtime::spawn(async move {
        let result = api_client.get_user_stats().await;
        let _ = event_tx.send(AppEvent::StatsResult(result)).await;
    });
}

pub(crate) fn fetch_holdings(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = state.read().api_client.clone();
    runtime::spawn(async move {
        let result = api_client.get_holdings(None).await;
        let _ = event_tx.send(AppEvent::HoldingsResult(result)).await;
    });
}

pub(crate) fn fetch_trades(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = state.read().api_client.clone();
    runtime::spawn(async move {
        let result = api_client.get_trades(None).await;
        let _ = event_tx.send(AppEvent::TradesResult(result)).await;
    });
}

pub(crate) fn fetch_watchlist(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();
        state.watchlist.loading = true;
        state.api_client.clone()
    };
    runtime::spawn(async move {
        let result = api_client.get_watchlist().await;
        let _ = event_tx.send(AppEvent::WatchlistResult(result)).await;
    });
}

/// Quick balance refresh after a trade settles.
pub(crate) fn fetch_balance(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = state.read().api_client.clone();
    runtime::spawn(async move {
        let result = api_client.get_balance().await;
        let _ = event_tx.send(AppEvent::BalanceResult(result)).await;
    });
}

/// Refresh the profile behind a restored session. Any 401 here is how an
/// expired persisted token gets discovered.
pub(crate) fn fetch_profile(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = state.read().api_client.clone();
    runtime::spawn(async move {
        let result = api_client.get_auth_profile().await;
        let _ = event_tx.send(AppEvent::ProfileResult(result)).await;
    });
}
