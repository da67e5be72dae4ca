//! # Navigation Handlers
//!
//! Screen changes with redirect-based guarding: anonymous users asking
//! for an authenticated screen land on the auth screen instead.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::app::tasks::{market, portfolio};

/// Handle screen change
pub(crate) fn handle_screen_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    screen: Screen,
) {
    let target = {
        let mut state = state.write();
        let target = if screen.requires_auth() && !state.is_authenticated() {
            tracing::debug!(requested = ?screen, "Redirecting anonymous user to auth");
            Screen::Auth
        } else {
            screen
        };
        state.current_screen = target;
        target
    };

    // Entering a screen triggers its fetches; errors require a manual
    // re-entry or refresh, never an automatic retry.
    match target {
        Screen::Market => {
            market::fetch_coins(state.clone(), event_tx.clone());
            market::fetch_market_data(state.clone(), event_tx.clone());
            if state.read().is_authenticated() {
                portfolio::fetch_watchlist(state, event_tx);
            }
        }
        Screen::Dashboard => {
            portfolio::fetch_stats(state.clone(), event_tx.clone());
            portfolio::fetch_holdings(state.clone(), event_tx.clone());
            portfolio::fetch_trades(state.clone(), event_tx.clone());
            portfolio::fetch_watchlist(state, event_tx);
        }
        Screen::Trade => {
            market::fetch_coins(state, event_tx);
        }
        Screen::Auth => {}
    }
}

/// Cycle to the next screen in navigation order.
///
/// Signed-in users never land on the auth screen; anonymous users skip
/// the screens that need a session.
pub(crate) fn next_screen(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (current, authenticated) = {
        let state = state.read();
        (state.current_screen, state.is_authenticated())
    };
    let screens = Screen::all();
    let idx = screens.iter().position(|&s| s == current).unwrap_or(0);

    let next = (1..screens.len())
        .map(|step| screens[(idx + step) % screens.len()])
        .find(|s| {
            if authenticated {
                *s != Screen::Auth
            } else {
                !s.requires_auth()
            }
        });

    if let Some(next) = next {
        handle_screen_change(state, event_tx, next);
    }
}
