//! # Authentication Handlers
//!
//! Handlers for login, registration, and logout actions.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, AuthState, Screen, SessionState};
use crate::core::service::ApiService;
use crate::utils::{runtime, validation};

/// Handle login button click
pub(crate) fn handle_login_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    email: String,
    password: String,
) {
    if email.is_empty() || password.is_empty() {
        state.write().auth.set_error("Email and password required");
        return;
    }

    {
        let mut state = state.write();
        if state.auth.is_pending() {
            return;
        }
        state.auth.set_pending(true);
    }

    let api_client = state.read().api_client.clone();
    let tx = event_tx.clone();
    runtime::spawn(async move {
        let result = api_client.login(email, password).await;
        let _ = tx.send(AppEvent::LoginResult(result)).await;
    });
}

/// Handle register button click
pub(crate) fn handle_register_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    username: String,
    email: String,
    password: String,
    confirm_password: String,
) {
    let checks = [
        validation::validate_username(&username),
        validation::validate_email(&email),
        validation::validate_password(&password),
    ];
    if let Some(failed) = checks.iter().find(|c| !c.is_valid) {
        let message = failed.error.clone().unwrap_or_else(|| "Invalid input".to_string());
        state.write().auth.set_error(message);
        return;
    }

    if password != confirm_password {
        state.write().auth.set_error("Passwords don't match");
        return;
    }

    {
        let mut state = state.write();
        if state.auth.is_pending() {
            return;
        }
        state.auth.set_pending(true);
    }

    let api_client = state.read().api_client.clone();
    let tx = event_tx.clone();
    runtime::spawn(async move {
        let result = api_client.register(username, email, password).await;
        let _ = tx.send(AppEvent::RegisterResult(result)).await;
    });
}

/// Handle logout: clear both persisted entries and the in-memory
/// session, then land on the auth screen.
pub(crate) fn handle_logout_click(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.session_store.clear();
    state.session = SessionState::default();
    state.portfolio = Default::default();
    state.watchlist = Default::default();
    state.trade = Default::default();
    state.auth = AuthState::login();
    state.current_screen = Screen::Auth;
    tracing::info!("Logged out");
}

/// Switch to the login form
pub(crate) fn handle_switch_to_login(state: Arc<RwLock<AppState>>) {
    state.write().auth = AuthState::login();
}

/// Switch to the registration form
pub(crate) fn handle_switch_to_register(state: Arc<RwLock<AppState>>) {
    state.write().auth = AuthState::register();
}
