//! # Application Core
//!
//! Event-driven application orchestrator.
//!
//! The UI thread never performs I/O. Button handlers validate input,
//! spawn a request on the shared runtime, and return; each task resolves
//! to exactly one [`AppEvent`], which [`App::on_tick`] drains and applies
//! at the top of the next frame.

pub mod event_handler;
pub mod events;
pub mod handlers;
pub mod state;
pub mod tasks;
pub mod window_app;

use std::sync::Arc;

use async_channel::{Receiver, Sender};
use parking_lot::RwLock;
use shared::{Coin, TradeSide};

use crate::services::api::ApiClient;
use crate::services::session::SessionStore;

pub(crate) use event_handler::AppEventHandler;
pub use events::AppEvent;
pub use state::{AppState, AuthState, Screen};

/// The application: shared state plus the task-result channel.
pub struct App {
    pub(crate) state: Arc<RwLock<AppState>>,
    pub(crate) event_tx: Sender<AppEvent>,
    event_rx: Receiver<AppEvent>,
}

impl App {
    /// Build the app with the default on-disk session store.
    pub fn new() -> Self {
        Self::with_session_store(Arc::new(SessionStore::new()))
    }

    /// Build the app over an explicit session store.
    ///
    /// If the store holds a session, the user starts on the dashboard
    /// with a profile refresh in flight; a stale token surfaces as a 401
    /// event that forces logout. Otherwise the user starts anonymous on
    /// the auth screen.
    pub fn with_session_store(session_store: Arc<SessionStore>) -> Self {
        let restored = session_store.load();
        let api_client = Arc::new(ApiClient::new(session_store.clone()));
        let (event_tx, event_rx) = async_channel::unbounded();

        let mut app_state = AppState {
            current_screen: Screen::Auth,
            auth: AuthState::login(),
            session: Default::default(),
            market: Default::default(),
            portfolio: Default::default(),
            trade: Default::default(),
            watchlist: Default::default(),
            pending_notifications: Vec::new(),
            api_client,
            session_store,
        };

        let restored_session = restored.is_some();
        if let Some(session) = restored {
            tracing::info!(username = %session.user.username, "Restored session");
            app_state.session.token = Some(session.token);
            app_state.session.user = Some(session.user);
            app_state.current_screen = Screen::Dashboard;
        }

        let app = App {
            state: Arc::new(RwLock::new(app_state)),
            event_tx,
            event_rx,
        };

        if restored_session {
            // Validate the token against the server and warm the dashboard.
            tasks::portfolio::fetch_profile(app.state.clone(), app.event_tx.clone());
            tasks::portfolio::fetch_stats(app.state.clone(), app.event_tx.clone());
            tasks::portfolio::fetch_holdings(app.state.clone(), app.event_tx.clone());
            tasks::portfolio::fetch_trades(app.state.clone(), app.event_tx.clone());
            tasks::portfolio::fetch_watchlist(app.state.clone(), app.event_tx.clone());
        }

        app
    }

    /// Shared state handle, for the UI layer.
    pub fn state(&self) -> &Arc<RwLock<AppState>> {
        &self.state
    }

    /// Drain and apply all events resolved since the previous frame.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event_impl(event);
        }
    }

    // UI-facing action methods. Each delegates to a free handler so the
    // handlers stay testable without an App.

    pub fn handle_login_click(&mut self, email: String, password: String) {
        handlers::auth::handle_login_click(self.state.clone(), self.event_tx.clone(), email, password);
    }

    pub fn handle_register_click(
        &mut self,
        username: String,
        email: String,
        password: String,
        confirm_password: String,
    ) {
        handlers::auth::handle_register_click(
            self.state.clone(),
            self.event_tx.clone(),
            username,
            email,
            password,
            confirm_password,
        );
    }

    pub fn handle_logout_click(&mut self) {
        handlers::auth::handle_logout_click(self.state.clone());
    }

    pub fn handle_switch_to_login(&mut self) {
        handlers::auth::handle_switch_to_login(self.state.clone());
    }

    pub fn handle_switch_to_register(&mut self) {
        handlers::auth::handle_switch_to_register(self.state.clone());
    }

    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), self.event_tx.clone(), screen);
    }

    pub fn next_screen(&mut self) {
        handlers::navigation::next_screen(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_market_sort_change(&mut self, field: state::SortField, order: shared::SortOrder) {
        handlers::market::handle_sort_change(self.state.clone(), self.event_tx.clone(), field, order);
    }

    pub fn handle_market_refresh(&mut self) {
        handlers::market::handle_refresh(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_trade_submit(&mut self) {
        handlers::trade::handle_trade_submit(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_trade_coin_select(&mut self, coin: Coin) {
        handlers::trade::handle_trade_coin_select(self.state.clone(), coin);
    }

    pub fn handle_trade_side_change(&mut self, side: TradeSide) {
        handlers::trade::handle_trade_side_change(self.state.clone(), side);
    }

    pub fn handle_watchlist_toggle(&mut self, coin_id: i64) {
        handlers::watchlist::handle_watchlist_toggle(self.state.clone(), self.event_tx.clone(), coin_id);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;
    use shared::{AuthResponse, User, UserStats};
    use std::sync::atomic::{AtomicU32, Ordering};

    static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    fn temp_store() -> Arc<SessionStore> {
        let dir = std::env::temp_dir().join(format!(
            "cointerm-app-test-{}-{}",
            std::process::id(),
            DIR_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        Arc::new(SessionStore::with_dir(dir))
    }

    fn sample_user() -> User {
        User {
            id: 7,
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            balance: 10_000.0,
            created_at: "2026-01-01T00:00:00Z".to_string(),
            updated_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn anonymous_start_lands_on_auth_screen() {
        let app = App::with_session_store(temp_store());
        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Auth);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn restored_session_starts_on_dashboard() {
        let store = temp_store();
        store.save("tok-xyz", &sample_user()).unwrap();

        let app = App::with_session_store(store.clone());
        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Dashboard);
        assert!(state.is_authenticated());
        assert_eq!(state.session.token.as_deref(), Some("tok-xyz"));

        drop(state);
        store.clear();
    }

    #[test]
    fn login_success_persists_session_and_opens_dashboard() {
        let store = temp_store();
        let mut app = App::with_session_store(store.clone());

        app.event_tx
            .send_blocking(AppEvent::LoginResult(Ok(AuthResponse {
                token: "tok-login".to_string(),
                user: sample_user(),
            })))
            .unwrap();
        app.on_tick();

        {
            let state = app.state.read();
            assert_eq!(state.current_screen, Screen::Dashboard);
            assert!(state.is_authenticated());
        }
        let persisted = store.load().expect("session persisted to disk");
        assert_eq!(persisted.token, "tok-login");
        assert_eq!(persisted.user.username, "bob");

        store.clear();
    }

    #[test]
    fn login_failure_stays_on_form_with_error() {
        let mut app = App::with_session_store(temp_store());

        app.event_tx
            .send_blocking(AppEvent::LoginResult(Err(ApiError::Unauthorized)))
            .unwrap();
        app.on_tick();

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Auth);
        assert!(!state.is_authenticated());
        match &state.auth {
            AuthState::Login { error, .. } => {
                assert_eq!(error.as_deref(), Some("Invalid email or password"));
            }
            other => panic!("expected login form, got {:?}", other),
        }
    }

    #[test]
    fn unauthorized_event_forces_logout_once() {
        let store = temp_store();
        store.save("tok-stale", &sample_user()).unwrap();
        let mut app = App::with_session_store(store.clone());

        // HTTP layer clears the store before the event is observed.
        store.clear();
        app.event_tx
            .send_blocking(AppEvent::StatsResult(Err(ApiError::Unauthorized)))
            .unwrap();
        app.on_tick();

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Auth);
        assert!(!state.is_authenticated());
        assert!(store.load().is_none());
        assert_eq!(state.pending_notifications.len(), 1);
    }

    #[test]
    fn login_click_marks_form_pending_until_result() {
        let mut app = App::with_session_store(temp_store());

        app.handle_login_click("bob@example.com".to_string(), "hunter22".to_string());
        {
            let state = app.state.read();
            match &state.auth {
                AuthState::Login { error, pending, .. } => {
                    assert!(*pending);
                    assert!(error.is_none(), "progress must not render as an error");
                }
                other => panic!("expected login form, got {:?}", other),
            }
        }

        app.event_tx
            .send_blocking(AppEvent::LoginResult(Err(ApiError::Unauthorized)))
            .unwrap();
        app.on_tick();

        let state = app.state.read();
        match &state.auth {
            AuthState::Login { error, pending, .. } => {
                assert!(!*pending);
                assert_eq!(error.as_deref(), Some("Invalid email or password"));
            }
            other => panic!("expected login form, got {:?}", other),
        }
    }

    #[test]
    fn tab_cycle_skips_auth_when_signed_in() {
        let store = temp_store();
        store.save("tok-cycle", &sample_user()).unwrap();
        let mut app = App::with_session_store(store.clone());
        assert_eq!(app.state.read().current_screen, Screen::Dashboard);

        app.next_screen();
        assert_eq!(app.state.read().current_screen, Screen::Trade);
        app.next_screen();
        assert_eq!(app.state.read().current_screen, Screen::Market);
        app.next_screen();
        assert_eq!(app.state.read().current_screen, Screen::Dashboard);

        store.clear();
    }

    #[test]
    fn tab_cycle_skips_protected_screens_when_anonymous() {
        let mut app = App::with_session_store(temp_store());
        assert_eq!(app.state.read().current_screen, Screen::Auth);

        app.next_screen();
        assert_eq!(app.state.read().current_screen, Screen::Market);
        app.next_screen();
        assert_eq!(app.state.read().current_screen, Screen::Auth);
    }

    #[test]
    fn stats_event_updates_dashboard() {
        let mut app = App::with_session_store(temp_store());

        app.event_tx
            .send_blocking(AppEvent::StatsResult(Ok(UserStats {
                balance: 9_500.0,
                portfolio_value: 1_200.0,
                total_value: 10_700.0,
                total_trades: 3,
                total_holdings: 2,
                watchlist_count: 4,
            })))
            .unwrap();
        app.on_tick();

        let state = app.state.read();
        let stats = state.portfolio.stats.as_ref().expect("stats applied");
        assert_eq!(stats.total_trades, 3);
        assert!(!state.portfolio.loading);
    }
}
