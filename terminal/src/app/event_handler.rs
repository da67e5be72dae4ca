//! # Event Handler
//!
//! Applies async task results to application state.
//!
//! Every event is first checked for a 401: that path wipes the session
//! and navigates to the auth screen exactly once per response, with no
//! distinction between an expired and a never-valid token (the session
//! files were already removed by the HTTP layer).

use shared::AuthResponse;

use crate::app::state::{AuthState, Notification, Screen, SessionState};
use crate::app::tasks::portfolio;
use crate::app::{App, AppEvent};
use crate::core::error::ApiError;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        if event.is_unauthorized() {
            self.handle_session_expired();
            return;
        }

        match event {
            AppEvent::LoginResult(result) => self.handle_auth_result(result, "Welcome back"),
            AppEvent::RegisterResult(result) => self.handle_auth_result(result, "Account created"),
            AppEvent::ProfileResult(result) => self.handle_profile_result(result),
            AppEvent::CoinsResult(result) => self.handle_coins_result(result),
            AppEvent::MarketDataResult(result) => self.handle_market_data_result(result),
            AppEvent::TradesResult(result) => self.handle_trades_result(result),
            AppEvent::TradeSubmitted(result) => self.handle_trade_submitted(result),
            AppEvent::BalanceResult(result) => self.handle_balance_result(result),
            AppEvent::HoldingsResult(result) => self.handle_holdings_result(result),
            AppEvent::StatsResult(result) => self.handle_stats_result(result),
            AppEvent::WatchlistResult(result) => self.handle_watchlist_result(result),
            AppEvent::WatchlistAdded(result) => self.handle_watchlist_added(result),
            AppEvent::WatchlistRemoved { id, result } => {
                self.handle_watchlist_removed(id, result)
            }
        }
    }
}

impl App {
    /// Forced logout on 401, from any endpoint.
    pub(crate) fn handle_session_expired(&mut self) {
        tracing::warn!("Session rejected by server, forcing logout");
        let mut state = self.state.write();
        state.session_store.clear();
        state.session = SessionState::default();
        state.portfolio = Default::default();
        state.watchlist = Default::default();
        state.trade = Default::default();
        state.auth = AuthState::login();
        state.current_screen = Screen::Auth;
        state.notify(Notification::error("Session expired. Please sign in again."));
    }

    fn handle_auth_result(&mut self, result: Result<AuthResponse, ApiError>, greeting: &str) {
        let mut state = self.state.write();
        match result {
            Ok(auth) => {
                // Two sequential writes, token first, as the storage
                // contract requires.
                if let Err(e) = state.session_store.save(&auth.token, &auth.user) {
                    tracing::error!(error = %e, "Failed to persist session");
                }
                let username = auth.user.username.clone();
                state.session = SessionState {
                    token: Some(auth.token),
                    user: Some(auth.user),
                };
                state.auth = AuthState::login();
                state.current_screen = Screen::Dashboard;
                state.notify(Notification::success(format!("{}, {}!", greeting, username)));
                drop(state);

                portfolio::fetch_stats(self.state.clone(), self.event_tx.clone());
                portfolio::fetch_holdings(self.state.clone(), self.event_tx.clone());
                portfolio::fetch_trades(self.state.clone(), self.event_tx.clone());
                portfolio::fetch_watchlist(self.state.clone(), self.event_tx.clone());
            }
            Err(ApiError::Unauthorized) => {
                state.auth.set_pending(false);
                state.auth.set_error("Invalid email or password");
            }
            Err(e) => {
                state.auth.set_pending(false);
                state.auth.set_error(e.to_string());
            }
        }
    }

    fn handle_profile_result(&mut self, result: Result<shared::User, ApiError>) {
        match result {
            Ok(user) => {
                let mut state = self.state.write();
                if let Some(token) = state.session.token.clone() {
                    if let Err(e) = state.session_store.save(&token, &user) {
                        tracing::warn!(error = %e, "Failed to refresh persisted user");
                    }
                    state.session.user = Some(user);
                }
            }
            Err(e) => {
                // Non-401 failure: keep the restored session, surface nothing.
                tracing::warn!(error = %e, "Profile refresh failed");
            }
        }
    }

    fn handle_coins_result(&mut self, result: Result<shared::CoinPage, ApiError>) {
        let mut state = self.state.write();
        state.market.loading = false;
        match result {
            Ok(page) => {
                // Keep the trade panel's displayed price current when its
                // coin appears in the refreshed listing.
                let selected_id = state.trade.selected_coin.as_ref().map(|c| c.id);
                if let Some(id) = selected_id {
                    if let Some(fresh) = page.coins.iter().find(|c| c.id == id) {
                        state.trade.selected_coin = Some(fresh.clone());
                    }
                }
                state.market.coins = page.coins;
                state.market.error = None;
            }
            Err(e) => {
                state.market.error = Some(e.to_string());
            }
        }
    }

    fn handle_market_data_result(&mut self, result: Result<shared::MarketData, ApiError>) {
        let mut state = self.state.write();
        match result {
            Ok(data) => state.market.market_data = Some(data),
            Err(e) => tracing::warn!(error = %e, "Market data fetch failed"),
        }
    }

    fn handle_trades_result(&mut self, result: Result<shared::TradePage, ApiError>) {
        let mut state = self.state.write();
        match result {
            Ok(page) => {
                state.portfolio.trades = page.trades;
            }
            Err(e) => {
                state.portfolio.error = Some(e.to_string());
            }
        }
    }

    fn handle_trade_submitted(&mut self, result: Result<shared::Trade, ApiError>) {
        let mut state = self.state.write();
        state.trade.submitting = false;
        match result {
            Ok(trade) => {
                let symbol = trade
                    .coin
                    .as_ref()
                    .map(|c| c.symbol.clone())
                    .or_else(|| {
                        state
                            .trade
                            .selected_coin
                            .as_ref()
                            .map(|c| c.symbol.clone())
                    })
                    .unwrap_or_else(|| format!("coin #{}", trade.coin_id));
                let verb = match trade.side {
                    shared::TradeSide::Buy => "Bought",
                    shared::TradeSide::Sell => "Sold",
                };
                state.notify(Notification::success(format!(
                    "{} {} {}",
                    verb, trade.quantity, symbol
                )));
                state.trade.quantity_input.clear();
                state.trade.selected_coin = None;
                state.trade.error = None;
                drop(state);

                // Balance and portfolio moved server-side; refresh them.
                portfolio::fetch_balance(self.state.clone(), self.event_tx.clone());
                portfolio::fetch_stats(self.state.clone(), self.event_tx.clone());
                portfolio::fetch_holdings(self.state.clone(), self.event_tx.clone());
                portfolio::fetch_trades(self.state.clone(), self.event_tx.clone());
            }
            Err(e) => {
                state.trade.error = Some(e.to_string());
                state.notify(Notification::error(format!("Trade failed: {}", e)));
            }
        }
    }

    fn handle_balance_result(&mut self, result: Result<f64, ApiError>) {
        match result {
            Ok(balance) => {
                let mut state = self.state.write();
                if let Some(user) = state.session.user.as_mut() {
                    user.balance = balance;
                }
                let persisted = state
                    .session
                    .token
                    .clone()
                    .zip(state.session.user.clone());
                if let Some((token, user)) = persisted {
                    if let Err(e) = state.session_store.save(&token, &user) {
                        tracing::warn!(error = %e, "Failed to refresh persisted balance");
                    }
                }
            }
            Err(e) => tracing::warn!(error = %e, "Balance refresh failed"),
        }
    }

    fn handle_holdings_result(&mut self, result: Result<shared::HoldingsPage, ApiError>) {
        let mut state = self.state.write();
        match result {
            Ok(page) => {
                state.portfolio.holdings = page.holdings;
                state.portfolio.portfolio_value = page.portfolio_value;
            }
            Err(e) => {
                state.portfolio.error = Some(e.to_string());
            }
        }
    }

    fn handle_stats_result(&mut self, result: Result<shared::UserStats, ApiError>) {
        let mut state = self.state.write();
        state.portfolio.loading = false;
        match result {
            Ok(stats) => {
                state.portfolio.stats = Some(stats);
                state.portfolio.error = None;
            }
            Err(e) => {
                state.portfolio.error = Some(e.to_string());
            }
        }
    }

    fn handle_watchlist_result(&mut self, result: Result<Vec<shared::WatchlistEntry>, ApiError>) {
        let mut state = self.state.write();
        state.watchlist.loading = false;
        match result {
            Ok(entries) => {
                state.watchlist.entries = entries;
                state.watchlist.error = None;
            }
            Err(e) => {
                state.watchlist.error = Some(e.to_string());
            }
        }
    }

    fn handle_watchlist_added(&mut self, result: Result<shared::WatchlistEntry, ApiError>) {
        let mut state = self.state.write();
        match result {
            Ok(entry) => {
                let symbol = entry
                    .coin
                    .as_ref()
                    .map(|c| c.symbol.clone())
                    .unwrap_or_else(|| format!("coin #{}", entry.coin_id));
                state.watchlist.entries.push(entry);
                state.notify(Notification::success(format!("{} added to watchlist", symbol)));
            }
            Err(e) => {
                state.notify(Notification::error(format!("Watchlist update failed: {}", e)));
            }
        }
    }

    fn handle_watchlist_removed(&mut self, id: i64, result: Result<(), ApiError>) {
        let mut state = self.state.write();
        match result {
            Ok(()) => {
                state.watchlist.entries.retain(|e| e.id != id);
            }
            Err(e) => {
                state.notify(Notification::error(format!("Watchlist update failed: {}", e)));
            }
        }
    }
}
