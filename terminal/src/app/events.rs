//! # Application Events
//!
//! Results of background tasks, sent to the main thread over the app's
//! unbounded channel and applied in
//! [`crate::app::event_handler`]. One request produces exactly one
//! event; nothing is retried or deduplicated, so when parameters change
//! mid-flight the last resolved event wins.

use shared::{AuthResponse, CoinPage, HoldingsPage, MarketData, Trade, TradePage, User, UserStats, WatchlistEntry};

use crate::core::error::ApiError;

/// Async task results sent to the main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login completed
    LoginResult(Result<AuthResponse, ApiError>),
    /// Registration completed
    RegisterResult(Result<AuthResponse, ApiError>),
    /// Profile refresh for a restored session
    ProfileResult(Result<User, ApiError>),
    /// Coin listing received
    CoinsResult(Result<CoinPage, ApiError>),
    /// Market aggregate received
    MarketDataResult(Result<MarketData, ApiError>),
    /// Trade history received
    TradesResult(Result<TradePage, ApiError>),
    /// Trade submission completed
    TradeSubmitted(Result<Trade, ApiError>),
    /// Balance refresh completed
    BalanceResult(Result<f64, ApiError>),
    /// Holdings received
    HoldingsResult(Result<HoldingsPage, ApiError>),
    /// Stats aggregate received
    StatsResult(Result<UserStats, ApiError>),
    /// Watchlist received
    WatchlistResult(Result<Vec<WatchlistEntry>, ApiError>),
    /// Watchlist add completed
    WatchlistAdded(Result<WatchlistEntry, ApiError>),
    /// Watchlist removal completed
    WatchlistRemoved { id: i64, result: Result<(), ApiError> },
}

impl AppEvent {
    /// Whether the event carries a 401. Checked first by the event
    /// handler so the forced-logout side effect runs exactly once per
    /// response, regardless of which endpoint produced it.
    ///
    /// Login and registration are exempt: a 401 there means bad
    /// credentials, which stays a form error rather than a forced
    /// logout.
    pub fn is_unauthorized(&self) -> bool {
        fn unauth<T>(result: &Result<T, ApiError>) -> bool {
            matches!(result, Err(ApiError::Unauthorized))
        }

        match self {
            AppEvent::LoginResult(_) | AppEvent::RegisterResult(_) => false,
            AppEvent::ProfileResult(r) => unauth(r),
            AppEvent::CoinsResult(r) => unauth(r),
            AppEvent::MarketDataResult(r) => unauth(r),
            AppEvent::TradesResult(r) => unauth(r),
            AppEvent::TradeSubmitted(r) => unauth(r),
            AppEvent::BalanceResult(r) => unauth(r),
            AppEvent::HoldingsResult(r) => unauth(r),
            AppEvent::StatsResult(r) => unauth(r),
            AppEvent::WatchlistResult(r) => unauth(r),
            AppEvent::WatchlistAdded(r) => unauth(r),
            AppEvent::WatchlistRemoved { result, .. } => unauth(result),
        }
    }
}
