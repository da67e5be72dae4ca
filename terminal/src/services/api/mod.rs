//! # Backend API Client Module
//!
//! HTTP client for the trading backend REST API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and the ApiService impl
//! ├── client.rs     - ApiClient struct, envelope unwrapping, 401 policy
//! ├── auth.rs       - Authentication endpoints (login, register, profile)
//! ├── coins.rs      - Coin endpoints (list, detail, symbol, market data)
//! ├── trades.rs     - Trade endpoints (list, create)
//! ├── user.rs       - User endpoints (profile, balance, holdings, stats)
//! └── watchlist.rs  - Watchlist endpoints (list, add, remove)
//! ```

pub mod auth;
pub mod client;
pub mod coins;
pub mod trades;
pub mod user;
pub mod watchlist;

pub use client::ApiClient;

use async_trait::async_trait;
use shared::{
    AuthResponse, Coin, CoinPage, HoldingsPage, MarketData, PageQuery, Trade, TradePage,
    TradeRequest, User, UserStats, WatchlistEntry,
};

use crate::core::error::ApiError;
use crate::core::service::ApiService;

#[async_trait]
impl ApiService for ApiClient {
    async fn login(&self, email: String, password: String) -> Result<AuthResponse, ApiError> {
        auth::login(self, email, password).await
    }

    async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<AuthResponse, ApiError> {
        auth::register(self, username, email, password).await
    }

    async fn get_auth_profile(&self) -> Result<User, ApiError> {
        auth::get_auth_profile(self).await
    }

    async fn get_coins(&self, query: Option<&PageQuery>) -> Result<CoinPage, ApiError> {
        coins::get_coins(self, query).await
    }

    async fn get_coin(&self, id: i64) -> Result<Coin, ApiError> {
        coins::get_coin(self, id).await
    }

    async fn get_coin_by_symbol(&self, symbol: &str) -> Result<Coin, ApiError> {
        coins::get_coin_by_symbol(self, symbol).await
    }

    async fn get_market_data(&self) -> Result<MarketData, ApiError> {
        coins::get_market_data(self).await
    }

    async fn get_trades(&self, query: Option<&PageQuery>) -> Result<TradePage, ApiError> {
        trades::get_trades(self, query).await
    }

    async fn create_trade(&self, request: &TradeRequest) -> Result<Trade, ApiError> {
        trades::create_trade(self, request).await
    }

    async fn get_watchlist(&self) -> Result<Vec<WatchlistEntry>, ApiError> {
        watchlist::get_watchlist(self).await
    }

    async fn add_to_watchlist(&self, coin_id: i64) -> Result<WatchlistEntry, ApiError> {
        watchlist::add_to_watchlist(self, coin_id).await
    }

    async fn remove_from_watchlist(&self, id: i64) -> Result<(), ApiError> {
        watchlist::remove_from_watchlist(self, id).await
    }

    async fn get_profile(&self) -> Result<User, ApiError> {
        user::get_profile(self).await
    }

    async fn get_balance(&self) -> Result<f64, ApiError> {
        user::get_balance(self).await
    }

    async fn get_holdings(&self, query: Option<&PageQuery>) -> Result<HoldingsPage, ApiError> {
        user::get_holdings(self, query).await
    }

    async fn get_user_stats(&self) -> Result<UserStats, ApiError> {
        user::get_user_stats(self).await
    }
}
