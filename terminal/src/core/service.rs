//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and
//! modularity. Tasks and handlers talk to the backend through
//! [`ApiService`] so tests can substitute a mock.

use async_trait::async_trait;
use shared::{
    AuthResponse, Coin, CoinPage, HoldingsPage, MarketData, PageQuery, Trade, TradePage,
    TradeRequest, User, UserStats, WatchlistEntry,
};

use crate::core::error::ApiError;

/// Every REST operation the backend exposes to this client.
///
/// Implemented by [`crate::services::api::ApiClient`]; tests implement it
/// with canned responses.
#[async_trait]
pub trait ApiService: Send + Sync {
    // Auth
    async fn login(&self, email: String, password: String) -> Result<AuthResponse, ApiError>;
    async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<AuthResponse, ApiError>;
    async fn get_auth_profile(&self) -> Result<User, ApiError>;

    // Coins
    async fn get_coins(&self, query: Option<&PageQuery>) -> Result<CoinPage, ApiError>;
    async fn get_coin(&self, id: i64) -> Result<Coin, ApiError>;
    async fn get_coin_by_symbol(&self, symbol: &str) -> Result<Coin, ApiError>;
    async fn get_market_data(&self) -> Result<MarketData, ApiError>;

    // Trades
    async fn get_trades(&self, query: Option<&PageQuery>) -> Result<TradePage, ApiError>;
    async fn create_trade(&self, request: &TradeRequest) -> Result<Trade, ApiError>;

    // Watchlist
    async fn get_watchlist(&self) -> Result<Vec<WatchlistEntry>, ApiError>;
    async fn add_to_watchlist(&self, coin_id: i64) -> Result<WatchlistEntry, ApiError>;
    async fn remove_from_watchlist(&self, id: i64) -> Result<(), ApiError>;

    // User
    async fn get_profile(&self) -> Result<User, ApiError>;
    async fn get_balance(&self) -> Result<f64, ApiError>;
    async fn get_holdings(&self, query: Option<&PageQuery>) -> Result<HoldingsPage, ApiError>;
    async fn get_user_stats(&self) -> Result<UserStats, ApiError>;
}
