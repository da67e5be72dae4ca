//! # Coin Endpoints
//!
//! Market snapshots: coin listings, single-coin lookups, and the
//! aggregate market summary.

use shared::{Coin, CoinPage, MarketData, PageQuery};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// List coins, paginated and sorted server-side.
pub async fn get_coins(
    client: &ApiClient,
    query: Option<&PageQuery>,
) -> Result<CoinPage, ApiError> {
    match query {
        Some(q) => client.get_query("/api/coins", q).await,
        None => client.get("/api/coins").await,
    }
}

/// Fetch one coin by id.
pub async fn get_coin(client: &ApiClient, id: i64) -> Result<Coin, ApiError> {
    client.get(&format!("/api/coins/{}", id)).await
}

/// Fetch one coin by ticker symbol.
pub async fn get_coin_by_symbol(client: &ApiClient, symbol: &str) -> Result<Coin, ApiError> {
    client.get(&format!("/api/coins/symbol/{}", symbol)).await
}

/// Fetch the aggregate market summary.
pub async fn get_market_data(client: &ApiClient) -> Result<MarketData, ApiError> {
    client.get("/api/coins/market/data").await
}
