//! # Trade Endpoints

use shared::{PageQuery, Trade, TradePage, TradeRequest};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// List the authenticated user's trades, newest first.
pub async fn get_trades(
    client: &ApiClient,
    query: Option<&PageQuery>,
) -> Result<TradePage, ApiError> {
    match query {
        Some(q) => client.get_query("/api/trades", q).await,
        None => client.get("/api/trades").await,
    }
}

/// Submit a trade. The server validates balance/holdings and settles at
/// its own authority; no client-side state is rolled back on failure
/// because none was changed optimistically.
#[tracing::instrument(skip(client), fields(coin_id = request.coin_id, side = ?request.side, quantity = request.quantity))]
pub async fn create_trade(client: &ApiClient, request: &TradeRequest) -> Result<Trade, ApiError> {
    tracing::info!("Submitting trade");
    client.post("/api/trades", request).await
}
