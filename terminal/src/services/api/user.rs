//! # User Endpoints
//!
//! Profile, balance, holdings, and the server-computed stats aggregate.

use shared::{BalanceData, HoldingsPage, PageQuery, User, UserStats};

use super::client::ApiClient;
use crate::core::error::ApiError;

pub async fn get_profile(client: &ApiClient) -> Result<User, ApiError> {
    client.get("/api/user/profile").await
}

pub async fn get_balance(client: &ApiClient) -> Result<f64, ApiError> {
    let data: BalanceData = client.get("/api/user/balance").await?;
    Ok(data.balance)
}

pub async fn get_holdings(
    client: &ApiClient,
    query: Option<&PageQuery>,
) -> Result<HoldingsPage, ApiError> {
    match query {
        Some(q) => client.get_query("/api/user/holdings", q).await,
        None => client.get("/api/user/holdings").await,
    }
}

pub async fn get_user_stats(client: &ApiClient) -> Result<UserStats, ApiError> {
    client.get("/api/user/stats").await
}
