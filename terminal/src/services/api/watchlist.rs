//! # Watchlist Endpoints

use shared::{WatchlistAddRequest, WatchlistEntry};

use super::client::ApiClient;
use crate::core::error::ApiError;

pub async fn get_watchlist(client: &ApiClient) -> Result<Vec<WatchlistEntry>, ApiError> {
    client.get("/api/watchlist").await
}

pub async fn add_to_watchlist(
    client: &ApiClient,
    coin_id: i64,
) -> Result<WatchlistEntry, ApiError> {
    client
        .post("/api/watchlist", &WatchlistAddRequest { coin_id })
        .await
}

/// Remove an entry by its watchlist id (not the coin id).
pub async fn remove_from_watchlist(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/api/watchlist/{}", id)).await
}
