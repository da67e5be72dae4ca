use serde::{Deserialize, Serialize};

use super::market::Coin;

/// A watchlist entry: a coin tracked without a position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistEntry {
    pub id: i64,
    pub user_id: i64,
    pub coin_id: i64,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<Coin>,
}

/// Payload of `POST /api/watchlist`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchlistAddRequest {
    pub coin_id: i64,
}
