use serde::{Deserialize, Serialize};

use super::market::{Coin, Pagination};

/// A user's aggregated position in one coin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Holding {
    pub id: i64,
    pub user_id: i64,
    pub coin_id: i64,
    pub quantity: f64,
    pub average_price: f64,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<Coin>,
}

/// Payload of `GET /api/user/balance`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalanceData {
    pub balance: f64,
}

/// Payload of `GET /api/user/holdings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HoldingsPage {
    pub holdings: Vec<Holding>,
    pub portfolio_value: f64,
    pub pagination: Pagination,
}

/// Payload of `GET /api/user/stats`. All aggregates are server-computed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserStats {
    pub balance: f64,
    pub portfolio_value: f64,
    pub total_value: f64,
    pub total_trades: i64,
    pub total_holdings: i64,
    pub watchlist_count: i64,
}
