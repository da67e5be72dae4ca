use serde::{Deserialize, Serialize};

/// Read-only market snapshot for a single coin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coin {
    pub id: i64,
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub price_change_24h: f64,
    pub price_change_percentage_24h: f64,
    pub last_updated: String,
    pub created_at: String,
}

/// Aggregate market statistics, server-computed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketData {
    pub total_market_cap: f64,
    pub total_volume: f64,
    pub market_cap_change_percentage_24h: f64,
    pub active_cryptocurrencies: i64,
}

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

/// Query parameters for paginated list endpoints.
///
/// Fields set to `None` are omitted and the server applies its defaults
/// (page 1, limit 20, sorted by market cap descending).
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

impl PageQuery {
    pub fn with_limit(limit: u32) -> Self {
        PageQuery {
            limit: Some(limit),
            ..Default::default()
        }
    }
}

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Payload of `GET /api/coins`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinPage {
    pub coins: Vec<Coin>,
    pub pagination: Pagination,
}
