use serde::{Deserialize, Serialize};

use super::market::{Coin, Pagination};

/// Trade direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn label(&self) -> &'static str {
        match self {
            TradeSide::Buy => "Buy",
            TradeSide::Sell => "Sell",
        }
    }
}

/// An executed trade as recorded by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    pub id: i64,
    pub user_id: i64,
    pub coin_id: i64,
    #[serde(rename = "type")]
    pub side: TradeSide,
    pub quantity: f64,
    pub price: f64,
    pub total_amount: f64,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<Coin>,
}

/// Trade submission payload.
///
/// `price` is the price the client was displaying at submit time; the
/// server owns the race between display and execution and may settle at
/// its own quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeRequest {
    pub coin_id: i64,
    #[serde(rename = "type")]
    pub side: TradeSide,
    pub quantity: f64,
    pub price: f64,
}

/// Payload of `GET /api/trades`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradePage {
    pub trades: Vec<Trade>,
    pub pagination: Pagination,
}

/// Display-only fee rates. Never sent on the wire; the server applies
/// its own fee schedule.
pub const MAKER_FEE: f64 = 0.001;
pub const TAKER_FEE: f64 = 0.0015;
