//! # Trade Handlers
//!
//! Trade panel actions. Validation is a pure function so "no request is
//! issued for invalid input" is a checkable property, not an accident of
//! UI wiring.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use shared::{Coin, TradeRequest, TradeSide, TAKER_FEE};

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use crate::utils::{runtime, validation};

/// Build the submission payload, or explain why there is nothing to
/// submit. The price is the one currently displayed; the server owns any
/// movement between display and execution.
pub(crate) fn build_trade_request(
    coin: Option<&Coin>,
    side: TradeSide,
    quantity_input: &str,
) -> Result<TradeRequest, String> {
    let coin = coin.ok_or_else(|| "Select a coin to trade".to_string())?;
    let quantity = validation::parse_quantity(quantity_input)?;
    Ok(TradeRequest {
        coin_id: coin.id,
        side,
        quantity,
        price: coin.current_price,
    })
}

/// Display-only preview of the order total and the estimated taker fee.
/// Nothing here is persisted or sent on the wire.
pub(crate) fn trade_preview(quantity: f64, price: f64) -> (f64, f64) {
    let total = quantity * price;
    (total, total * TAKER_FEE)
}

/// Handle trade submit click
pub(crate) fn handle_trade_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let request = {
        let mut state = state.write();
        if state.trade.submitting {
            return;
        }
        match build_trade_request(
            state.trade.selected_coin.as_ref(),
            state.trade.side,
            &state.trade.quantity_input,
        ) {
            Ok(request) => {
                state.trade.submitting = true;
                state.trade.error = None;
                request
            }
            Err(message) => {
                state.trade.error = Some(message);
                return;
            }
        }
    };

    let api_client = state.read().api_client.clone();
    let tx = event_tx.clone();
    runtime::spawn(async move {
        let result = api_client.create_trade(&request).await;
        let _ = tx.send(AppEvent::TradeSubmitted(result)).await;
    });
}

/// Select a coin in the trade panel
pub(crate) fn handle_trade_coin_select(state: Arc<RwLock<AppState>>, coin: Coin) {
    let mut state = state.write();
    state.trade.selected_coin = Some(coin);
    state.trade.error = None;
}

/// Flip between buy and sell
pub(crate) fn handle_trade_side_change(state: Arc<RwLock<AppState>>, side: TradeSide) {
    state.write().trade.side = side;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin() -> Coin {
        Coin {
            id: 7,
            symbol: "BTC".to_string(),
            name: "Bitcoin".to_string(),
            current_price: 50_000.0,
            market_cap: 1e12,
            volume_24h: 3e10,
            price_change_24h: 1_000.0,
            price_change_percentage_24h: 2.0,
            last_updated: "2026-01-01T00:00:00Z".to_string(),
            created_at: "2020-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn request_uses_displayed_price() {
        let coin = coin();
        let request = build_trade_request(Some(&coin), TradeSide::Buy, "0.5").unwrap();
        assert_eq!(request.coin_id, 7);
        assert_eq!(request.quantity, 0.5);
        assert_eq!(request.price, 50_000.0);
    }

    #[test]
    fn no_coin_means_no_request() {
        assert!(build_trade_request(None, TradeSide::Buy, "1").is_err());
    }

    #[test]
    fn non_positive_quantity_means_no_request() {
        let coin = coin();
        assert!(build_trade_request(Some(&coin), TradeSide::Sell, "0").is_err());
        assert!(build_trade_request(Some(&coin), TradeSide::Sell, "-1").is_err());
        assert!(build_trade_request(Some(&coin), TradeSide::Sell, "").is_err());
        assert!(build_trade_request(Some(&coin), TradeSide::Sell, "abc").is_err());
    }

    #[test]
    fn preview_applies_taker_fee() {
        let (total, fee) = trade_preview(2.0, 100.0);
        assert_eq!(total, 200.0);
        assert_eq!(fee, 200.0 * TAKER_FEE);
    }
}
