//! # Trade Screen
//!
//! Order panel: pick a coin, a side, and a quantity. The preview shows
//! the indicative total and taker fee at the displayed price; actual
//! settlement happens at the server's quote.

use shared::utils::{format_currency, format_price};
use shared::{Coin, TradeSide};

use crate::app::handlers::trade::trade_preview;
use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, price_display};

/// Render the trade screen.
pub fn render(ui: &mut egui::Ui, app: &mut App) {
    let theme = Theme::default();

    let (coins, selected, side, mut quantity_input, submitting, error, balance) = {
        let state = app.state().read();
        (
            state.market.coins.clone(),
            state.trade.selected_coin.clone(),
            state.trade.side,
            state.trade.quantity_input.clone(),
            state.trade.submitting,
            state.trade.error.clone(),
            state.session.user.as_ref().map(|u| u.balance).unwrap_or(0.0),
        )
    };

    ui.heading("Trade");
    ui.add_space(6.0);
    price_display::render_amount(ui, "Cash available", balance, &theme);
    ui.add_space(12.0);

    let mut select_coin: Option<Coin> = None;
    let mut new_side: Option<TradeSide> = None;

    ui.horizontal(|ui| {
        ui.label("Coin");
        let selected_text = selected
            .as_ref()
            .map(|c| format!("{} ({})", c.name, c.symbol))
            .unwrap_or_else(|| "Select a coin".to_string());
        egui::ComboBox::from_id_salt("trade_coin")
            .selected_text(selected_text)
            .width(220.0)
            .show_ui(ui, |ui| {
                for coin in &coins {
                    let is_selected = selected.as_ref().map(|c| c.id) == Some(coin.id);
                    if ui
                        .selectable_label(is_selected, format!("{} ({})", coin.name, coin.symbol))
                        .clicked()
                    {
                        select_coin = Some(coin.clone());
                    }
                }
            });
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Side");
        for candidate in [TradeSide::Buy, TradeSide::Sell] {
            if ui
                .selectable_label(side == candidate, candidate.label())
                .clicked()
            {
                new_side = Some(candidate);
            }
        }
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Quantity");
        ui.add_sized(
            [160.0, 26.0],
            egui::TextEdit::singleline(&mut quantity_input).hint_text("0.0"),
        );
    });
    ui.add_space(12.0);

    if let Some(coin) = &selected {
        ui.horizontal(|ui| {
            ui.colored_label(theme.dim, "Price");
            ui.label(format_price(coin.current_price));
            price_display::render_change(ui, coin.price_change_percentage_24h, &theme);
        });

        if let Ok(quantity) = quantity_input.trim().parse::<f64>() {
            if quantity.is_finite() && quantity > 0.0 {
                let (total, fee) = trade_preview(quantity, coin.current_price);
                ui.horizontal(|ui| {
                    ui.colored_label(theme.dim, "Total");
                    ui.label(format_currency(total));
                    ui.separator();
                    ui.colored_label(theme.dim, "Est. fee");
                    ui.label(format_currency(fee));
                });
            }
        }
        ui.add_space(12.0);
    }

    if let Some(error) = &error {
        forms::render_error(ui, error, &theme);
    }

    let fill = match side {
        TradeSide::Buy => theme.success.linear_multiply(0.5),
        TradeSide::Sell => theme.error.linear_multiply(0.5),
    };
    let label = if submitting {
        "Submitting..."
    } else {
        side.label()
    };
    let submit = ui
        .add_enabled_ui(!submitting, |ui| {
            forms::render_button(ui, label, Some(fill), Some(egui::vec2(160.0, 32.0)))
        })
        .inner
        .clicked();

    // Flush edits before the submit handler reads the panel state.
    {
        let mut state = app.state().write();
        state.trade.quantity_input = quantity_input;
    }

    if let Some(coin) = select_coin {
        app.handle_trade_coin_select(coin);
    }
    if let Some(side) = new_side {
        app.handle_trade_side_change(side);
    }
    if submit {
        app.handle_trade_submit();
    }
}
