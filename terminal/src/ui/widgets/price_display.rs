//! # Price Display Widgets
//!
//! Colored price and change labels shared by the market, trade, and
//! dashboard screens.

use shared::utils::{format_percentage, format_price};

use crate::ui::theme::Theme;

/// Render a price with the standard abbreviation rules.
pub fn render_price(ui: &mut egui::Ui, price: f64, theme: &Theme) {
    ui.colored_label(theme.normal, format_price(price));
}

/// Render a signed percentage, colored by direction.
pub fn render_change(ui: &mut egui::Ui, change: f64, theme: &Theme) {
    ui.colored_label(theme.price_change_color(change), format_percentage(change));
}

/// Render a labelled money amount, e.g. for balances and totals.
pub fn render_amount(ui: &mut egui::Ui, label: &str, amount: f64, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.colored_label(theme.dim, label);
        ui.colored_label(theme.normal, shared::utils::format_currency(amount));
    });
}
