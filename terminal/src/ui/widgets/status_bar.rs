//! # Status Bar Widget
//!
//! Bottom status bar: backend address, cash balance, and coin count.

use crate::app::App;
use crate::ui::theme::Theme;

/// Render the bottom status bar.
pub fn render_status_bar(ui: &mut egui::Ui, app: &App, theme: &Theme) {
    let state = app.state().read();

    ui.horizontal(|ui| {
        ui.colored_label(theme.dim, state.api_client.base_url());
        ui.separator();

        if let Some(user) = &state.session.user {
            ui.label(format!(
                "Cash: {}",
                shared::utils::format_currency(user.balance)
            ));
            ui.separator();
        }

        if state.market.loading {
            ui.colored_label(theme.warning, "Loading...");
            ui.separator();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("{} coins", state.market.coins.len()));
        });
    });
}
