//! # Navigation Bar Widget
//!
//! Top bar with screen tabs, the signed-in user, and logout.

use crate::app::{App, Screen};
use crate::ui::theme::Theme;

/// Render the top navigation bar.
pub fn render_nav_bar(ui: &mut egui::Ui, app: &mut App, theme: &Theme) {
    let (current, username, authenticated) = {
        let state = app.state().read();
        (
            state.current_screen,
            state.session.user.as_ref().map(|u| u.username.clone()),
            state.is_authenticated(),
        )
    };

    ui.horizontal(|ui| {
        ui.colored_label(theme.selected, egui::RichText::new("COINTERM").strong());
        ui.separator();

        for &screen in Screen::all() {
            if screen == Screen::Auth && authenticated {
                continue;
            }
            if screen.requires_auth() && !authenticated {
                continue;
            }
            let selected = screen == current;
            if ui.selectable_label(selected, screen.title()).clicked() && !selected {
                app.handle_screen_change(screen);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(username) = username {
                if ui.button("Logout").clicked() {
                    app.handle_logout_click();
                }
                ui.colored_label(theme.dim, username);
            }
        });
    });
}
