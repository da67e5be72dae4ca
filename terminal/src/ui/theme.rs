//! # GUI Theme
//!
//! Dark terminal theme for egui. High contrast, sharp edges, green for
//! gains and red for losses.

use egui::{Color32, Context, Stroke, Visuals};

/// Application color palette.
pub struct Theme {
    /// Near-black background
    pub background: Color32,
    /// Primary text
    pub normal: Color32,
    /// Selected/highlighted items
    pub selected: Color32,
    /// Border color
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    /// Success/positive
    pub success: Color32,
    /// Error/negative
    pub error: Color32,
    /// Warning/attention
    pub warning: Color32,
    /// Price up (green)
    pub price_up: Color32,
    /// Price down (red)
    pub price_down: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color32::from_rgb(10, 10, 12),
            normal: Color32::from_rgb(235, 235, 235),
            selected: Color32::from_rgb(255, 170, 0),
            border: Color32::from_rgb(51, 51, 51),
            dim: Color32::from_rgb(150, 150, 150),
            success: Color32::from_rgb(0, 200, 90),
            error: Color32::from_rgb(235, 60, 60),
            warning: Color32::from_rgb(255, 170, 0),
            price_up: Color32::from_rgb(0, 200, 90),
            price_down: Color32::from_rgb(235, 60, 60),
        }
    }
}

impl Theme {
    /// Color for a price change percentage.
    pub fn price_change_color(&self, change: f64) -> Color32 {
        if change > 0.0 {
            self.price_up
        } else if change < 0.0 {
            self.price_down
        } else {
            self.dim
        }
    }

    /// Signed percentage text with its color.
    pub fn format_price_change(&self, change: f64) -> (String, Color32) {
        (
            shared::utils::format_percentage(change),
            self.price_change_color(change),
        )
    }

    /// Install the theme on the egui context. Called once at startup;
    /// the theme is fixed, not persisted.
    pub fn apply(&self, ctx: &Context) {
        let mut visuals = Visuals::dark();
        visuals.override_text_color = Some(self.normal);
        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        visuals.extreme_bg_color = Color32::from_rgb(20, 20, 24);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.bg_fill = Color32::from_rgb(26, 26, 30);
        visuals.widgets.hovered.bg_fill = Color32::from_rgb(40, 40, 46);
        visuals.widgets.active.bg_fill = Color32::from_rgb(55, 55, 62);
        visuals.selection.bg_fill = self.selected.linear_multiply(0.35);
        ctx.set_visuals(visuals);
    }
}
