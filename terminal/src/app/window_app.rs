//! # Window Shell
//!
//! The eframe application: drains task events at the top of every frame,
//! forwards queued notifications to the toast system, and renders the
//! current screen between a nav bar and a status bar.

use std::time::Duration;

use egui_notify::Toasts;

use crate::app::state::NotificationKind;
use crate::app::{App, Screen};
use crate::ui::screens;
use crate::ui::theme::Theme;
use crate::ui::widgets::{nav_bar, status_bar};

/// Main window: the application core plus frame-local UI state.
pub struct TerminalWindow {
    app: App,
    toasts: Toasts,
}

impl TerminalWindow {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Theme::default().apply(&cc.egui_ctx);
        Self {
            app: App::new(),
            toasts: Toasts::default(),
        }
    }

    fn drain_notifications(&mut self) {
        let pending = {
            let mut state = self.app.state.write();
            std::mem::take(&mut state.pending_notifications)
        };
        for notification in pending {
            match notification.kind {
                NotificationKind::Success => {
                    self.toasts.success(notification.text);
                }
                NotificationKind::Error => {
                    self.toasts.error(notification.text);
                }
            }
        }
    }
}

impl eframe::App for TerminalWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        self.drain_notifications();

        // Tab cycles through the reachable screens.
        if ctx.input(|i| i.key_pressed(egui::Key::Tab)) {
            self.app.next_screen();
        }

        let theme = Theme::default();

        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            nav_bar::render_nav_bar(ui, &mut self.app, &theme);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar::render_status_bar(ui, &self.app, &theme);
        });

        let screen = self.app.state.read().current_screen;
        egui::CentralPanel::default().show(ctx, |ui| match screen {
            Screen::Auth => screens::auth::render(ui, &mut self.app),
            Screen::Market => screens::market::render(ui, &mut self.app),
            Screen::Dashboard => screens::dashboard::render(ui, &mut self.app),
            Screen::Trade => screens::trade::render(ui, &mut self.app),
        });

        self.toasts.show(ctx);

        // Poll for task results even when idle.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
