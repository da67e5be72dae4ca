//! # Authentication Screen
//!
//! Login and registration forms using egui widgets.

use crate::app::{App, AuthState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

const FIELD_SIZE: [f32; 2] = [280.0, 30.0];

/// Render the authentication screen.
pub fn render(ui: &mut egui::Ui, app: &mut App) {
    let theme = Theme::default();
    let auth = app.state().read().auth.clone();

    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        match auth {
            AuthState::Login {
                email,
                password,
                error,
                pending,
            } => render_login_form(ui, app, email, password, error, pending, &theme),
            AuthState::Register {
                username,
                email,
                password,
                confirm_password,
                error,
                pending,
            } => render_register_form(
                ui,
                app,
                username,
                email,
                password,
                confirm_password,
                error,
                pending,
                &theme,
            ),
        }
    });
}

fn render_login_form(
    ui: &mut egui::Ui,
    app: &mut App,
    mut email: String,
    mut password: String,
    error: Option<String>,
    pending: bool,
    theme: &Theme,
) {
    forms::render_form_heading(ui, "SIGN IN", theme);

    forms::render_text_input(ui, "Email", &mut email, "you@example.com", false, FIELD_SIZE);
    ui.add_space(10.0);
    let password_response =
        forms::render_text_input(ui, "Password", &mut password, "Password", true, FIELD_SIZE);
    ui.add_space(15.0);

    if pending {
        forms::render_hint(ui, "Signing in...", theme);
    } else if let Some(error) = &error {
        forms::render_error(ui, error, theme);
    }

    let enter_pressed =
        password_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    let clicked = ui
        .add_enabled_ui(!pending, |ui| {
            forms::render_button(
                ui,
                "Sign In",
                Some(theme.selected.linear_multiply(0.6)),
                Some(egui::vec2(FIELD_SIZE[0], 32.0)),
            )
        })
        .inner
        .clicked();

    ui.add_space(10.0);
    let switch = ui.link("No account? Create one").clicked();

    // Write edits back before any action reads them.
    {
        let mut state = app.state().write();
        if let AuthState::Login {
            email: e,
            password: p,
            ..
        } = &mut state.auth
        {
            *e = email.clone();
            *p = password.clone();
        }
    }

    if clicked || enter_pressed {
        app.handle_login_click(email, password);
    } else if switch {
        app.handle_switch_to_register();
    }
}

#[allow(clippy::too_many_arguments)]
fn render_register_form(
    ui: &mut egui::Ui,
    app: &mut App,
    mut username: String,
    mut email: String,
    mut password: String,
    mut confirm_password: String,
    error: Option<String>,
    pending: bool,
    theme: &Theme,
) {
    forms::render_form_heading(ui, "CREATE ACCOUNT", theme);

    forms::render_text_input(ui, "Username", &mut username, "trader", false, FIELD_SIZE);
    ui.add_space(10.0);
    forms::render_text_input(ui, "Email", &mut email, "you@example.com", false, FIELD_SIZE);
    ui.add_space(10.0);
    forms::render_text_input(ui, "Password", &mut password, "Min 6 characters", true, FIELD_SIZE);
    ui.add_space(10.0);
    let confirm_response = forms::render_text_input(
        ui,
        "Confirm password",
        &mut confirm_password,
        "Repeat password",
        true,
        FIELD_SIZE,
    );
    ui.add_space(15.0);

    if pending {
        forms::render_hint(ui, "Creating account...", theme);
    } else if let Some(error) = &error {
        forms::render_error(ui, error, theme);
    }
    forms::render_hint(ui, "New accounts start with $10,000 of paper money", theme);
    ui.add_space(10.0);

    let enter_pressed =
        confirm_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    let clicked = ui
        .add_enabled_ui(!pending, |ui| {
            forms::render_button(
                ui,
                "Create Account",
                Some(theme.selected.linear_multiply(0.6)),
                Some(egui::vec2(FIELD_SIZE[0], 32.0)),
            )
        })
        .inner
        .clicked();

    ui.add_space(10.0);
    let switch = ui.link("Have an account? Sign in").clicked();

    {
        let mut state = app.state().write();
        if let AuthState::Register {
            username: u,
            email: e,
            password: p,
            confirm_password: c,
            ..
        } = &mut state.auth
        {
            *u = username.clone();
            *e = email.clone();
            *p = password.clone();
            *c = confirm_password.clone();
        }
    }

    if clicked || enter_pressed {
        app.handle_register_click(username, email, password, confirm_password);
    } else if switch {
        app.handle_switch_to_login();
    }
}
