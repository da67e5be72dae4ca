//! # Market Screen
//!
//! Market overview and the coin listing. Each row links into the trade
//! panel; authenticated users can toggle the watchlist star inline.

use shared::utils::{format_price, format_volume};
use shared::{Coin, SortOrder};

use crate::app::state::SortField;
use crate::app::{App, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::{price_display, tables};

/// Render the market screen.
pub fn render(ui: &mut egui::Ui, app: &mut App) {
    let theme = Theme::default();

    let (coins, market_data, loading, error, authenticated, watched, sort_field, sort_order): (
        Vec<Coin>,
        _,
        _,
        _,
        _,
        Vec<i64>,
        _,
        _,
    ) = {
        let state = app.state().read();
        (
            state.market.coins.clone(),
            state.market.market_data.clone(),
            state.market.loading,
            state.market.error.clone(),
            state.is_authenticated(),
            state.watchlist.entries.iter().map(|e| e.coin_id).collect(),
            state.market.sort_field,
            state.market.sort_order,
        )
    };

    ui.heading("Market");
    ui.add_space(6.0);

    let mut new_sort: Option<(SortField, SortOrder)> = None;
    let mut refresh = false;
    ui.horizontal(|ui| {
        ui.label("Sort by");
        egui::ComboBox::from_id_salt("market_sort")
            .selected_text(sort_field.label())
            .show_ui(ui, |ui| {
                for &field in SortField::all() {
                    if ui
                        .selectable_label(field == sort_field, field.label())
                        .clicked()
                    {
                        new_sort = Some((field, sort_order));
                    }
                }
            });
        let (order_label, flipped) = match sort_order {
            SortOrder::Desc => ("Desc", SortOrder::Asc),
            SortOrder::Asc => ("Asc", SortOrder::Desc),
        };
        if ui.button(order_label).clicked() {
            new_sort = Some((sort_field, flipped));
        }
        ui.separator();
        if ui.button("Refresh").clicked() {
            refresh = true;
        }
    });
    ui.add_space(8.0);

    if let Some((field, order)) = new_sort {
        app.handle_market_sort_change(field, order);
    }
    if refresh {
        app.handle_market_refresh();
    }

    if let Some(data) = &market_data {
        ui.horizontal(|ui| {
            ui.colored_label(theme.dim, "Market cap");
            ui.label(format_volume(data.total_market_cap));
            ui.separator();
            ui.colored_label(theme.dim, "24h volume");
            ui.label(format_volume(data.total_volume));
            ui.separator();
            ui.colored_label(theme.dim, "24h change");
            price_display::render_change(ui, data.market_cap_change_percentage_24h, &theme);
            ui.separator();
            ui.colored_label(theme.dim, "Coins");
            ui.label(data.active_cryptocurrencies.to_string());
        });
        ui.add_space(8.0);
    }

    if let Some(error) = &error {
        ui.colored_label(theme.error, error);
        ui.add_space(8.0);
    }

    if coins.is_empty() {
        let message = if loading { "Loading coins..." } else { "No coins available" };
        tables::render_empty_state(ui, message, None, &theme);
        return;
    }

    let watch_col = authenticated;
    let headers: &[&str] = if watch_col {
        &["Symbol", "Name", "Price", "24h", "Market Cap", "Volume", "Watch", ""]
    } else {
        &["Symbol", "Name", "Price", "24h", "Market Cap", "Volume", ""]
    };

    let config = tables::TableConfig {
        num_columns: headers.len(),
        scrollable: true,
        ..Default::default()
    };

    let mut toggle_watch: Option<i64> = None;
    let mut trade_coin: Option<Coin> = None;

    tables::render_table(ui, "market_coins", config, headers, &theme, |ui| {
        for coin in &coins {
            ui.colored_label(theme.selected, &coin.symbol);
            ui.label(&coin.name);
            ui.label(format_price(coin.current_price));
            price_display::render_change(ui, coin.price_change_percentage_24h, &theme);
            ui.label(format_volume(coin.market_cap));
            ui.label(format_volume(coin.volume_24h));

            if watch_col {
                let starred = watched.contains(&coin.id);
                let star = if starred { "★" } else { "☆" };
                if ui.selectable_label(starred, star).clicked() {
                    toggle_watch = Some(coin.id);
                }
            }

            if ui.button("Trade").clicked() {
                trade_coin = Some(coin.clone());
            }
            ui.end_row();
        }
    });

    if let Some(coin_id) = toggle_watch {
        app.handle_watchlist_toggle(coin_id);
    }
    if let Some(coin) = trade_coin {
        app.handle_trade_coin_select(coin);
        app.handle_screen_change(Screen::Trade);
    }
}
