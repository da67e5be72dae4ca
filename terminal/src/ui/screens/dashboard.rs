//! # Dashboard Screen
//!
//! Portfolio overview: account stats, holdings with unrealized P&L,
//! recent trades, and the watchlist.

use shared::utils::{calculate_pnl, format_currency, format_date, format_price, format_time_ago};
use shared::{Coin, Holding, Trade, WatchlistEntry};

use crate::app::{App, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::{price_display, tables};

/// Render the dashboard screen.
pub fn render(ui: &mut egui::Ui, app: &mut App) {
    let theme = Theme::default();

    let (stats, holdings, portfolio_value, trades, watchlist, loading, error) = {
        let state = app.state().read();
        (
            state.portfolio.stats.clone(),
            state.portfolio.holdings.clone(),
            state.portfolio.portfolio_value,
            state.portfolio.trades.clone(),
            state.watchlist.entries.clone(),
            state.portfolio.loading,
            state.portfolio.error.clone(),
        )
    };

    ui.heading("Dashboard");
    ui.add_space(6.0);

    if let Some(error) = &error {
        ui.colored_label(theme.error, error);
        ui.add_space(8.0);
    }

    match &stats {
        Some(stats) => {
            ui.horizontal(|ui| {
                price_display::render_amount(ui, "Cash", stats.balance, &theme);
                ui.separator();
                price_display::render_amount(ui, "Portfolio", stats.portfolio_value, &theme);
                ui.separator();
                price_display::render_amount(ui, "Total", stats.total_value, &theme);
                ui.separator();
                ui.colored_label(theme.dim, "Trades");
                ui.label(stats.total_trades.to_string());
                ui.separator();
                ui.colored_label(theme.dim, "Positions");
                ui.label(stats.total_holdings.to_string());
                ui.separator();
                ui.colored_label(theme.dim, "Watching");
                ui.label(stats.watchlist_count.to_string());
            });
        }
        None if loading => {
            ui.colored_label(theme.dim, "Loading portfolio...");
        }
        None => {}
    }
    ui.add_space(12.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        render_holdings(ui, &holdings, portfolio_value, &theme);
        ui.add_space(16.0);
        render_trades(ui, &trades, &theme);
        ui.add_space(16.0);
        render_watchlist(ui, app, &watchlist, &theme);
    });
}

fn render_holdings(ui: &mut egui::Ui, holdings: &[Holding], portfolio_value: f64, theme: &Theme) {
    ui.label(egui::RichText::new("Holdings").strong().color(theme.selected));
    ui.add_space(4.0);

    if holdings.is_empty() {
        tables::render_empty_state(ui, "No positions yet", Some("Buy a coin to get started"), theme);
        return;
    }

    let config = tables::TableConfig {
        num_columns: 7,
        ..Default::default()
    };
    tables::render_table(
        ui,
        "holdings",
        config,
        &["Symbol", "Quantity", "Avg Price", "Price", "Value", "P&L", "P&L %"],
        theme,
        |ui| {
            for holding in holdings {
                let symbol = holding
                    .coin
                    .as_ref()
                    .map(|c| c.symbol.as_str())
                    .unwrap_or("?");
                let current_price = holding.coin.as_ref().map(|c| c.current_price).unwrap_or(0.0);
                let pnl = calculate_pnl(holding.quantity, holding.average_price, current_price);

                ui.colored_label(theme.selected, symbol);
                ui.label(format!("{}", holding.quantity));
                ui.label(format_price(holding.average_price));
                ui.label(format_price(current_price));
                ui.label(format_currency(holding.quantity * current_price));
                ui.colored_label(theme.price_change_color(pnl.pnl), format_currency(pnl.pnl));
                price_display::render_change(ui, pnl.pnl_percentage, theme);
                ui.end_row();
            }
        },
    );

    ui.add_space(4.0);
    price_display::render_amount(ui, "Portfolio value", portfolio_value, theme);
}

fn render_trades(ui: &mut egui::Ui, trades: &[Trade], theme: &Theme) {
    ui.label(egui::RichText::new("Recent Trades").strong().color(theme.selected));
    ui.add_space(4.0);

    if trades.is_empty() {
        tables::render_empty_state(ui, "No trades yet", None, theme);
        return;
    }

    let config = tables::TableConfig {
        num_columns: 6,
        ..Default::default()
    };
    tables::render_table(
        ui,
        "recent_trades",
        config,
        &["Side", "Symbol", "Quantity", "Price", "Total", "When"],
        theme,
        |ui| {
            for trade in trades {
                let side_color = match trade.side {
                    shared::TradeSide::Buy => theme.success,
                    shared::TradeSide::Sell => theme.error,
                };
                let symbol = trade
                    .coin
                    .as_ref()
                    .map(|c| c.symbol.as_str())
                    .unwrap_or("?");

                ui.colored_label(side_color, trade.side.label());
                ui.label(symbol);
                ui.label(format!("{}", trade.quantity));
                ui.label(format_price(trade.price));
                ui.label(format_currency(trade.total_amount));
                ui.colored_label(theme.dim, format_time_ago(&trade.created_at))
                    .on_hover_text(format_date(&trade.created_at));
                ui.end_row();
            }
        },
    );
}

fn render_watchlist(ui: &mut egui::Ui, app: &mut App, entries: &[WatchlistEntry], theme: &Theme) {
    ui.label(egui::RichText::new("Watchlist").strong().color(theme.selected));
    ui.add_space(4.0);

    if entries.is_empty() {
        tables::render_empty_state(
            ui,
            "Watchlist is empty",
            Some("Star a coin on the market screen"),
            theme,
        );
        return;
    }

    let mut remove_coin: Option<i64> = None;
    let mut trade_coin: Option<Coin> = None;

    let config = tables::TableConfig {
        num_columns: 5,
        ..Default::default()
    };
    tables::render_table(
        ui,
        "watchlist",
        config,
        &["Symbol", "Price", "24h", "", ""],
        theme,
        |ui| {
            for entry in entries {
                match &entry.coin {
                    Some(coin) => {
                        ui.colored_label(theme.selected, &coin.symbol);
                        ui.label(format_price(coin.current_price));
                        price_display::render_change(ui, coin.price_change_percentage_24h, theme);
                        if ui.button("Trade").clicked() {
                            trade_coin = Some(coin.clone());
                        }
                    }
                    None => {
                        ui.colored_label(theme.dim, format!("coin #{}", entry.coin_id));
                        ui.label("-");
                        ui.label("-");
                        ui.label("");
                    }
                }
                if ui.button("Remove").clicked() {
                    remove_coin = Some(entry.coin_id);
                }
                ui.end_row();
            }
        },
    );

    if let Some(coin_id) = remove_coin {
        app.handle_watchlist_toggle(coin_id);
    }
    if let Some(coin) = trade_coin {
        app.handle_trade_coin_select(coin);
        app.handle_screen_change(Screen::Trade);
    }
}
