//! # Cointerm
//!
//! Native desktop client for a simulated cryptocurrency exchange.

use tracing_subscriber::EnvFilter;

use cointerm::TerminalWindow;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cointerm=info")),
        )
        .init();

    tracing::info!("Starting cointerm");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 600.0])
            .with_title("Cointerm"),
        ..Default::default()
    };

    eframe::run_native(
        "Cointerm",
        options,
        Box::new(|cc| Ok(Box::new(TerminalWindow::new(cc)))),
    )
}
