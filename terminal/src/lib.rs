//! # Cointerm - Library Root
//!
//! A native desktop terminal for a simulated cryptocurrency exchange.
//! This library crate contains all modules used by the binary crate
//! (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              cointerm (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI and native window  │
//! │  egui-notify   - Toast notifications                   │
//! │  Tokio         - Async runtime for background tasks    │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!                          │ HTTP (JSON envelope)
//!                          ▼
//!               ┌─────────────────────┐
//!               │  Exchange backend   │
//!               └─────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Application core
//!   - Event-driven orchestrator: handlers validate and spawn, tasks
//!     resolve to events, the event handler applies them per frame
//!   - Screen navigation with authentication guarding
//! - **core**: Error types and the [`crate::core::service::ApiService`] trait
//! - **services**: Backend HTTP client and on-disk session persistence
//! - **ui**: Rendering
//!   - `screens`: auth, market, dashboard, trade
//!   - `widgets`: forms, tables, nav bar, status bar, price labels
//!   - `theme`: color palette and egui visuals
//! - **utils**: Tokio runtime bridge and input validation

pub mod app;
pub mod core;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::window_app::TerminalWindow;
pub use app::{App, AppEvent, Screen};
pub use self::core::error::{ApiError, AppError};
