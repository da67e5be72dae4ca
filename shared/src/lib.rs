//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the terminal client and the
//! trading backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: wire types grouped by domain (auth, market, trade,
//!   portfolio, watchlist)
//! - **[`envelope`]**: the uniform `{success, data, message, error}`
//!   response wrapper and its tagged `into_result()` conversion
//! - **[`utils`]**: display formatting helpers (prices, percentages,
//!   currency, timestamps, P&L)
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** in Rust and on the wire
//! - Optional fields are omitted when `None`
//! - Enums serialize to lowercase strings (`"buy"`, `"sell"`)
//!
//! ## Usage
//!
//! ```rust
//! use shared::{ApiResponse, BalanceData};
//!
//! let body = r#"{"success":true,"data":{"balance":10000.0}}"#;
//! let envelope: ApiResponse<BalanceData> = serde_json::from_str(body).unwrap();
//! let data = envelope.into_result().unwrap();
//! assert_eq!(shared::utils::format_currency(data.balance), "$10,000.00");
//! ```

pub mod dto;
pub mod envelope;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where everything is public
// API, mirroring how consumers import from it.
pub use dto::*;
pub use envelope::{ApiResponse, EnvelopeError};
pub use utils::*;
