//! # Data Transfer Objects (DTOs)
//!
//! Wire types for the REST API shared between the terminal and any other
//! frontends. Every payload travels inside the response envelope defined
//! in [`crate::envelope`].
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration, and user account DTOs
//! - [`market`] - Coins, market aggregates, and pagination
//! - [`trade`] - Trades and trade submission
//! - [`portfolio`] - Holdings, balance, and user statistics
//! - [`watchlist`] - Watchlist entries
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json`:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: omitted when `None` via
//!   `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: lowercase strings via `#[serde(rename_all = "lowercase")]`
//! - **Timestamps**: RFC 3339 strings, exactly as the server sends them

pub mod auth;
pub mod market;
pub mod portfolio;
pub mod trade;
pub mod watchlist;

pub use auth::*;
pub use market::*;
pub use portfolio::*;
pub use trade::*;
pub use watchlist::*;
