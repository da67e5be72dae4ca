//! # Utility Functions
//!
//! ## Modules
//!
//! - **[`runtime`]**: shared Tokio runtime for spawning network tasks
//!   from the UI thread
//! - **[`validation`]**: input validation (email, username, password,
//!   trade quantity)
//!
//! Display formatting lives in [`shared::utils`].

pub mod runtime;
pub mod validation;
