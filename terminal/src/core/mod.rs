//! # Core Abstractions
//!
//! Error types and service traits used throughout the terminal.
//!
//! - **[`error`]**: `ApiError` (HTTP layer), `AppError`, `Result<T>`
//! - **[`service`]**: `ApiService` trait for dependency injection

pub mod error;
pub mod service;

pub use error::{ApiError, AppError, Result};
pub use service::ApiService;
