//! # Common Error Types
//!
//! Consolidated error handling for the terminal application.
//!
//! Two layers exist:
//!
//! - [`ApiError`]: produced by the HTTP layer. Carries an explicit
//!   `Unauthorized` variant so a 401 is a typed value the event loop can
//!   act on, instead of a side effect buried in an interceptor.
//! - [`AppError`]: the application-wide type everything folds into.

use thiserror::Error;

/// Errors from the HTTP layer.
///
/// `Clone` and `PartialEq` are required because these travel inside
/// [`crate::app::AppEvent`] values across the task channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure: connection refused, timeout, DNS.
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status with no parseable envelope.
    #[error("unexpected status {0}")]
    Status(u16),

    /// Body did not decode into the expected envelope/payload.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The server answered with a failure envelope; the text is its
    /// `error` (or `message`) field, already displayable.
    #[error("{0}")]
    Api(String),

    /// HTTP 401 from any endpoint. The session store has already been
    /// cleared by the time this value is observed.
    #[error("unauthorized")]
    Unauthorized,
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Session persistence error (reading or writing the session files).
    #[error("session error: {0}")]
    Session(String),

    /// Application state management error.
    #[error("state error: {0}")]
    State(String),

    /// Input validation error.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Convenience alias used throughout the terminal crate.
pub type Result<T> = std::result::Result<T, AppError>;
