//! # Response Envelope
//!
//! Every API response arrives wrapped in a uniform
//! `{success, data, message, error}` object. [`ApiResponse`] mirrors that
//! wire shape faithfully (all payload fields optional), and
//! [`ApiResponse::into_result`] converts it into a tagged success/failure
//! value so callers never inspect optional fields themselves.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The uniform response wrapper used by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Failure side of an unwrapped envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeError {
    message: String,
}

impl EnvelopeError {
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EnvelopeError {}

impl<T> ApiResponse<T> {
    /// Convert the envelope into a tagged result.
    ///
    /// On failure the server may populate `error`, `message`, both, or
    /// neither; precedence is `error`, then `message`, then a generic
    /// text. A `success` envelope missing `data` is treated as a failure
    /// for endpoints that expect a payload.
    pub fn into_result(self) -> Result<T, EnvelopeError> {
        if self.success {
            self.data.ok_or(EnvelopeError {
                message: "response envelope missing data".to_string(),
            })
        } else {
            Err(EnvelopeError {
                message: self
                    .error
                    .or(self.message)
                    .unwrap_or_else(|| "request failed".to_string()),
            })
        }
    }

    /// Failure text for endpoints whose success payload is irrelevant
    /// (e.g. watchlist removal).
    pub fn failure_message(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "request failed".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_with_data_unwraps() {
        let envelope: ApiResponse<i64> =
            serde_json::from_str(r#"{"success":true,"data":42}"#).unwrap();
        assert_eq!(envelope.into_result().unwrap(), 42);
    }

    #[test]
    fn failure_prefers_error_over_message() {
        let envelope: ApiResponse<i64> = serde_json::from_str(
            r#"{"success":false,"error":"Coin not found","message":"ignored"}"#,
        )
        .unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.message(), "Coin not found");
    }

    #[test]
    fn failure_falls_back_to_message() {
        let envelope: ApiResponse<i64> =
            serde_json::from_str(r#"{"success":false,"message":"Validation failed"}"#).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.message(), "Validation failed");
    }

    #[test]
    fn success_without_data_is_an_error() {
        let envelope: ApiResponse<i64> =
            serde_json::from_str(r#"{"success":true,"message":"ok"}"#).unwrap();
        assert!(envelope.into_result().is_err());
    }

    #[test]
    fn failure_without_detail_uses_generic_text() {
        let envelope: ApiResponse<i64> =
            serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(envelope.failure_message(), "request failed");
    }
}
