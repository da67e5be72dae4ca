//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! Requests are signed with the bearer token currently held by the
//! [`SessionStore`]; no presence check ever blocks a request, the server
//! is the sole authority. A 401 from any endpoint clears the store and
//! surfaces as [`ApiError::Unauthorized`], a typed value instead of a
//! hidden interceptor side effect.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::ApiResponse;
use std::sync::Arc;
use std::time::Instant;

use crate::core::error::ApiError;
use crate::services::session::SessionStore;

/// Default backend address; override with `COINTERM_API_URL`.
const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// HTTP client for the trading backend.
///
/// Owns a reqwest connection pool and the session store handle used for
/// request signing and 401 invalidation.
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// Create a client with a 10 second timeout to prevent UI freezing.
    pub fn new(session: Arc<SessionStore>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        let base_url = std::env::var("COINTERM_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        Self {
            client,
            base_url,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token when one is held.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(self.client.get(self.url(path)));
        self.execute(path, request).await
    }

    pub(crate) async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        let request = self.authorize(self.client.get(self.url(path)).query(query));
        self.execute(path, request).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        self.execute(path, request).await
    }

    /// DELETE, discarding any success payload.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.authorize(self.client.delete(self.url(path)));
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.session.clear();
            return Err(ApiError::Unauthorized);
        }

        let envelope: ApiResponse<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if envelope.success {
            Ok(())
        } else {
            Err(ApiError::Api(envelope.failure_message()))
        }
    }

    /// Send a request and unwrap the response envelope.
    ///
    /// The backend wraps failures in the envelope too (with a 4xx/5xx
    /// status), so the body is parsed before the status decides anything
    /// other than 401.
    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let start = Instant::now();
        let response = request.send().await.map_err(|e| {
            tracing::error!(path, error = %e, "Request failed");
            ApiError::Network(e.to_string())
        })?;
        let status = response.status();
        let duration_ms = start.elapsed().as_millis();

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(path, duration_ms, "401 received, clearing session");
            self.session.clear();
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            return match response.json::<ApiResponse<serde_json::Value>>().await {
                Ok(envelope) => {
                    let message = envelope.failure_message();
                    tracing::warn!(path, status = status.as_u16(), error = %message, duration_ms, "Request rejected");
                    Err(ApiError::Api(message))
                }
                Err(_) => Err(ApiError::Status(status.as_u16())),
            };
        }

        let envelope: ApiResponse<T> = response.json().await.map_err(|e| {
            tracing::error!(path, error = %e, "Response decode failed");
            ApiError::Decode(e.to_string())
        })?;

        tracing::debug!(path, status = status.as_u16(), duration_ms, "Request completed");
        envelope
            .into_result()
            .map_err(|e| ApiError::Api(e.message().to_string()))
    }
}
