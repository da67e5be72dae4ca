//! # Authentication Endpoints
//!
//! Login, registration, and the authenticated profile lookup.

use shared::{AuthResponse, LoginRequest, RegisterRequest, User};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// Login with email and password.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(
    client: &ApiClient,
    email: String,
    password: String,
) -> Result<AuthResponse, ApiError> {
    tracing::info!("Attempting login");
    let request = LoginRequest { email, password };
    client.post("/api/auth/login", &request).await
}

/// Register a new account.
#[tracing::instrument(skip(client, password), fields(username = %username, email = %email))]
pub async fn register(
    client: &ApiClient,
    username: String,
    email: String,
    password: String,
) -> Result<AuthResponse, ApiError> {
    tracing::info!("Attempting registration");
    let request = RegisterRequest {
        username,
        email,
        password,
    };
    client.post("/api/auth/register", &request).await
}

/// Fetch the profile bound to the current token.
pub async fn get_auth_profile(client: &ApiClient) -> Result<User, ApiError> {
    client.get("/api/auth/profile").await
}
