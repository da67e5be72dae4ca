//! # External Service Integrations
//!
//! - **[`api`]**: REST client for the trading backend
//! - **[`session`]**: on-disk session persistence (token + user)

pub mod api;
pub mod session;
