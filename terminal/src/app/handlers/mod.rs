//! # User Action Handlers
//!
//! Handlers validate input on the UI thread, then spawn network tasks
//! whose results come back as [`crate::app::AppEvent`]s.

pub(crate) mod auth;
pub(crate) mod market;
pub(crate) mod navigation;
pub(crate) mod trade;
pub(crate) mod watchlist;
