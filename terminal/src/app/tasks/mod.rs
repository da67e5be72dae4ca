//! # Background Tasks
//!
//! Network fetches spawned onto the shared runtime. Each task performs
//! one request and sends one [`crate::app::AppEvent`] back; there is no
//! queuing, batching, deduplication, or cancellation.

pub(crate) mod market;
pub(crate) mod portfolio;
