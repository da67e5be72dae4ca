//! Global Tokio runtime for async HTTP operations.
//!
//! egui's update loop runs on the main thread with no ambient async
//! runtime, but reqwest requires one. This static runtime bridges the
//! two: handlers spawn network tasks onto it, and results come back to
//! the main thread over the app's event channel.

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});

/// Spawn a future onto the shared runtime.
pub fn spawn<F>(future: F) -> JoinHandle<F::Output>
where
    F: std::future::Future + Send + 'static,
    F::Output: Send + 'static,
{
    TOKIO_RT.spawn(future)
}
