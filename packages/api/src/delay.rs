//! Platform-aware timer used to simulate network latency.

use std::time::Duration;

/// Suspend the current task for `duration` without blocking the event loop.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
