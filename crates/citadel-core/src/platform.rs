//! Platform-specific timers.
//!
//! The retry wait must suspend without blocking the event loop:
//!
//! - **Desktop / CLI**: `tokio::time::sleep`
//! - **Web**: `gloo_timers::future::TimeoutFuture` (backed by `setTimeout`)

use std::time::Duration;

use async_trait::async_trait;

use crate::fetch::Sleeper;

/// Sleeper backed by the platform's timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformSleeper;

#[async_trait(?Send)]
impl Sleeper for PlatformSleeper {
    async fn sleep(&self, duration: Duration) {
        #[cfg(target_arch = "wasm32")]
        {
            let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::future::TimeoutFuture::new(millis).await;
        }

        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(duration).await;
    }
}
