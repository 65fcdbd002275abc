//! Delay capability used by `step_after_timeout`.

use async_trait::async_trait;
use std::time::Duration;

/// Suspends the caller for at least the given duration.
///
/// Injected into the machine so tests can replace wall-clock waits.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn delay(&self, duration: Duration);
}

/// Delay backed by the Tokio timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn delay(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
