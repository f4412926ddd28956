//! Timed suspension between attempts.

use std::time::Duration;

use async_trait::async_trait;

/// Suspends the resolution loop before a retry or poll.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Non-blocking delay backed by `futures-timer`; runtime-agnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerSleeper;

#[async_trait]
impl Sleeper for TimerSleeper {
    async fn sleep(&self, duration: Duration) {
        futures_timer::Delay::new(duration).await;
    }
}
