//! Response classification and backoff policy.

use std::time::Duration;

use crate::http::transport::HttpResponse;

/// Server hint for the wait before the next request, in decimal seconds.
pub const RETRY_AFTER_HEADER: &str = "X-Retry-After";

/// How the resolver treats a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    /// 429 or any 5xx — re-issue the original request after a backoff.
    Retryable,
    /// 202 — follow the `Location` header after the server-hinted delay.
    InProgress,
    /// Everything else, decoded as an envelope.
    Terminal,
}

impl ResponseClass {
    pub fn from_status(status: u16) -> Self {
        match status {
            429 | 500..=u16::MAX => ResponseClass::Retryable,
            202 => ResponseClass::InProgress,
            _ => ResponseClass::Terminal,
        }
    }
}

/// Delay computation for retries and polls.
///
/// `delay = min(hint * 2^attempt, max_wait) * U[0.5, 1.5)`, where `hint` is
/// the `X-Retry-After` header or `default_wait` when the header is missing or
/// unusable.
#[derive(Debug, Clone)]
pub struct BackoffPolicy {
    /// Base wait when the server gives no usable hint.
    pub default_wait: Duration,
    /// Ceiling applied before jitter.
    pub max_wait: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            default_wait: Duration::from_millis(1000),
            max_wait: Duration::from_millis(60_000),
        }
    }
}

impl BackoffPolicy {
    /// Server hint in milliseconds, falling back to `default_wait`.
    pub fn base_wait_millis(&self, response: &HttpResponse) -> f64 {
        response
            .header(RETRY_AFTER_HEADER)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .map(|secs| secs * 1000.0)
            .unwrap_or_else(|| self.default_wait.as_millis() as f64)
    }

    /// Scaled and capped delay, before jitter.
    pub fn capped_delay_millis(&self, response: &HttpResponse, attempt: u32) -> f64 {
        let scaled = self.base_wait_millis(response) * 2f64.powi(attempt.min(64) as i32);
        scaled.min(self.max_wait.as_millis() as f64)
    }

    /// Jittered delay in (fractional) milliseconds.
    pub fn delay_millis(&self, response: &HttpResponse, attempt: u32) -> f64 {
        let jitter = 0.5 + rand::random::<f64>();
        self.capped_delay_millis(response, attempt) * jitter
    }

    /// Jittered delay; saturates at `max_wait` when it exceeds `Duration`'s range.
    pub fn delay(&self, response: &HttpResponse, attempt: u32) -> Duration {
        Duration::try_from_secs_f64(self.delay_millis(response, attempt) / 1000.0)
            .unwrap_or(self.max_wait)
    }
}
