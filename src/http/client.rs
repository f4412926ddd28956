//! Low-level HTTP client — `RealEngineHttp`.
//!
//! Resolves one logical request to its final envelope: retries transient
//! failures with backoff, follows `202 Accepted` responses to their `Location`
//! until the job finishes, then decodes the terminal body.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::{ResolveError, SdkError};
use crate::http::envelope;
use crate::http::retry::{BackoffPolicy, ResponseClass};
use crate::http::timer::Sleeper;
use crate::http::transport::{HttpRequest, HttpResponse, Transport};

/// Header carrying the poll target of an in-progress job.
pub const LOCATION_HEADER: &str = "Location";

/// Low-level HTTP client for the RealEngine REST API.
#[derive(Clone)]
pub struct RealEngineHttp {
    base_url: String,
    /// Bearer token. NEVER exposed publicly.
    token: String,
    max_retries: u32,
    backoff: BackoffPolicy,
    transport: Arc<dyn Transport>,
    sleeper: Arc<dyn Sleeper>,
}

impl RealEngineHttp {
    /// `base_url` is expected without a trailing slash; the client builder
    /// validates and normalizes it.
    pub fn new(
        base_url: &str,
        token: &str,
        max_retries: u32,
        backoff: BackoffPolicy,
        transport: Arc<dyn Transport>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            max_retries,
            backoff,
            transport,
            sleeper,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Absolute URL for a root-relative path or an already-absolute URL.
    pub fn url_for(&self, path: &str) -> String {
        if path.is_empty() {
            return self.base_url.clone();
        }
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Resolve `path` to the `data` field of its terminal envelope.
    ///
    /// Retryable statuses (429, 5xx) re-issue the original path at most
    /// `max_retries` times. `202 Accepted` responses are polled via their
    /// `Location` header without limit and without consuming retries.
    pub async fn resolve<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, SdkError> {
        let mut target = path.to_string();
        let mut attempt: u32 = 0;
        let mut polls: u64 = 0;

        loop {
            let url = self.url_for(&target);
            let response = self.send(&url).await?;
            let status = response.status;

            match ResponseClass::from_status(status) {
                ResponseClass::Retryable => {
                    if attempt >= self.max_retries {
                        return Err(ResolveError::message("Too many retries", status, url).into());
                    }
                    attempt += 1;
                    let delay = self.backoff.delay(&response, attempt);
                    tracing::debug!(
                        attempt,
                        max_retries = self.max_retries,
                        status,
                        delay_ms = delay.as_millis() as u64,
                        url = %url,
                        "Retrying request"
                    );
                    self.sleeper.sleep(delay).await;
                    target = path.to_string();
                }
                ResponseClass::InProgress => {
                    let location = match response.header(LOCATION_HEADER) {
                        Some(location) if !location.is_empty() => location.to_string(),
                        _ => {
                            return Err(ResolveError::message(
                                "The location header is empty",
                                status,
                                url,
                            )
                            .into());
                        }
                    };
                    polls += 1;
                    let delay = self.backoff.delay(&response, 0);
                    tracing::debug!(
                        polls,
                        delay_ms = delay.as_millis() as u64,
                        location = %location,
                        url = %url,
                        "Job in progress, polling location"
                    );
                    self.sleeper.sleep(delay).await;
                    target = location;
                }
                ResponseClass::Terminal => {
                    return envelope::decode(&response.body, status, &url);
                }
            }
        }
    }

    async fn send(&self, url: &str) -> Result<HttpResponse, SdkError> {
        let request = HttpRequest {
            url: url.to_string(),
            headers: vec![
                ("Authorization".to_string(), format!("Bearer {}", self.token)),
                ("Accept".to_string(), "application/json".to_string()),
            ],
        };
        Ok(self.transport.get(&request).await?)
    }
}

impl std::fmt::Debug for RealEngineHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealEngineHttp")
            .field("base_url", &self.base_url)
            .field("max_retries", &self.max_retries)
            .field("backoff", &self.backoff)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;
    use crate::http::timer::TimerSleeper;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct Unreachable;

    #[async_trait]
    impl Transport for Unreachable {
        async fn get(&self, _request: &HttpRequest) -> Result<HttpResponse, HttpError> {
            Err(HttpError::Transport("connection refused".to_string()))
        }
    }

    fn http(base_url: &str) -> RealEngineHttp {
        RealEngineHttp::new(
            base_url,
            "secret",
            5,
            BackoffPolicy::default(),
            Arc::new(Unreachable),
            Arc::new(TimerSleeper),
        )
    }

    #[test]
    fn test_url_for_joins_with_single_slash() {
        let client = http("http://example.com/test");
        assert_eq!(client.url_for("/caption?url=x"), "http://example.com/test/caption?url=x");
        assert_eq!(client.url_for("caption?url=x"), "http://example.com/test/caption?url=x");
        assert_eq!(client.url_for("//task"), "http://example.com/test/task");
    }

    #[test]
    fn test_url_for_trailing_slash_root() {
        let client = http("http://example.com/test/");
        assert_eq!(client.base_url(), "http://example.com/test");
        assert_eq!(client.url_for("/task?id=1"), "http://example.com/test/task?id=1");
    }

    #[test]
    fn test_url_for_absolute_and_empty() {
        let client = http("http://example.com");
        assert_eq!(client.url_for("https://other.host/task"), "https://other.host/task");
        assert_eq!(client.url_for("http://other.host/task"), "http://other.host/task");
        assert_eq!(client.url_for(""), "http://example.com");
    }

    #[test]
    fn test_debug_hides_token() {
        let rendered = format!("{:?}", http("http://example.com"));
        assert!(!rendered.contains("secret"));
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_retried() {
        let err = http("http://example.com")
            .resolve::<String>("/caption")
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Http(HttpError::Transport(_))));
    }

    /// 503, then 202 to `/task`, then success.
    struct Flaky {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Transport for Flaky {
        async fn get(&self, _request: &HttpRequest) -> Result<HttpResponse, HttpError> {
            let response = match self.calls.fetch_add(1, Ordering::SeqCst) {
                0 => HttpResponse::new(503).with_header("X-Retry-After", "0"),
                1 => HttpResponse::new(202)
                    .with_header("Location", "/task?id=1")
                    .with_header("X-Retry-After", "0"),
                _ => HttpResponse::new(200).with_body(r#"{"success":true,"data":"ok"}"#),
            };
            Ok(response)
        }
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_retry_and_poll_events_carry_url_field() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let client = RealEngineHttp::new(
            "http://example.com",
            "secret",
            5,
            BackoffPolicy::default(),
            Arc::new(Flaky {
                calls: AtomicUsize::new(0),
            }),
            Arc::new(TimerSleeper),
        );
        let data: Option<String> = client.resolve("/caption").await.unwrap();
        assert_eq!(data.as_deref(), Some("ok"));

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Retrying request"), "{output}");
        assert!(output.contains("url=http://example.com/caption"), "{output}");
        assert!(output.contains("Job in progress"), "{output}");
        assert!(output.contains("location=/task?id=1"), "{output}");
        assert!(!output.contains("secret"), "{output}");
    }
}
