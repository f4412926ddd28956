//! High-level client — `RealEngineClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use std::sync::Arc;

use crate::domain::caption::client::Captions;
use crate::error::SdkError;
use crate::http::{BackoffPolicy, RealEngineHttp, Sleeper, TimerSleeper, Transport};
use crate::network::{DEFAULT_API_URL, ENV_API_TOKEN, ENV_API_URL, ENV_MAX_RETRIES};

// Re-export sub-client types for convenience.
pub use crate::domain::caption::client::Captions as CaptionsClient;

/// Default number of retries for 429 / 5xx responses.
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// The primary entry point for the RealEngine SDK.
///
/// Cheap to clone; clones share the same immutable configuration and
/// collaborators, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct RealEngineClient {
    pub(crate) http: RealEngineHttp,
}

impl RealEngineClient {
    /// Client against the production API with default settings.
    pub fn new(token: &str) -> Result<Self, SdkError> {
        Self::builder(token).build()
    }

    pub fn builder(token: &str) -> RealEngineClientBuilder {
        RealEngineClientBuilder::new(token)
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn captions(&self) -> Captions<'_> {
        Captions { client: self }
    }

    /// Shorthand for `client.captions().get(image_url)`.
    pub async fn get_caption(&self, image_url: &str) -> Result<String, SdkError> {
        self.captions().get(image_url).await
    }

    /// Low-level resolver, for endpoints without a dedicated sub-client.
    pub fn http(&self) -> &RealEngineHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct RealEngineClientBuilder {
    token: String,
    base_url: String,
    max_retries: u32,
    backoff: BackoffPolicy,
    transport: Option<Arc<dyn Transport>>,
    sleeper: Option<Arc<dyn Sleeper>>,
}

impl RealEngineClientBuilder {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            base_url: DEFAULT_API_URL.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            backoff: BackoffPolicy::default(),
            transport: None,
            sleeper: None,
        }
    }

    /// Builder seeded from `REALENGINE_API_TOKEN`, `REALENGINE_API_URL` and
    /// `REALENGINE_MAX_RETRIES`. Unset optional variables keep their defaults.
    pub fn from_env() -> Result<Self, SdkError> {
        let token = std::env::var(ENV_API_TOKEN).unwrap_or_default();
        let mut builder = Self::new(&token);
        if let Ok(url) = std::env::var(ENV_API_URL) {
            builder = builder.base_url(&url);
        }
        if let Ok(raw) = std::env::var(ENV_MAX_RETRIES) {
            builder = builder.max_retries(parse_max_retries(&raw)?);
        }
        Ok(builder)
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn backoff(mut self, backoff: BackoffPolicy) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = Some(sleeper);
        self
    }

    pub fn build(self) -> Result<RealEngineClient, SdkError> {
        if self.token.is_empty() {
            return Err(SdkError::Config("token must not be empty".to_string()));
        }
        let base_url = self.base_url.trim_end_matches('/');
        if base_url.is_empty() {
            return Err(SdkError::Config("base_url must not be empty".to_string()));
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport()?,
        };
        let sleeper = self
            .sleeper
            .unwrap_or_else(|| Arc::new(TimerSleeper) as Arc<dyn Sleeper>);

        Ok(RealEngineClient {
            http: RealEngineHttp::new(
                base_url,
                &self.token,
                self.max_retries,
                self.backoff,
                transport,
                sleeper,
            ),
        })
    }
}

#[cfg(feature = "http")]
fn default_transport() -> Result<Arc<dyn Transport>, SdkError> {
    Ok(Arc::new(crate::http::ReqwestTransport::new()?))
}

#[cfg(not(feature = "http"))]
fn default_transport() -> Result<Arc<dyn Transport>, SdkError> {
    Err(SdkError::Config(
        "no transport configured; enable the `http` feature or call `transport()`".to_string(),
    ))
}

/// Parse a retry ceiling from configuration text.
pub fn parse_max_retries(raw: &str) -> Result<u32, SdkError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| SdkError::Config(format!("max_retries is not an integer: {raw:?}")))?;
    if value < 0 {
        return Err(SdkError::Config("max_retries must be >= 0".to_string()));
    }
    u32::try_from(value).map_err(|_| SdkError::Config(format!("max_retries is too large: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;
    use crate::http::{HttpRequest, HttpResponse};
    use async_trait::async_trait;

    struct NoopTransport;

    #[async_trait]
    impl Transport for NoopTransport {
        async fn get(&self, _request: &HttpRequest) -> Result<HttpResponse, HttpError> {
            Ok(HttpResponse::new(200).with_body(r#"{"success":true}"#))
        }
    }

    fn builder(token: &str) -> RealEngineClientBuilder {
        RealEngineClient::builder(token).transport(Arc::new(NoopTransport))
    }

    #[test]
    fn test_defaults() {
        let client = builder("t").build().unwrap();
        assert_eq!(client.http().base_url(), DEFAULT_API_URL);
        assert_eq!(client.http().max_retries(), 5);
    }

    #[test]
    fn test_empty_token_rejected() {
        let err = builder("").build().unwrap_err();
        assert!(matches!(err, SdkError::Config(msg) if msg.contains("token")));
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let err = builder("t").base_url("").build().unwrap_err();
        assert!(matches!(err, SdkError::Config(msg) if msg.contains("base_url")));

        let err = builder("t").base_url("/").build().unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let client = builder("t").base_url("http://example.com/test/").build().unwrap();
        assert_eq!(client.http().base_url(), "http://example.com/test");
    }

    #[test]
    fn test_zero_retries_allowed() {
        let client = builder("t").max_retries(0).build().unwrap();
        assert_eq!(client.http().max_retries(), 0);
    }

    #[test]
    fn test_parse_max_retries() {
        assert_eq!(parse_max_retries("3").unwrap(), 3);
        assert_eq!(parse_max_retries(" 0 ").unwrap(), 0);
        assert!(matches!(
            parse_max_retries("-1"),
            Err(SdkError::Config(msg)) if msg == "max_retries must be >= 0"
        ));
        assert!(matches!(parse_max_retries("many"), Err(SdkError::Config(_))));
        assert!(matches!(parse_max_retries("99999999999"), Err(SdkError::Config(_))));
    }

    #[test]
    fn test_client_is_send_sync_clone() {
        fn assert_bounds<T: Send + Sync + Clone>() {}
        assert_bounds::<RealEngineClient>();
    }
}
