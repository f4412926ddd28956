//! # RealEngine SDK
//!
//! A Rust client for the RealEngine AI API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Errors, network constants, domain paths
//! 2. **HTTP API** — `RealEngineHttp`: retry with backoff on 429/5xx, long-polling
//!    of `202 Accepted` jobs, envelope decoding. Transport and timer are
//!    pluggable seams.
//! 3. **High-Level Client** — `RealEngineClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use realengine_sdk::prelude::*;
//!
//! let client = RealEngineClient::builder("my-token")
//!     .max_retries(3)
//!     .build()?;
//!
//! let caption = client.captions().get("https://example.com/cat.jpg").await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): endpoint paths and sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Request resolver, backoff policy, envelope decoding, transport seam.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `RealEngineClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Errors
    pub use crate::error::{HttpError, ResolveError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP layer
    pub use crate::http::{
        BackoffPolicy, ErrorBody, HttpRequest, HttpResponse, RealEngineHttp, ResponseClass,
        Sleeper, TimerSleeper, Transport,
    };
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;

    // Client + sub-clients
    pub use crate::client::{CaptionsClient, RealEngineClient, RealEngineClientBuilder};
}
