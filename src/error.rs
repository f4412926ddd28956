//! Unified SDK error types.

use thiserror::Error;

use crate::http::envelope::ErrorBody;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid response body (http status: {status}, url: {url}): {source}")]
    InvalidBody {
        status: u16,
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Transport-layer errors. Never retried.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Transport failed: {0}")]
    Transport(String),
}

/// Terminal failure of a resolved request.
///
/// Both variants carry the HTTP status observed and the URL attempted.
/// `Message` is raised by the client itself (retry exhaustion, protocol
/// violations); `Service` wraps the structured error the API reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("{message} http status: {status}, url: {url}")]
    Message {
        message: String,
        status: u16,
        url: String,
    },

    #[error("Error id: {id}, message: {msg}, http status: {status}, url: {url}")]
    Service {
        id: String,
        msg: String,
        status: u16,
        url: String,
    },
}

impl ResolveError {
    pub fn message(message: impl Into<String>, status: u16, url: impl Into<String>) -> Self {
        ResolveError::Message {
            message: message.into(),
            status,
            url: url.into(),
        }
    }

    pub fn service(error: ErrorBody, status: u16, url: impl Into<String>) -> Self {
        ResolveError::Service {
            id: error.id,
            msg: error.msg,
            status,
            url: url.into(),
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            ResolveError::Message { status, .. } | ResolveError::Service { status, .. } => *status,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            ResolveError::Message { url, .. } | ResolveError::Service { url, .. } => url,
        }
    }

    /// Service error identifier; empty for client-raised errors.
    pub fn error_id(&self) -> &str {
        match self {
            ResolveError::Message { .. } => "",
            ResolveError::Service { id, .. } => id,
        }
    }

    pub fn error_message(&self) -> &str {
        match self {
            ResolveError::Message { message, .. } => message,
            ResolveError::Service { msg, .. } => msg,
        }
    }
}
