//! Response envelope shared by every RealEngine endpoint.
//!
//! ```json
//! { "success": true, "data": "..." }
//! { "success": false, "error": { "id": "...", "msg": "..." } }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ResolveError, SdkError};

/// Structured error reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub id: String,
    pub msg: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

impl<T> Envelope<T> {
    /// Unwrap into the payload or the reported failure.
    pub fn into_result(self, status: u16, url: &str) -> Result<Option<T>, ResolveError> {
        if self.success {
            return Ok(self.data);
        }
        match self.error {
            Some(error) => Err(ResolveError::service(error, status, url)),
            None => Err(ResolveError::message("The error is empty", status, url)),
        }
    }
}

/// Decode a terminal response body.
///
/// A successful envelope may still carry no data; callers that need a value
/// check for that themselves.
pub fn decode<T: DeserializeOwned>(body: &str, status: u16, url: &str) -> Result<Option<T>, SdkError> {
    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|source| SdkError::InvalidBody {
            status,
            url: url.to_string(),
            source,
        })?;
    Ok(envelope.into_result(status, url)?)
}
