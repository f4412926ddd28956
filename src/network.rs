//! Network URL constants for the RealEngine SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.realengine.ai";

/// Environment variable holding the bearer token.
pub const ENV_API_TOKEN: &str = "REALENGINE_API_TOKEN";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const ENV_API_URL: &str = "REALENGINE_API_URL";

/// Environment variable overriding the retry ceiling.
pub const ENV_MAX_RETRIES: &str = "REALENGINE_MAX_RETRIES";
