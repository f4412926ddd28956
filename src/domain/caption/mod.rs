//! Caption domain — natural-language captions for remote images.

pub mod client;

/// Endpoint path, relative to the API root.
pub const CAPTION_PATH: &str = "/caption";

/// Request path for captioning `image_url`, with the URL percent-encoded
/// into the `url` query parameter.
pub fn caption_path(image_url: &str) -> String {
    format!("{}?url={}", CAPTION_PATH, urlencoding::encode(image_url))
}
