//! Captions sub-client.

use crate::client::RealEngineClient;
use crate::domain::caption::caption_path;
use crate::error::SdkError;

pub struct Captions<'a> {
    pub(crate) client: &'a RealEngineClient,
}

impl<'a> Captions<'a> {
    /// Caption for the image at `image_url`.
    ///
    /// Waits for asynchronous jobs to finish. A successful response without a
    /// caption fails with [`SdkError::Validation`].
    pub async fn get(&self, image_url: &str) -> Result<String, SdkError> {
        let caption: Option<String> = self.client.http.resolve(&caption_path(image_url)).await?;

        match caption {
            Some(caption) if !caption.is_empty() => Ok(caption),
            _ => Err(SdkError::Validation("The caption is empty".to_string())),
        }
    }
}
