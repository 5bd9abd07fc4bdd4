//! Remote random-image source for NekoBrowser.
//!
//! Thin client over the nekos.moe random-image endpoint. Transport
//! failures, non-success statuses and unparseable bodies all surface as
//! `FetchError::Transport`; an empty image list is a valid result at this
//! layer and is left to the widget to classify.

use log::{debug, warn};

use crate::types::errors::FetchError;
use crate::types::image::{ImageEntry, RandomImageResponse, IMAGE_HOST_BASE_URL};

/// Trait defining the random-image source seam.
pub trait ImageSourceTrait {
    /// Fetches up to `count` random non-adult-flagged images.
    async fn fetch_random(&self, count: u32) -> Result<Vec<ImageEntry>, FetchError>;
}

/// Random-image source backed by the public HTTP API.
pub struct ImageService {
    client: reqwest::Client,
    base_url: String,
}

impl ImageService {
    pub fn new() -> Self {
        Self::with_base_url(IMAGE_HOST_BASE_URL)
    }

    /// Points the service at a different host (mirrors, test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("nekobrowser/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// URL of the random endpoint for `count` images, always excluding
    /// adult-flagged results.
    pub fn random_url(&self, count: u32) -> String {
        format!(
            "{}/api/v1/random/image?count={}&nsfw=false",
            self.base_url, count
        )
    }

    /// Parses a random-endpoint response body into image entries.
    pub fn parse_random_response(body: &str) -> Result<Vec<ImageEntry>, FetchError> {
        let response: RandomImageResponse = serde_json::from_str(body)
            .map_err(|e| FetchError::Transport(format!("invalid response body: {}", e)))?;
        Ok(response.images)
    }
}

impl Default for ImageService {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageSourceTrait for ImageService {
    async fn fetch_random(&self, count: u32) -> Result<Vec<ImageEntry>, FetchError> {
        let url = self.random_url(count);
        debug!("requesting {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("random-image request failed: {}", e);
            FetchError::Transport(format!("request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("random-image request returned HTTP {}", status.as_u16());
            return Err(FetchError::Transport(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(format!("failed to read body: {}", e)))?;

        Self::parse_random_response(&body)
    }
}
