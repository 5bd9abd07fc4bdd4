use serde::{Deserialize, Serialize};

/// Base URL of the public image host. Individual images resolve to
/// `{base}/image/{id}`.
pub const IMAGE_HOST_BASE_URL: &str = "https://nekos.moe";

/// One remotely hosted image, identified by the opaque id the host assigned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub id: String,
}

impl ImageEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Resolves the opaque id to a renderable image URL.
    pub fn image_url(&self) -> String {
        format!("{}/image/{}", IMAGE_HOST_BASE_URL, self.id)
    }
}

/// Envelope returned by the random-image endpoint. The live API attaches
/// more fields per image; only the id is required here and unknown fields
/// are ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomImageResponse {
    pub images: Vec<ImageEntry>,
}
