use std::fmt;

// === FetchError ===

/// Errors produced by a random-image fetch.
#[derive(Debug)]
pub enum FetchError {
    /// The request failed, returned a non-success status, or the body
    /// could not be parsed.
    Transport(String),
    /// The response was well-formed but contained zero images.
    EmptyResult,
    /// A newer fetch was started before this one committed its result.
    Superseded,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "Image fetch failed: {}", msg),
            FetchError::EmptyResult => write!(f, "Image source returned no images"),
            FetchError::Superseded => {
                write!(f, "Image fetch superseded by a newer request")
            }
        }
    }
}

impl std::error::Error for FetchError {}
