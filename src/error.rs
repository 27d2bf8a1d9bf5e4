//! Error types for the fetch path

use thiserror::Error;

/// Why a fetch produced no posts
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response is not a post list: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Transport failures get logged; decode failures are dropped quietly
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}
