use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedError {
    #[error("Failed to load videos: {0}")]
    FetchFailed(String),

    #[error("Playback was rejected: {0}")]
    PlaybackRejected(String),

    #[error("Swipe reported for '{reported}' but the current video is {expected:?}")]
    InvariantViolation {
        reported: String,
        expected: Option<String>,
    },
}

impl From<gloo_net::Error> for FeedError {
    fn from(e: gloo_net::Error) -> Self {
        FeedError::FetchFailed(format!("Network error: {e}"))
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        FeedError::FetchFailed(format!("Failed to parse response: {e}"))
    }
}
