use thiserror::Error;

/// Diagnostic cause of a failed backend call.
///
/// Only used for logging; callers of [`crate::api::FilingsApi`] see
/// [`crate::api::ApiResult::Absent`] regardless of the variant.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request timed out: {0}")]
    Timeout(reqwest::Error),

    #[error("Transport error: {0}")]
    Transport(reqwest::Error),

    #[error("Backend returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err)
        } else {
            ApiError::Transport(err)
        }
    }
}
