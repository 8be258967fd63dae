//! Error types for remote launch data fetching.

use thiserror::Error;

/// Result type alias for launch data operations.
pub type Result<T> = std::result::Result<T, LaunchDataError>;

/// Errors that can occur while fetching launch data.
///
/// Nothing is caught or retried here; every failure propagates to the caller
/// as the single item of the fetch stream.
#[derive(Debug, Error)]
pub enum LaunchDataError {
    /// HTTP transport error (connection failure, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed or schema-mismatched response body
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success status from the launches API
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl LaunchDataError {
    /// Create an API error from status and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// HTTP status if this is an API error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<LaunchDataError> for launchfeed_core::Error {
    fn from(err: LaunchDataError) -> Self {
        launchfeed_core::Error::Fetch(err.to_string())
    }
}
