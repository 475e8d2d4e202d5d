//! Error types for GitHub API requests

use thiserror::Error;

/// Failure of a single API request
///
/// Every variant carries the URL that was requested so callers can report
/// which endpoint failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with anything other than 200
    #[error("GitHub API request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// The request never produced a response
    #[error("GitHub API request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The body of a 200 response could not be decoded
    #[error("failed to decode GitHub API response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl ApiError {
    /// HTTP status code, if the server responded at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport { .. } | ApiError::Decode { .. } => None,
        }
    }

    /// URL of the failing request
    pub fn url(&self) -> &str {
        match self {
            ApiError::Status { url, .. }
            | ApiError::Transport { url, .. }
            | ApiError::Decode { url, .. } => url,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
