//! Error types for the backend API adapter

use thiserror::Error;

/// Errors raised while talking to the poliscope backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (connection refused, DNS, TLS)
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The backend answered with a non-success status
    #[error("HTTP error: {status}")]
    HttpStatus { status: u16 },

    /// The response body could not be decoded
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout { seconds: 0 }
        } else if err.is_decode() {
            ApiError::MalformedResponse(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::HttpStatus {
                status: status.as_u16(),
            }
        } else {
            ApiError::ConnectionError(err.to_string())
        }
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
