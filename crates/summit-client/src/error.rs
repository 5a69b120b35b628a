//! Error types for Summit client operations

use thiserror::Error;

/// Result type alias for Summit client operations
pub type Result<T> = std::result::Result<T, SummitClientError>;

/// Errors that can occur during Summit client operations
#[derive(Error, Debug)]
pub enum SummitClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Server returned an error response
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Trip not found
    #[error("Trip not found: {0}")]
    TripNotFound(String),

    /// Upload rejected for size
    #[error("Upload too large: {0}")]
    PayloadTooLarge(String),
}

impl SummitClientError {
    /// Create a server error from status code and message
    pub fn server_error(status: u16, message: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            message: message.into(),
        }
    }

    /// HTTP status carried by this error, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ServerError { status, .. } => Some(*status),
            Self::TripNotFound(_) => Some(404),
            Self::PayloadTooLarge(_) => Some(413),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
