//! Track decoding errors

use thiserror::Error;

/// Result type for decoding operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that can occur while decoding an uploaded track file
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The GPX reader rejected the document (message from the `gpx` crate)
    #[error("{0}")]
    Gpx(String),

    /// The document is not well-formed XML
    #[error("XML parse error: {0}")]
    Xml(String),

    /// A coordinate tuple is not a pair of finite, in-range degrees
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Neither the filename nor the content identify a known format
    #[error("Unsupported file format")]
    UnsupportedFormat,

    /// A zipped KMZ archive was uploaded
    #[error("Compressed KMZ archives are not supported")]
    CompressedKmz,
}

impl DecodeError {
    /// True when the upload is a recognised format but its content is broken,
    /// false when the format itself is not supported.
    pub fn is_malformed_input(&self) -> bool {
        match self {
            DecodeError::Gpx(_) | DecodeError::Xml(_) | DecodeError::InvalidCoordinate(_) => true,
            DecodeError::UnsupportedFormat | DecodeError::CompressedKmz => false,
        }
    }
}

impl From<quick_xml::Error> for DecodeError {
    fn from(err: quick_xml::Error) -> Self {
        DecodeError::Xml(err.to_string())
    }
}
