//! Track file decoding
//!
//! Picks a decoder from the upload's filename (falling back to sniffing the
//! content) and flattens the file into a [`ParsedTrack`].

mod gpx;
mod kml;
mod xml;

use std::path::Path;

use crate::error::{DecodeError, DecodeResult};
use crate::models::ParsedTrack;

pub use self::gpx::decode_gpx;
pub use self::kml::decode_kml;

/// Extensions accepted by the upload form
pub const ACCEPTED_EXTENSIONS: &[&str] = &["gpx", "kml", "kmz"];

/// Supported track file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackFormat {
    /// GPS Exchange Format
    Gpx,
    /// Keyhole Markup Language (plain `.kml` or uncompressed `.kmz`)
    Kml,
}

impl TrackFormat {
    /// Format implied by the filename extension (case-insensitive)
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())?
            .to_ascii_lowercase();
        match ext.as_str() {
            "gpx" => Some(TrackFormat::Gpx),
            "kml" | "kmz" => Some(TrackFormat::Kml),
            _ => None,
        }
    }

    /// Format implied by the document's root element
    pub fn sniff(content: &[u8]) -> Option<Self> {
        if contains(content, b"<gpx") {
            Some(TrackFormat::Gpx)
        } else if contains(content, b"<kml") {
            Some(TrackFormat::Kml)
        } else {
            None
        }
    }

    /// Resolve the format for an upload, preferring the extension
    pub fn detect(filename: &str, content: &[u8]) -> DecodeResult<Self> {
        Self::from_filename(filename)
            .or_else(|| Self::sniff(content))
            .ok_or(DecodeError::UnsupportedFormat)
    }

    /// Decode `content` as this format
    pub fn decode(self, content: &[u8]) -> DecodeResult<ParsedTrack> {
        match self {
            TrackFormat::Gpx => decode_gpx(content),
            TrackFormat::Kml => decode_kml(content),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackFormat::Gpx => "gpx",
            TrackFormat::Kml => "kml",
        }
    }
}

impl std::fmt::Display for TrackFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode an uploaded track file into its flattened point sequence
pub fn decode_track(filename: &str, content: &[u8]) -> DecodeResult<ParsedTrack> {
    let format = TrackFormat::detect(filename, content)?;
    let parsed = format.decode(content)?;

    tracing::debug!(
        filename,
        format = %format,
        points = parsed.len(),
        "Decoded track file"
    );

    Ok(parsed)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
