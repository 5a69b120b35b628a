//! Track decoding results

use serde::{Deserialize, Serialize};

/// Name reported when the uploaded file has no track or the track is unnamed
pub const DEFAULT_TRACK_NAME: &str = "Uploaded Track";

/// A single recorded position in decimal degrees.
///
/// Serialized as a two-element array `[lat, lon]`, the order map widgets
/// such as Leaflet expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,
}

impl TrackPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for TrackPoint {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<TrackPoint> for [f64; 2] {
    fn from(point: TrackPoint) -> Self {
        [point.lat, point.lon]
    }
}

/// Flattened result of decoding a track file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTrack {
    /// Every point of every segment of every track, in file order
    pub track: Vec<TrackPoint>,
    /// Name of the first track
    pub name: String,
    /// Description of the first track
    pub description: String,
}

impl ParsedTrack {
    /// Build a result from the flattened points and the first track's metadata,
    /// falling back to the default name and an empty description.
    pub fn new(track: Vec<TrackPoint>, name: Option<String>, description: Option<String>) -> Self {
        Self {
            track,
            name: name.unwrap_or_else(|| DEFAULT_TRACK_NAME.to_string()),
            description: description.unwrap_or_default(),
        }
    }

    /// Number of decoded points
    pub fn len(&self) -> usize {
        self.track.len()
    }

    pub fn is_empty(&self) -> bool {
        self.track.is_empty()
    }
}
