//! GPX decoding via the `gpx` crate

use crate::error::{DecodeError, DecodeResult};
use crate::models::{ParsedTrack, TrackPoint};

/// Decode a GPX document.
///
/// Points of all segments of all tracks are flattened in file order. Routes
/// and waypoints are not part of the result.
pub fn decode_gpx(content: &[u8]) -> DecodeResult<ParsedTrack> {
    let data = gpx::read(content).map_err(|e| DecodeError::Gpx(e.to_string()))?;

    let points: Vec<TrackPoint> = data
        .tracks
        .iter()
        .flat_map(|track| &track.segments)
        .flat_map(|segment| &segment.points)
        .map(|waypoint| {
            let point = waypoint.point();
            TrackPoint::new(point.y(), point.x())
        })
        .collect();

    let first = data.tracks.first();
    Ok(ParsedTrack::new(
        points,
        first.and_then(|t| t.name.clone()),
        first.and_then(|t| t.description.clone()),
    ))
}
