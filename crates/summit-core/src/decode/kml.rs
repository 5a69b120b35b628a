//! KML decoding via quick-xml
//!
//! Every `Placemark` carrying line geometry counts as one track. A
//! `LineString` contributes one segment from its `coordinates` text
//! (`lon,lat[,alt]` tuples separated by whitespace); a `gx:Track`
//! contributes one segment from its `gx:coord` children (`lon lat [alt]`).
//! `MultiGeometry` and `gx:MultiTrack` are descended into. Other geometry
//! is ignored.

use quick_xml::events::Event;
use quick_xml::Reader;

use super::xml::{read_text_owned, skip_element, unexpected_eof};
use crate::error::{DecodeError, DecodeResult};
use crate::models::{ParsedTrack, TrackPoint};

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

#[derive(Debug, Default)]
struct KmlTrack {
    name: Option<String>,
    description: Option<String>,
    segments: Vec<Vec<TrackPoint>>,
}

/// Decode a KML document (or the KML text of an uncompressed `.kmz`)
pub fn decode_kml(content: &[u8]) -> DecodeResult<ParsedTrack> {
    if content.starts_with(ZIP_MAGIC) {
        return Err(DecodeError::CompressedKmz);
    }

    let mut reader = Reader::from_reader(content);
    let mut tracks: Vec<KmlTrack> = Vec::new();
    let mut saw_root = false;
    let mut root_open = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"kml" => {
                    saw_root = true;
                    root_open = true;
                }
                b"Placemark" => {
                    let track = parse_placemark(&mut reader)?;
                    if !track.segments.is_empty() {
                        tracks.push(track);
                    }
                }
                _ => {}
            },
            Event::Empty(e) if e.local_name().as_ref() == b"kml" => saw_root = true,
            Event::End(e) if e.local_name().as_ref() == b"kml" => root_open = false,
            Event::Eof if root_open => return Err(unexpected_eof()),
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(DecodeError::Xml("missing <kml> root element".to_string()));
    }

    let points: Vec<TrackPoint> = tracks
        .iter()
        .flat_map(|track| &track.segments)
        .flatten()
        .copied()
        .collect();

    let mut tracks = tracks.into_iter();
    let first = tracks.next().unwrap_or_default();
    Ok(ParsedTrack::new(points, first.name, first.description))
}

/// Parse a `<Placemark>`; called after its start tag
fn parse_placemark<'a>(reader: &mut Reader<&'a [u8]>) -> DecodeResult<KmlTrack> {
    let mut track = KmlTrack::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"name" => track.name = Some(read_text_owned(reader, &e)?),
                b"description" => track.description = Some(read_text_owned(reader, &e)?),
                b"LineString" => track.segments.push(parse_line_string(reader)?),
                b"Track" => track.segments.push(parse_gx_track(reader)?),
                b"MultiGeometry" | b"MultiTrack" => {}
                _ => skip_element(reader, &e)?,
            },
            Event::End(e) if e.local_name().as_ref() == b"Placemark" => break,
            Event::Eof => return Err(unexpected_eof()),
            _ => {}
        }
    }

    Ok(track)
}

/// Parse a `<LineString>`; called after its start tag
fn parse_line_string<'a>(reader: &mut Reader<&'a [u8]>) -> DecodeResult<Vec<TrackPoint>> {
    let mut points = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"coordinates" => {
                    let text = read_text_owned(reader, &e)?;
                    points = parse_coordinates(&text)?;
                }
                _ => skip_element(reader, &e)?,
            },
            Event::End(e) if e.local_name().as_ref() == b"LineString" => break,
            Event::Eof => return Err(unexpected_eof()),
            _ => {}
        }
    }

    Ok(points)
}

/// Parse a `<gx:Track>`; called after its start tag
fn parse_gx_track<'a>(reader: &mut Reader<&'a [u8]>) -> DecodeResult<Vec<TrackPoint>> {
    let mut points = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"coord" => {
                    let text = read_text_owned(reader, &e)?;
                    points.push(parse_tuple(&text, |c: char| c.is_whitespace())?);
                }
                _ => skip_element(reader, &e)?,
            },
            Event::End(e) if e.local_name().as_ref() == b"Track" => break,
            Event::Eof => return Err(unexpected_eof()),
            _ => {}
        }
    }

    Ok(points)
}

/// Parse a `<coordinates>` body: whitespace-separated `lon,lat[,alt]` tuples
fn parse_coordinates(text: &str) -> DecodeResult<Vec<TrackPoint>> {
    text.split_whitespace()
        .map(|tuple| parse_tuple(tuple, |c: char| c == ','))
        .collect()
}

/// Parse one `lon<sep>lat[<sep>alt]` tuple into a point.
///
/// Both values must be finite decimal degrees within their WGS84 range.
fn parse_tuple(tuple: &str, sep: impl Fn(char) -> bool) -> DecodeResult<TrackPoint> {
    let mut parts = tuple.split(sep).filter(|p| !p.is_empty());
    let invalid = || DecodeError::InvalidCoordinate(tuple.to_string());

    let lon = parts
        .next()
        .and_then(|p| parse_degrees(p, 180.0))
        .ok_or_else(invalid)?;
    let lat = parts
        .next()
        .and_then(|p| parse_degrees(p, 90.0))
        .ok_or_else(invalid)?;

    Ok(TrackPoint::new(lat, lon))
}

/// Parse a degree value, rejecting NaN, infinities and anything beyond `max`
fn parse_degrees(text: &str, max: f64) -> Option<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.abs() <= max)
}
