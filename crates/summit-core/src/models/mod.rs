//! Data models shared by the API, the client and the daemon

pub mod track;
pub mod trip;

pub use track::{ParsedTrack, TrackPoint, DEFAULT_TRACK_NAME};
pub use trip::{Trip, TripStats};
