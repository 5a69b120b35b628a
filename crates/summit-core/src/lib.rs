//! summit-core - Core models and track decoding for Summit
//!
//! This crate holds the trip catalog served by the web application and the
//! decoders that turn uploaded track files (GPX, KML) into a flat sequence
//! of latitude/longitude points. It has no HTTP dependencies.

pub mod catalog;
pub mod decode;
pub mod error;
pub mod models;

pub use decode::{decode_track, TrackFormat};
pub use error::{DecodeError, DecodeResult};
pub use models::*;
