//! Trip records shown on the index page

use serde::{Deserialize, Serialize};

/// A past mountaineering trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// Stable identifier (used in `/api/trips/{id}`)
    pub id: String,
    /// Peak or route name
    pub name: String,
    /// Free-form date label, e.g. "Aug 2025"
    pub date: String,
    /// Region or valley
    pub location: String,
    /// Summit elevation label, e.g. "4,634m"
    pub elevation: String,
    /// Cover image URL
    pub image: String,
    pub description: String,
    pub stats: TripStats,
}

/// Headline numbers for a trip, kept as display strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripStats {
    /// e.g. "3 Days"
    pub duration: String,
    /// e.g. "24km"
    pub distance: String,
    /// Elevation gain, e.g. "2100m"
    pub gain: String,
}
