//! Application state for the Summit API

use std::sync::Arc;

use summit_core::Trip;

use crate::error::ApiError;

/// Default upload limit for `/api/parse-gpx` (16 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Application state shared across all handlers.
///
/// The trip list is fixed at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    trips: Arc<[Trip]>,
    max_upload_bytes: usize,
}

impl AppState {
    /// Create a new AppState with the default upload limit
    pub fn new(trips: Vec<Trip>) -> Self {
        Self::with_upload_limit(trips, DEFAULT_MAX_UPLOAD_BYTES)
    }

    /// Create a new AppState with a custom upload limit in bytes
    pub fn with_upload_limit(trips: Vec<Trip>, max_upload_bytes: usize) -> Self {
        Self {
            trips: trips.into(),
            max_upload_bytes,
        }
    }

    /// All trips, in display order
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Get a trip by ID
    pub fn get_trip(&self, trip_id: &str) -> Result<&Trip, ApiError> {
        self.trips
            .iter()
            .find(|t| t.id == trip_id)
            .ok_or_else(|| ApiError::NotFound(format!("Trip not found: {}", trip_id)))
    }

    /// Maximum accepted request body size for uploads
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }
}
