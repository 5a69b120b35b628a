//! Trip data handlers

use axum::extract::{Path, State};
use axum::Json;
use summit_core::Trip;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/trips
/// List all trips in display order
pub async fn list_trips(State(state): State<AppState>) -> Json<Vec<Trip>> {
    Json(state.trips().to_vec())
}

/// GET /api/trips/{trip_id}
/// Get a single trip
pub async fn get_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<Json<Trip>, ApiError> {
    let trip = state.get_trip(&trip_id)?;
    Ok(Json(trip.clone()))
}
