//! summit-api - HTTP layer for Summit
//!
//! Serves the trip list page and the track upload endpoint. Track decoding
//! itself lives in `summit-core`; this crate only handles the HTTP surface.
//!
//! # Usage
//!
//! ```ignore
//! use summit_api::{create_router, AppState};
//! use summit_core::catalog::default_trips;
//!
//! let state = AppState::new(default_trips());
//! let router = create_router(state);
//! ```

pub mod error;
pub mod handlers;
pub mod limit;
pub mod state;

pub use error::ApiError;
pub use state::{AppState, DEFAULT_MAX_UPLOAD_BYTES};

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the Summit router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let upload_limit = state.max_upload_bytes();

    Router::new()
        // Trip list page
        .route("/", get(handlers::index::index))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Trip data
        .route("/api/trips", get(handlers::trips::list_trips))
        .route("/api/trips/{trip_id}", get(handlers::trips::get_trip))
        // Track upload; oversized requests never reach the decoder
        .route(
            "/api/parse-gpx",
            post(handlers::tracks::parse_track)
                .layer(DefaultBodyLimit::max(upload_limit))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    limit::reject_oversized_upload,
                )),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
