//! Summit Client Library
//!
//! Provides a typed HTTP client for the Summit API.
//!
//! # Example
//!
//! ```rust,no_run
//! use summit_client::SummitClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SummitClient::new("http://localhost:3000")?;
//!
//!     let trips = client.list_trips().await?;
//!     let route = std::fs::read("hornli.gpx")?;
//!     let parsed = client.parse_track("hornli.gpx", route).await?;
//!     println!("{} trips, {} points", trips.len(), parsed.track.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! The `testing` module runs a router on a random local port:
//!
//! ```rust,ignore
//! use summit_client::testing::TestServer;
//! use summit_api::{create_router, AppState};
//!
//! let server = TestServer::start(create_router(state)).await?;
//! let trips = server.client.list_trips().await?;
//! ```

mod client;
mod error;
pub mod testing;

pub use client::SummitClient;
pub use error::{Result, SummitClientError};

// Re-export core types for convenience
pub use summit_core::models::{ParsedTrack, TrackPoint, Trip, TripStats};
