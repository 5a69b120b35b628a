//! End-to-end tests over a real socket using summit-client
//!
//! These tests use the summit-client library to make requests,
//! ensuring the client stays in sync with the API.

use pretty_assertions::assert_eq;
use reqwest::multipart::Form;

use summit_api::{create_router, AppState};
use summit_client::testing::TestServer;
use summit_client::{SummitClientError, TrackPoint, Trip, TripStats};
use summit_core::catalog::default_trips;

const TWO_TRACKS_GPX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="summit-tests">
  <trk>
    <name>Day one</name>
    <trkseg>
      <trkpt lat="1" lon="1"/>
      <trkpt lat="2" lon="2"/>
    </trkseg>
  </trk>
  <trk>
    <name>Day two</name>
    <trkseg>
      <trkpt lat="3" lon="3"/>
    </trkseg>
  </trk>
</gpx>"#;

// =============================================================================
// Test Helpers
// =============================================================================

async fn create_test_server() -> TestServer {
    TestServer::start(create_router(AppState::new(default_trips())))
        .await
        .expect("Failed to start test server")
}

fn custom_trip() -> Trip {
    Trip {
        id: "m1".to_string(),
        name: "Matterhorn".to_string(),
        date: "Aug 2026".to_string(),
        location: "Zermatt".to_string(),
        elevation: "4,478m".to_string(),
        image: "https://example.com/matterhorn.jpg".to_string(),
        description: "Hornli Ridge & back".to_string(),
        stats: TripStats {
            duration: "2 Days".to_string(),
            distance: "18km".to_string(),
            gain: "2800m".to_string(),
        },
    }
}

// =============================================================================
// Trips
// =============================================================================

#[tokio::test]
async fn test_health() {
    let server = create_test_server().await;
    assert_eq!(server.client.health().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_list_trips() {
    let server = create_test_server().await;
    let trips = server.client.list_trips().await.unwrap();
    assert_eq!(trips, default_trips());
}

#[tokio::test]
async fn test_get_trip() {
    let server = create_test_server().await;
    let trip = server.client.get_trip("6").await.unwrap();
    assert_eq!(trip.name, "Dent Blanche");
    assert_eq!(trip.location, "Val d'Hérens");
}

#[tokio::test]
async fn test_get_unknown_trip() {
    let server = create_test_server().await;
    let err = server.client.get_trip("nope").await.unwrap_err();
    assert!(matches!(err, SummitClientError::TripNotFound(_)));
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_configured_trips_are_served() {
    let server = TestServer::start(create_router(AppState::new(vec![custom_trip()])))
        .await
        .unwrap();

    assert_eq!(server.client.list_trips().await.unwrap(), vec![custom_trip()]);

    let html = server.client.index_page().await.unwrap();
    assert!(html.contains("<h2>Matterhorn</h2>"));
    assert!(html.contains("Hornli Ridge &amp; back"));
    assert!(!html.contains("Monte Rosa"));
}

// =============================================================================
// Track Upload
// =============================================================================

#[tokio::test]
async fn test_parse_track() {
    let server = create_test_server().await;
    let parsed = server
        .client
        .parse_track("route.gpx", TWO_TRACKS_GPX.as_bytes().to_vec())
        .await
        .unwrap();

    assert_eq!(
        parsed.track,
        vec![
            TrackPoint::new(1.0, 1.0),
            TrackPoint::new(2.0, 2.0),
            TrackPoint::new(3.0, 3.0),
        ]
    );
    assert_eq!(parsed.name, "Day one");
    assert_eq!(parsed.description, "");
}

#[tokio::test]
async fn test_parse_track_malformed() {
    let server = create_test_server().await;
    let err = server
        .client
        .parse_track("broken.gpx", b"definitely not xml".to_vec())
        .await
        .unwrap_err();

    match err {
        SummitClientError::ServerError { status, message } => {
            assert_eq!(status, 500);
            assert!(!message.is_empty());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_no_file_part() {
    let server = create_test_server().await;
    let url = format!("{}/api/parse-gpx", server.base_url());
    let form = Form::new().text("note", "no file here");

    let response = server
        .client
        .http_client()
        .post(url)
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "No file part");
}

#[tokio::test]
async fn test_upload_too_large() {
    let server = TestServer::start(create_router(AppState::with_upload_limit(
        default_trips(),
        512,
    )))
    .await
    .unwrap();

    let err = server
        .client
        .parse_track("route.gpx", vec![b' '; 4096])
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(413));
}
