//! Summit HTTP Client implementation

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{Result, SummitClientError};
use summit_core::{ParsedTrack, Trip};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error body returned by the API
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Summit REST API client
#[derive(Debug, Clone)]
pub struct SummitClient {
    client: Client,
    base_url: Url,
}

impl SummitClient {
    /// Create a new Summit client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the server (e.g., "http://localhost:3000")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new Summit client with custom timeouts
    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get a reference to the underlying HTTP client
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Check server health
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<String> {
        let url = self.base_url.join("/health")?;
        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            Ok(response.text().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Fetch the rendered trip list page
    #[instrument(skip(self))]
    pub async fn index_page(&self) -> Result<String> {
        let url = self.base_url.join("/")?;
        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            Ok(response.text().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// List all trips
    #[instrument(skip(self))]
    pub async fn list_trips(&self) -> Result<Vec<Trip>> {
        let url = self.base_url.join("/api/trips")?;
        debug!("Listing trips from {}", url);

        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Get a single trip by ID
    #[instrument(skip(self))]
    pub async fn get_trip(&self, trip_id: &str) -> Result<Trip> {
        let url = self.base_url.join(&format!("/api/trips/{}", trip_id))?;

        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Upload a track file and return its decoded point sequence
    #[instrument(skip(self, content), fields(size = content.len()))]
    pub async fn parse_track(&self, filename: &str, content: Vec<u8>) -> Result<ParsedTrack> {
        let url = self.base_url.join("/api/parse-gpx")?;
        let part = Part::bytes(content).file_name(filename.to_string());
        let form = Form::new().part("file", part);

        let response = self.client.post(url).multipart(form).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    async fn extract_error(&self, response: reqwest::Response) -> SummitClientError {
        let status = response.status();

        let message = match response.json::<ErrorResponse>().await {
            Ok(err) => err.error,
            Err(_) => format!("HTTP {}", status),
        };

        match status {
            StatusCode::NOT_FOUND if message.starts_with("Trip not found") => {
                SummitClientError::TripNotFound(message)
            }
            StatusCode::PAYLOAD_TOO_LARGE => SummitClientError::PayloadTooLarge(message),
            _ => SummitClientError::server_error(status.as_u16(), message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = SummitClient::new("http://localhost:3000");
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let client = SummitClient::new("not a url");
        assert!(matches!(client, Err(SummitClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_base_url() {
        let client = SummitClient::new("http://localhost:3000").unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:3000/");
    }
}
