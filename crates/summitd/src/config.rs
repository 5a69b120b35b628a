//! TOML configuration for summitd
//!
//! Every key is optional. A `[[trips]]` array replaces the built-in
//! catalog; without it the daemon serves `summit_core::catalog::default_trips`.

use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use summit_api::DEFAULT_MAX_UPLOAD_BYTES;
use summit_core::catalog::default_trips;
use summit_core::Trip;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// HTTP server settings (`[server]`)
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Upload limit for `/api/parse-gpx`, in bytes
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServerConfig {
    /// Socket address to bind
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid server host '{}'", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Top-level daemon configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummitConfig {
    #[serde(default)]
    pub server: ServerConfig,
    /// Trips to serve instead of the built-in catalog
    #[serde(default)]
    pub trips: Option<Vec<Trip>>,
}

impl SummitConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Trips to serve: the configured list, or the built-in catalog
    pub fn trips(&self) -> Vec<Trip> {
        match &self.trips {
            Some(trips) => trips.clone(),
            None => default_trips(),
        }
    }
}
