//! summitd - Summit server daemon
//!
//! Serves the trip list page and the track upload endpoint.
//!
//! Usage:
//!   summitd [OPTIONS] [config.toml]
//!
//! Options:
//!   -p, --port <port>  Override the listen port (also: SUMMIT_PORT)
//!
//! If no config file is provided, the built-in trip catalog is served on
//! port 3000.

mod config;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use summit_api::{create_router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::SummitConfig;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "summitd")]
#[command(version, about = "Summit server daemon - trip list and track upload service")]
struct Args {
    /// Server config file (TOML)
    config: Option<PathBuf>,

    /// Override the listen port (takes precedence over the config file)
    #[arg(short, long, env = "SUMMIT_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "summitd=info,summit_api=info,summit_core=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting summitd");

    let args = Args::parse();

    let mut config = if let Some(ref path) = args.config {
        tracing::info!("Loading config from: {}", path.display());
        SummitConfig::load(path)?
    } else {
        tracing::info!("No config file provided, using defaults");
        SummitConfig::default()
    };

    // Port precedence: CLI > SUMMIT_PORT > config file
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let trips = config.trips();
    tracing::info!(
        trips = trips.len(),
        custom = config.trips.is_some(),
        max_upload_bytes = config.server.max_upload_bytes,
        "Loaded trip catalog"
    );

    let state = AppState::with_upload_limit(trips, config.server.max_upload_bytes);
    let app = create_router(state);

    let addr = config.server.bind_addr()?;
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("summitd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
