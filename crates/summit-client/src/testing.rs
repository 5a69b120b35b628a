//! Test utilities for summit-client
//!
//! Runs a Summit router on a random local port so integration tests can
//! talk to it over real HTTP.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::{Result, SummitClient};

/// A test server that shuts down when dropped
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: SummitClient,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    /// Serve `router` on 127.0.0.1 with a client using a 5s request timeout
    ///
    /// # Example
    ///
    /// ```ignore
    /// use summit_client::testing::TestServer;
    /// use summit_api::{create_router, AppState};
    ///
    /// let router = create_router(AppState::new(trips));
    /// let server = TestServer::start(router).await?;
    /// let trips = server.client.list_trips().await?;
    /// ```
    pub async fn start(router: axum::Router) -> Result<Self> {
        Self::start_with_timeout(router, Duration::from_secs(5)).await
    }

    /// Serve `router` with a custom client request timeout
    pub async fn start_with_timeout(router: axum::Router, timeout: Duration) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        let client = SummitClient::with_config(
            &format!("http://{}", addr),
            timeout,
            Duration::from_secs(2),
        )?;

        Ok(Self {
            addr,
            client,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Base URL of the running server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Shut the server down and wait for it to exit
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
