//! Server construction and lifecycle.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use sitesmith_extractor::Extractor;
use sitesmith_shared::{Result, SitesmithError};
use sitesmith_synthesis::Synthesizer;

use crate::config::ServerConfig;
use crate::router::{AppState, build_router};

/// Sitesmith HTTP server handle.
pub struct Server {
    config: ServerConfig,
    state: AppState,
}

impl Server {
    /// Create a server with the production extractor and synthesizer.
    pub fn new(config: ServerConfig) -> Result<Self> {
        let state = AppState {
            extractor: Arc::new(Extractor::new()?),
            synthesizer: Arc::new(Synthesizer::new()),
        };
        Ok(Self { config, state })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing without a listener).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Bind the listener and serve until shutdown.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_addr();
        let app = self.router();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| SitesmithError::Server(format!("failed to bind {addr}: {e}")))?;
        info!(%addr, "sitesmith server listening");

        axum::serve(listener, app)
            .await
            .map_err(|e| SitesmithError::Server(e.to_string()))
    }
}
