//! Server Implementation
//!
//! HTTP server startup and graceful shutdown

use std::net::SocketAddr;
use std::time::Duration;

use crate::core::{Config, Result, ServerError, ServerState};
use crate::services::http::build_router;

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with initialized state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> Result<()> {
        let state = self.state.clone();
        let app = build_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        tracing::info!("🍽️ Catering server listening on {}", addr);

        let shutdown_timeout = Duration::from_millis(self.config.shutdown_timeout_ms);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
            .await
            .map_err(|e| ServerError::Internal(e.into()))?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl+C; arms a hard exit if draining takes too long
async fn shutdown_signal(timeout: Duration) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutting down...");

    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        tracing::warn!("Graceful shutdown timed out after {:?}, exiting", timeout);
        std::process::exit(1);
    });
}
