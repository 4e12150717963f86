//! HTTP server lifecycle

use crate::api::build_router;
use crate::service::AppState;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tracing::{info, warn};

/// Serves the router until told to stop
pub struct ApiServer {
    address: String,
    state: Arc<AppState>,
    shutdown_tx: broadcast::Sender<()>,
}

impl ApiServer {
    pub fn new(state: Arc<AppState>) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            address: state.config().bind_address(),
            state,
            shutdown_tx,
        }
    }

    /// Bind and serve; returns once a stop signal has drained connections
    pub async fn start(&self) -> Result<()> {
        let addr: SocketAddr = self
            .address
            .parse()
            .with_context(|| format!("Invalid server address {}", self.address))?;

        let app = build_router(self.state.clone());
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!("HTTP server listening on http://{}", addr);

        let mut shutdown_rx = self.shutdown_tx.subscribe();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
                info!("HTTP server shutdown signal received");
            })
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }

    pub fn stop(&self) {
        info!("Stopping HTTP server...");

        if let Err(e) = self.shutdown_tx.send(()) {
            warn!("Failed to send shutdown signal to HTTP server: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::time::Duration;

    #[tokio::test]
    async fn test_server_stops_on_signal() {
        let mut config = AppConfig::default();
        config.service.host = "127.0.0.1".to_string();
        config.service.http_port = 38517;
        let state = Arc::new(AppState::new(config).await.unwrap());

        let server = Arc::new(ApiServer::new(state));
        let running = {
            let server = server.clone();
            tokio::spawn(async move { server.start().await })
        };

        tokio::time::sleep(Duration::from_millis(100)).await;
        server.stop();

        let result = tokio::time::timeout(Duration::from_secs(5), running)
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_ok());
    }
}
