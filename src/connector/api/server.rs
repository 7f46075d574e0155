use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::cli::ServiceKind;

use super::container::Container;
use super::router::Router;

pub struct ServeConfig {
    pub host: String,
    pub port: u16,
    pub service: ServiceKind,
}

impl ServeConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Serves the configured routes until Ctrl-C.
pub async fn serve(container: &Container, config: &ServeConfig) -> Result<()> {
    let app = Router::new(container).build(config.service);

    let listener = TcpListener::bind(config.address())
        .await
        .with_context(|| format!("failed to bind {}", config.address()))?;
    info!(
        "Serving {} on http://{}",
        config.service.name(),
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
