//! Site server.

use tokio::net::TcpListener;

use crate::config::{ServerConfig, SiteConfig};
use crate::routes;
use crate::state::AppState;
use crate::{Error, Result};

/// NebulaStack site server
pub struct Server {
    config: SiteConfig,
    state: AppState,
}

impl Server {
    /// Create a server for the given configuration and state.
    pub fn new(config: SiteConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Bind the configured address and serve until shutdown is signalled.
    pub async fn run(self) -> Result<()> {
        let listener = bind(&self.config.server).await?;
        self.run_on(listener).await
    }

    /// Serve on an already-bound listener until shutdown is signalled.
    pub async fn run_on(self, listener: TcpListener) -> Result<()> {
        let local = listener.local_addr()?;
        tracing::info!(
            addr = %local,
            services = self.state.content.services.len(),
            projects = self.state.content.projects.len(),
            testimonials = self.state.content.testimonials.len(),
            "Serving {}",
            self.state.content.company.name
        );

        axum::serve(listener, routes::router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Bind the configured host and port.
///
/// The host may be an IP address or a name such as `localhost`; names are
/// resolved and the first address that binds is used.
pub async fn bind(server: &ServerConfig) -> Result<TcpListener> {
    TcpListener::bind((server.host.as_str(), server.port))
        .await
        .map_err(|e| {
            Error::config(format!(
                "Failed to bind {}:{}: {e}",
                server.host, server.port
            ))
        })
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
