//! Console service for the device claiming dashboard
//!
//! Publishes the endpoint discovery document and serves the compiled
//! frontend; device claims and commands are handled by the backend services
//! the document points at.

pub mod config;
pub mod error;
pub mod server;

pub use config::{load_config, Config};
pub use error::{ConsoleError, Result};

use std::net::SocketAddr;

use tokio_util::sync::CancellationToken;

/// Run the console service with the given configuration
pub async fn run(config: Config) -> Result<()> {
    let cancel = CancellationToken::new();

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            cancel_for_signal.cancel();
        }
    });

    let port = config.server.port;
    let router = server::build_router(config);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ConsoleError::Server(format!("Failed to bind to {}: {}", addr, e)))?;
    tracing::info!("Console listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await
        .map_err(|e| ConsoleError::Server(e.to_string()))?;

    tracing::info!("Console stopped");
    Ok(())
}
