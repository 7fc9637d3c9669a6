//! HTTP server initialization and runtime setup.
//!
//! Wires the store, service, and router together and runs the Axum server.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::MemoryLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory link store
/// - Link service
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the bind fails or a server runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let link_repository = Arc::new(MemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::with_code_length(
        link_repository,
        config.code_length,
    ));
    tracing::info!("Link store initialized (in-memory)");

    let state = AppState::new(link_service, config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Completes when the process receives Ctrl+C.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
