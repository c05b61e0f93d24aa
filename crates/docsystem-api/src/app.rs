//! Application builder and server runner.

use std::time::Duration;

use axum::Router;
use tokio::sync::watch;
use tracing::{error, info, warn};

use docsystem_core::error::{AppError, ErrorKind};
use docsystem_core::result::AppResult;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Bind the configured address and serve until Ctrl+C.
///
/// After the signal, in-flight requests get `server.shutdown_grace_seconds`
/// to finish before the server task is aborted.
pub async fn serve(state: AppState) -> AppResult<()> {
    let addr = state.config.server.bind_address();
    let grace = Duration::from_secs(state.config.server.shutdown_grace_seconds);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;

    info!(%addr, "DocSystem server listening");

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, build_app(state)).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });
    let mut handle = tokio::spawn(async move { server.await });

    tokio::select! {
        joined = &mut handle => match joined {
            Ok(result) => result
                .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?,
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Internal,
                    "Server task failed",
                    e,
                ));
            }
        },
        _ = async {
            if shutdown_rx.changed().await.is_ok() {
                tokio::time::sleep(grace).await;
            } else {
                std::future::pending::<()>().await;
            }
        } => {
            warn!(
                grace_seconds = grace.as_secs(),
                "Grace period elapsed, aborting open connections"
            );
            handle.abort();
        }
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
