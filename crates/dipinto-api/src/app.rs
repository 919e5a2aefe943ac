//! Application builder: wires router, middleware, and state into an Axum app.

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use dipinto_core::error::{AppError, ErrorKind};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Result<Router, AppError> {
    let cors = build_cors_layer(&state.config.server.cors, &state.config.client)?;

    Ok(build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// Serves the application until Ctrl+C or SIGTERM, then drains in-flight
/// requests for at most `server.shutdown_grace_seconds`.
pub async fn run_server(state: AppState) -> Result<(), AppError> {
    let addr: SocketAddr = format!("{}:{}", state.config.server.host, state.config.server.port)
        .parse()
        .map_err(|e| AppError::configuration(format!("Invalid server address: {e}")))?;
    let grace = Duration::from_secs(state.config.server.shutdown_grace_seconds);

    let app = build_app(state)?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e))?;

    info!(%addr, "Dipinto server listening");

    let (signal_tx, signal_rx) = oneshot::channel::<()>();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        info!("Shutdown signal received, starting graceful shutdown...");
        let _ = signal_tx.send(());
    });

    tokio::select! {
        result = server.into_future() => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = async {
            match signal_rx.await {
                Ok(()) => tokio::time::sleep(grace).await,
                Err(_) => std::future::pending::<()>().await,
            }
        } => {
            error!(grace_seconds = grace.as_secs(), "Graceful shutdown timed out");
        }
    }

    info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
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
                error!(error = %e, "Failed to install SIGTERM handler");
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
}
