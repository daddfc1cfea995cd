// ABOUTME: Router assembly and the HTTP serve loop
// ABOUTME: Wires routes together with request tracing and CORS middleware
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Router assembly and the serve loop.

use crate::config::environment::ServerConfig;
use crate::routes::{HealthRoutes, ScaleRoutes};
use anyhow::{Context, Result};
use axum::http::Method;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the full application router with middleware applied.
///
/// Exposed separately from [`run`] so tests can drive the router without
/// binding a socket.
pub fn build_router() -> Router {
    Router::new()
        .merge(ScaleRoutes::routes())
        .merge(HealthRoutes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// The calculator is served to browser front ends from other origins, so
/// CORS is wide open. There is nothing to protect: no credentials, no state.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Bind the configured address and serve requests until shutdown.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server loop fails.
pub async fn run(config: ServerConfig) -> Result<()> {
    let router = build_router();
    let address = format!("{}:{}", config.host, config.http_port);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!("Scaler API listening on http://{address}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server loop failed")?;

    Ok(())
}

async fn shutdown_signal() {
    // Exit cleanly on ctrl-c; ignore the error case where the signal
    // handler cannot be installed and just run until killed.
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
