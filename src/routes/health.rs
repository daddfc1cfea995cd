// ABOUTME: Health and readiness route handlers for service monitoring
// ABOUTME: Used by load balancers and deployment checks; carries no application state
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Liveness and readiness endpoints. The service is stateless, so ready and
//! healthy are the same thing here.

use axum::routing::get;
use axum::{Json, Router};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check routes
    pub fn routes() -> Router {
        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "service": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }))
        }

        async fn ready_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "ready",
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }))
        }

        Router::new()
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
    }
}
