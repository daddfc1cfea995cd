// ABOUTME: Route module organization for the Scaler HTTP endpoints
// ABOUTME: Each domain module contains route definitions and thin handlers delegating to services
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP routes, organized by domain. Handlers stay thin and delegate to the
//! service layer.

/// Health check and readiness routes
pub mod health;
/// The scale conversion route
pub mod scale;

/// Health route handlers
pub use health::HealthRoutes;
/// Scale conversion route handlers
pub use scale::ScaleRoutes;
