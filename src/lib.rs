// ABOUTME: Library entry point for the Scaler model railroad conversion API
// ABOUTME: Exposes the data model, conversion service, and HTTP route definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Scaler
//!
//! A small HTTP service that converts between model railroad dimensions and
//! their full-size ("prototype") equivalents. A client POSTs either the model
//! or the full-size dimensions along with a named scale (HO, N, O, ...) and an
//! output measurement; the service fills in the missing dimension set.
//!
//! All arithmetic uses arbitrary-precision decimals with explicit rounding:
//! intermediate divisions are carried at 6 fractional digits and final results
//! are rounded to 2, both half-up.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use scaler::config::environment::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     scaler::server::run(config).await
//! }
//! ```

/// Server configuration loaded from the environment
pub mod config;
/// Application error types and the HTTP error body
pub mod errors;
/// Structured logging initialization
pub mod logging;
/// Measurements, scales, dimensions, and the request/response envelope
pub mod models;
/// HTTP route definitions
pub mod routes;
/// Router assembly and the serve loop
pub mod server;
/// The conversion engine
pub mod service;
