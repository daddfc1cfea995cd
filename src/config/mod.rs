// ABOUTME: Configuration module for the Scaler server
// ABOUTME: Environment-only configuration, no files
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server configuration. Everything comes from the environment.

/// Environment-backed server configuration
pub mod environment;
