// ABOUTME: Server configuration loaded from environment variables
// ABOUTME: Provides bind address settings with sensible development defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-backed server configuration.

use anyhow::{Context, Result};
use std::env;

/// Default bind host when `HOST` is unset
const DEFAULT_HOST: &str = "127.0.0.1";
/// Default HTTP port when `HTTP_PORT` is unset
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// HTTP port
    pub http_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            http_port: DEFAULT_HTTP_PORT,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables (`HOST`, `HTTP_PORT`).
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_owned());

        let http_port = match env::var("HTTP_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("HTTP_PORT must be a port number, got {value:?}"))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        Ok(Self { host, http_port })
    }

    /// One-line summary for startup logging.
    pub fn summary(&self) -> String {
        format!("host={} http_port={}", self.host, self.http_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_local_development_values() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.http_port, 8080);
    }

    #[test]
    fn summary_names_both_fields() {
        let summary = ServerConfig::default().summary();
        assert!(summary.contains("host=127.0.0.1"));
        assert!(summary.contains("http_port=8080"));
    }
}
