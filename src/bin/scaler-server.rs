// ABOUTME: Server binary for the Scaler model railroad conversion API
// ABOUTME: Loads environment configuration, initializes logging, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Scaler Server Binary
//!
//! Starts the scale conversion HTTP API. Configuration comes from the
//! environment (`HOST`, `HTTP_PORT`, `RUST_LOG`, `LOG_FORMAT`), with
//! command-line overrides for the bind address.

use anyhow::Result;
use clap::Parser;
use scaler::config::environment::ServerConfig;
use scaler::{logging, server};
use tracing::info;

#[derive(Parser)]
#[command(name = "scaler-server")]
#[command(about = "Scaler - model railroad scale conversion API")]
struct Args {
    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Scaler API");
    info!("{}", config.summary());

    server::run(config).await
}
