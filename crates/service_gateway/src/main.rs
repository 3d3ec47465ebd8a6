//! Risk Gateway - REST API for the Monte Carlo Risk Engine
//!
//! This is the production integration point for the risk engine
//! library.
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate exposes the
//! engine over the network; the engine itself stays a synchronous
//! library call and heavy runs are pushed onto the blocking pool.
//!
//! # Endpoints
//!
//! - `POST /api/v1/risk` - Run a full VaR/CVaR calculation
//! - `GET /api/v1/sample-portfolio` - Fixture portfolio for testing
//! - `GET /api/v1/health` - Health check

use std::net::SocketAddr;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod rest;

pub use error::ServerError;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting Risk Gateway...");

    // Load configuration
    let config = config::ServerConfig::from_env()?;
    let addr: SocketAddr = config.rest_addr.parse()?;

    info!("Configuration loaded");
    info!("  REST address: {}", addr);

    let app = rest::create_router();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
