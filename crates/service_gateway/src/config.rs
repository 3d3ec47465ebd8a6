//! Gateway configuration.

use anyhow::Result;

/// Default bind address when `RISK_GATEWAY_ADDR` is unset.
const DEFAULT_REST_ADDR: &str = "0.0.0.0:8080";

/// Server configuration, read from the environment.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Socket address for the REST listener.
    pub rest_addr: String,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// - `RISK_GATEWAY_ADDR`: bind address (default `0.0.0.0:8080`)
    pub fn from_env() -> Result<Self> {
        let rest_addr = std::env::var("RISK_GATEWAY_ADDR")
            .unwrap_or_else(|_| DEFAULT_REST_ADDR.to_string());

        Ok(Self { rest_addr })
    }
}
