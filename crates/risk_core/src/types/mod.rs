//! Value types shared across the risk engine.
//!
//! This module provides:
//! - `PortfolioAsset`: one asset's weight, drift and volatility
//! - `RiskMetrics`: the output record of a simulation run
//! - `SimulationSummary`: descriptive statistics over trial returns
//! - `ValidationError`: the input-validation error taxonomy

mod asset;
mod metrics;

pub mod error;

pub use asset::{sample_portfolio, PortfolioAsset};
pub use error::ValidationError;
pub use metrics::{RiskMetrics, SimulationSummary};
