//! # risk_mc: Monte Carlo VaR/CVaR Engine
//!
//! ## Layer 2 (Kernel) Role
//!
//! risk_mc estimates Value-at-Risk and Conditional Value-at-Risk for a
//! portfolio of correlated assets by simulating many correlated return
//! scenarios and summarising the loss distribution.
//!
//! This crate provides:
//! - Simulation configuration with eager validation (`config`)
//! - A seeded RNG wrapper and per-worker seeding (`rng`)
//! - Correlated single-step return sampling (`sampler`)
//! - Rayon-parallel trial execution over disjoint output slices (`runner`)
//! - Percentile/tail statistics and closed-form portfolio figures
//!   (`metrics`)
//! - The engine aggregate root (`engine`)
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               RiskEngine                    │
//! ├─────────────────────────────────────────────┤
//! │  validate inputs (construction/mutation)    │
//! │  cholesky_factor      - once per run        │
//! │  run_trials           - parallel region     │
//! │  value_at_risk / cvar - sequential          │
//! └─────────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────────┐
//! │                risk_core                    │
//! │  matrix container, validation, Cholesky     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use risk_core::matrix::CorrelationMatrix;
//! use risk_core::types::PortfolioAsset;
//! use risk_mc::{RiskEngine, SimulationConfig};
//!
//! let assets = vec![
//!     PortfolioAsset::new("A", 0.6, 0.12, 0.25),
//!     PortfolioAsset::new("B", 0.4, 0.10, 0.30),
//! ];
//! let corr = CorrelationMatrix::from_rows(vec![
//!     vec![1.0, 0.3],
//!     vec![0.3, 1.0],
//! ]).unwrap();
//!
//! let config = SimulationConfig::builder()
//!     .num_simulations(10_000)
//!     .time_horizon(1.0 / 252.0)
//!     .build()
//!     .unwrap();
//!
//! let engine = RiskEngine::new(assets, corr, config).unwrap();
//! let metrics = engine.run_simulation();
//!
//! assert_eq!(metrics.simulation_results.len(), 10_000);
//! assert!(metrics.var_99 >= metrics.var_95);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod rng;
pub mod runner;
pub mod sampler;

pub use config::{
    SimulationConfig, SimulationConfigBuilder, DEFAULT_NUM_SIMULATIONS, DEFAULT_TIME_HORIZON,
};
pub use engine::RiskEngine;
pub use error::EngineError;
pub use metrics::{
    conditional_value_at_risk, expected_portfolio_return, portfolio_volatility, value_at_risk,
};
pub use rng::{worker_seed, TrialRng};
pub use runner::{run_trials, RunnerConfig};
pub use sampler::ReturnSampler;
