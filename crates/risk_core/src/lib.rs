//! # risk_core: Foundation for the Monte Carlo Risk Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! risk_core is the bottom layer of the workspace, providing:
//! - Portfolio value types: `PortfolioAsset`, `RiskMetrics` (`types`)
//! - Error types: `ValidationError` (`types::error`)
//! - Correlation-matrix container and validation (`matrix`)
//! - Cholesky factorisation for correlated sampling (`matrix::cholesky`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal
//! external dependencies:
//! - thiserror: Structured error derivation
//! - serde: Serialisation of the value types
//!
//! ## Usage Examples
//!
//! ```rust
//! use risk_core::matrix::{cholesky_factor, CorrelationMatrix};
//! use risk_core::types::PortfolioAsset;
//!
//! let corr = CorrelationMatrix::from_rows(vec![
//!     vec![1.0, 0.3],
//!     vec![0.3, 1.0],
//! ]).unwrap();
//!
//! let factor = cholesky_factor(&corr);
//! assert!((factor.get(0, 0) - 1.0).abs() < 1e-12);
//!
//! let asset = PortfolioAsset::new("AAPL", 0.6, 0.12, 0.25);
//! assert_eq!(asset.name, "AAPL");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod matrix;
pub mod types;

pub use matrix::{cholesky_factor, validate_correlation, CorrelationMatrix, LowerTriangular};
pub use types::{
    sample_portfolio, PortfolioAsset, RiskMetrics, SimulationSummary, ValidationError,
};
