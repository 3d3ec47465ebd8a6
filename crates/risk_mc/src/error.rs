//! Error types for the simulation engine.
//!
//! All variants are raised synchronously at construction or mutation
//! time; the simulation itself has no failure path. Numerical
//! contamination from a non-positive-semi-definite correlation matrix
//! is not an error: it propagates as NaN fields in the output record.

use risk_core::types::ValidationError;
use thiserror::Error;

/// Errors from engine construction and mutation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Simulation count must be strictly positive.
    #[error("Number of simulations must be positive, got {0}")]
    InvalidSimulationCount(usize),

    /// Time horizon must be strictly positive.
    #[error("Time horizon must be positive, got {0}")]
    InvalidTimeHorizon(f64),

    /// Portfolio or correlation-matrix validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
