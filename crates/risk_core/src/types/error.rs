//! Error types for input validation.
//!
//! This module provides `ValidationError`, the taxonomy for every
//! synchronous input-rejection path: empty portfolios, matrix shape
//! mismatches, asymmetry, and mis-scaled diagonals. All variants are
//! raised at construction or mutation time, never mid-simulation.

use thiserror::Error;

/// Categorised input-validation errors.
///
/// Each variant names the failed check and carries enough context
/// (indices, offending values) to map directly onto a 4xx-style
/// response at a service boundary.
///
/// # Examples
///
/// ```
/// use risk_core::types::ValidationError;
///
/// let err = ValidationError::EmptyPortfolio;
/// assert_eq!(format!("{}", err), "Portfolio cannot be empty");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The portfolio contains no assets.
    #[error("Portfolio cannot be empty")]
    EmptyPortfolio,

    /// The matrix is not square or its size does not match the
    /// portfolio.
    #[error("Correlation matrix must be {expected}x{expected}, got {rows}x{cols}")]
    DimensionMismatch {
        /// Required dimension (the asset count).
        expected: usize,
        /// Row count supplied.
        rows: usize,
        /// Column count supplied.
        cols: usize,
    },

    /// The rows of a nested-vector matrix have differing lengths.
    #[error("Matrix row {row} has {got} entries, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Entries found in that row.
        got: usize,
        /// Entries required.
        expected: usize,
    },

    /// An off-diagonal pair differs beyond the symmetry tolerance.
    #[error("Correlation matrix must be symmetric: m[{i}][{j}] = {upper} but m[{j}][{i}] = {lower}")]
    NotSymmetric {
        /// Row index of the offending pair.
        i: usize,
        /// Column index of the offending pair.
        j: usize,
        /// Value above the diagonal.
        upper: f64,
        /// Value below the diagonal.
        lower: f64,
    },

    /// A diagonal entry is not (approximately) one.
    #[error("Diagonal elements of correlation matrix should be 1, got m[{i}][{i}] = {value}")]
    BadDiagonal {
        /// Index of the offending diagonal entry.
        i: usize,
        /// Offending value.
        value: f64,
    },
}
