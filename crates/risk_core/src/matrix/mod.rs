//! Correlation-matrix container and validation.
//!
//! The matrix is stored as an owned flat row-major buffer with a
//! computed stride, giving bounds-checked access without the pointer
//! arithmetic of a raw 2D layout.
//!
//! Validation checks structure only (shape, symmetry, diagonal scale).
//! Positive semi-definiteness is deliberately not checked: a non-PSD
//! matrix passes validation and surfaces later as NaN entries in its
//! Cholesky factor (see [`cholesky`]).

pub mod cholesky;

pub use cholesky::{cholesky_factor, LowerTriangular};

use crate::types::ValidationError;

/// Absolute tolerance for the pairwise symmetry check.
pub const SYMMETRY_TOLERANCE: f64 = 1e-10;

/// Accepted range for diagonal entries.
pub const DIAGONAL_RANGE: (f64, f64) = (0.99, 1.01);

/// Owned square correlation matrix.
///
/// Indexed identically to the asset list it describes. Construction
/// only guarantees squareness; run [`validate_correlation`] before
/// feeding the matrix to the Cholesky factoriser.
///
/// # Examples
///
/// ```rust
/// use risk_core::matrix::CorrelationMatrix;
///
/// let corr = CorrelationMatrix::from_rows(vec![
///     vec![1.0, 0.3],
///     vec![0.3, 1.0],
/// ]).unwrap();
///
/// assert_eq!(corr.dim(), 2);
/// assert_eq!(corr.get(0, 1), 0.3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CorrelationMatrix {
    /// Flat row-major storage, `dim * dim` entries.
    data: Vec<f64>,
    /// Row count == column count == stride.
    dim: usize,
}

impl CorrelationMatrix {
    /// Builds a matrix from nested row vectors.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RaggedRows`] when any row's length
    /// differs from the row count.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        let dim = rows.len();
        let mut data = Vec::with_capacity(dim * dim);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(ValidationError::RaggedRows {
                    row: i,
                    got: row.len(),
                    expected: dim,
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self { data, dim })
    }

    /// Builds the `n`-dimensional identity matrix (all assets
    /// uncorrelated).
    pub fn identity(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self { data, dim: n }
    }

    /// Returns the matrix dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the entry at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.dim && j < self.dim, "matrix index out of bounds");
        self.data[i * self.dim + j]
    }

    /// Returns the matrix as nested row vectors (for serialisation at
    /// service boundaries).
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.dim)
            .map(|i| self.data[i * self.dim..(i + 1) * self.dim].to_vec())
            .collect()
    }
}

/// Validates a correlation matrix against an asset count.
///
/// Checks run in order and stop at the first violation:
/// 1. dimension equals `n_assets`
/// 2. symmetry within [`SYMMETRY_TOLERANCE`]
/// 3. every diagonal entry within [`DIAGONAL_RANGE`]
///
/// Positive semi-definiteness is not checked here.
///
/// # Errors
///
/// Returns the [`ValidationError`] variant naming the failed check.
pub fn validate_correlation(
    n_assets: usize,
    matrix: &CorrelationMatrix,
) -> Result<(), ValidationError> {
    if matrix.dim() != n_assets {
        return Err(ValidationError::DimensionMismatch {
            expected: n_assets,
            rows: matrix.dim(),
            cols: matrix.dim(),
        });
    }

    for i in 0..matrix.dim() {
        for j in 0..matrix.dim() {
            let upper = matrix.get(i, j);
            let lower = matrix.get(j, i);
            if (upper - lower).abs() > SYMMETRY_TOLERANCE {
                return Err(ValidationError::NotSymmetric {
                    i,
                    j,
                    upper,
                    lower,
                });
            }
        }

        let diag = matrix.get(i, i);
        if diag < DIAGONAL_RANGE.0 || diag > DIAGONAL_RANGE.1 {
            return Err(ValidationError::BadDiagonal { i, value: diag });
        }
    }

    Ok(())
}
