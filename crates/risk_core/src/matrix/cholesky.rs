//! Cholesky factorisation of correlation matrices.
//!
//! Implements the Cholesky–Banachiewicz recursion, producing the lower
//! triangular factor used to impose a correlation structure on
//! independent normal draws.
//!
//! A matrix that is not positive semi-definite drives an intermediate
//! diagonal term negative; the square root then yields NaN, which
//! propagates through the remaining rows and into any simulation that
//! consumes the factor. That behaviour is part of the contract:
//! structurally valid but non-PSD inputs produce NaN-contaminated
//! output instead of an error.

use super::CorrelationMatrix;

/// Lower triangular Cholesky factor `L` with `L·Lᵗ = M`.
///
/// Stored as a flat row-major buffer; entries above the diagonal are
/// identically zero and [`get`](Self::get) enforces `j <= i`.
#[derive(Clone, Debug, PartialEq)]
pub struct LowerTriangular {
    data: Vec<f64>,
    dim: usize,
}

impl LowerTriangular {
    /// Returns the factor dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns `L[i][j]` for `j <= i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds or `j > i`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.dim, "row index out of bounds");
        assert!(j <= i, "upper-triangular access on a lower triangular factor");
        self.data[i * self.dim + j]
    }

    /// Returns true if any stored entry is NaN (the signature of a
    /// non-positive-semi-definite input).
    pub fn is_contaminated(&self) -> bool {
        self.data.iter().any(|v| v.is_nan())
    }

    /// Recomputes `L·Lᵗ`, the matrix this factor was derived from.
    ///
    /// Intended for verification: the reconstruction should match the
    /// source matrix to high precision for well-conditioned inputs.
    pub fn reconstruct(&self) -> Vec<Vec<f64>> {
        let n = self.dim;
        let mut out = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in 0..n {
                let upto = i.min(j);
                let mut sum = 0.0;
                for k in 0..=upto {
                    sum += self.data[i * n + k] * self.data[j * n + k];
                }
                out[i][j] = sum;
            }
        }
        out
    }
}

/// Factorises a correlation matrix into its lower triangular Cholesky
/// factor.
///
/// Uses the row-by-row Banachiewicz recursion: for row `i`, the
/// diagonal is `sqrt(M[i][i] - Σ_{k<i} L[i][k]²)` and each
/// sub-diagonal entry is `(M[i][j] - Σ_{k<j} L[i][k]·L[j][k]) / L[j][j]`.
///
/// Non-PSD inputs are not rejected; they yield NaN entries (see module
/// docs).
///
/// # Examples
///
/// ```rust
/// use risk_core::matrix::{cholesky_factor, CorrelationMatrix};
///
/// let corr = CorrelationMatrix::from_rows(vec![
///     vec![1.0, 0.3],
///     vec![0.3, 1.0],
/// ]).unwrap();
///
/// let factor = cholesky_factor(&corr);
/// assert!((factor.get(1, 0) - 0.3).abs() < 1e-12);
/// ```
pub fn cholesky_factor(matrix: &CorrelationMatrix) -> LowerTriangular {
    let n = matrix.dim();
    let mut data = vec![0.0; n * n];

    for i in 0..n {
        for j in 0..=i {
            if j == i {
                let mut sum = 0.0;
                for k in 0..j {
                    sum += data[j * n + k] * data[j * n + k];
                }
                data[j * n + j] = (matrix.get(j, j) - sum).sqrt();
            } else {
                let mut sum = 0.0;
                for k in 0..j {
                    sum += data[i * n + k] * data[j * n + k];
                }
                data[i * n + j] = (matrix.get(i, j) - sum) / data[j * n + j];
            }
        }
    }

    LowerTriangular { data, dim: n }
}
