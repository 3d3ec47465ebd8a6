//! Risk-metric aggregation over simulated portfolio returns.
//!
//! Losses are reported as positive numbers throughout. VaR reads the
//! empirical percentile off the sorted return vector; CVaR averages
//! the tail beyond that threshold. The expected return and volatility
//! figures are closed-form companions computed from the inputs, never
//! from the simulated sample.

use risk_core::matrix::CorrelationMatrix;
use risk_core::types::PortfolioAsset;

/// Value-at-Risk at a confidence level.
///
/// Sorts `returns` ascending in place, reads the entry at
/// `floor((1 - confidence) * N)` (clamped to `N - 1`), and negates it
/// so that a loss is a positive figure. With very small `N` the index
/// degenerates to the extreme value; that is accepted behaviour.
///
/// NaN entries (from a non-positive-semi-definite correlation matrix)
/// order after every finite value and propagate into the result.
///
/// # Panics
///
/// Panics on an empty slice. The engine always supplies at least one
/// trial.
pub fn value_at_risk(returns: &mut [f64], confidence: f64) -> f64 {
    assert!(!returns.is_empty(), "returns cannot be empty");

    returns.sort_unstable_by(|a, b| a.total_cmp(b));

    let n = returns.len();
    let mut index = ((1.0 - confidence) * n as f64).floor() as usize;
    if index >= n {
        index = n - 1;
    }

    -returns[index]
}

/// Conditional Value-at-Risk (expected shortfall) given a VaR level.
///
/// Averages every return whose loss reaches the VaR threshold and
/// negates the mean. When no trial breaches the threshold the tail is
/// degenerate and CVaR equals VaR.
///
/// Input order is irrelevant; the engine passes the unsorted trial
/// vector.
///
/// # Panics
///
/// Panics on an empty slice.
pub fn conditional_value_at_risk(returns: &[f64], var: f64) -> f64 {
    assert!(!returns.is_empty(), "returns cannot be empty");

    let mut sum = 0.0;
    let mut count = 0usize;
    for &ret in returns {
        if -ret >= var {
            sum += ret;
            count += 1;
        }
    }

    if count == 0 {
        return var;
    }

    -(sum / count as f64)
}

/// Closed-form expected portfolio return: `Σ w[i] · mu[i]`.
pub fn expected_portfolio_return(assets: &[PortfolioAsset]) -> f64 {
    assets
        .iter()
        .map(|asset| asset.weight * asset.expected_return)
        .sum()
}

/// Closed-form annualised portfolio volatility:
/// `sqrt(Σ_i Σ_j w_i · w_j · vol_i · vol_j · corr[i][j])`.
///
/// An analytic sanity statistic computed alongside the simulation, not
/// derived from the sampled returns.
pub fn portfolio_volatility(assets: &[PortfolioAsset], correlation: &CorrelationMatrix) -> f64 {
    debug_assert_eq!(assets.len(), correlation.dim());

    let mut variance = 0.0;
    for (i, a) in assets.iter().enumerate() {
        for (j, b) in assets.iter().enumerate() {
            variance += a.weight * b.weight * a.volatility * b.volatility * correlation.get(i, j);
        }
    }
    variance.sqrt()
}
