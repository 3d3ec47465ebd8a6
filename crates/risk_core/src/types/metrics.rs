//! Simulation output records.

use serde::{Deserialize, Serialize};

/// Risk metrics produced by one simulation run.
///
/// Ownership transfers entirely to the caller; the engine keeps no
/// reference to a produced record, so repeated runs never alias.
///
/// All loss figures (`var_*`, `cvar_*`) are reported as positive
/// numbers. `expected_return` and `portfolio_vol` are closed-form
/// statistics computed alongside the simulation, not sampled from it.
///
/// `simulation_results` holds every trial's portfolio return and can be
/// large (one `f64` per trial); services may omit it from wire
/// responses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// 95% Value at Risk.
    pub var_95: f64,
    /// 99% Value at Risk.
    pub var_99: f64,
    /// 95% Conditional Value at Risk (expected shortfall).
    pub cvar_95: f64,
    /// 99% Conditional Value at Risk.
    pub cvar_99: f64,
    /// Closed-form expected portfolio return over one year.
    pub expected_return: f64,
    /// Closed-form annualised portfolio volatility.
    pub portfolio_vol: f64,
    /// Per-trial portfolio returns, one entry per simulation.
    pub simulation_results: Vec<f64>,
}

/// Descriptive statistics over the trial-return distribution.
///
/// Standard deviation is the population figure; kurtosis is excess
/// kurtosis (normal distribution scores zero). A degenerate
/// zero-spread sample reports zero for both shape moments.
///
/// # Examples
///
/// ```rust
/// use risk_core::types::SimulationSummary;
///
/// let summary = SimulationSummary::from_returns(&[0.01, -0.02, 0.005, 0.0]);
/// assert!(summary.min <= summary.mean && summary.mean <= summary.max);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Sample mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
    /// Smallest trial return.
    pub min: f64,
    /// Largest trial return.
    pub max: f64,
    /// Third standardised moment.
    pub skewness: f64,
    /// Fourth standardised moment minus three.
    pub kurtosis: f64,
}

impl SimulationSummary {
    /// Computes summary statistics over a slice of trial returns.
    ///
    /// An empty slice yields the all-zero summary.
    pub fn from_returns(returns: &[f64]) -> Self {
        if returns.is_empty() {
            return Self::default();
        }

        let n = returns.len() as f64;
        let mean = returns.iter().sum::<f64>() / n;
        let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
        let std = variance.sqrt();

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &r in returns {
            min = min.min(r);
            max = max.max(r);
        }

        let (skewness, kurtosis) = if std == 0.0 {
            (0.0, 0.0)
        } else {
            let m3 = returns.iter().map(|r| ((r - mean) / std).powi(3)).sum::<f64>() / n;
            let m4 = returns.iter().map(|r| ((r - mean) / std).powi(4)).sum::<f64>() / n;
            (m3, m4 - 3.0)
        };

        Self {
            mean,
            std,
            min,
            max,
            skewness,
            kurtosis,
        }
    }
}
