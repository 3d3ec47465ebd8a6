//! The engine aggregate root.
//!
//! A `RiskEngine` owns one portfolio, one correlation matrix and one
//! simulation configuration. It is a transient compute object:
//! constructed per risk query, mutated in place for reruns, never
//! persisted.
//!
//! Every input is validated eagerly at construction or mutation time;
//! `run_simulation` itself cannot fail. The one numerical caveat is a
//! structurally valid but non-positive-semi-definite correlation
//! matrix, which yields NaN-valued metric fields rather than an error
//! (callers must detect this themselves).

use risk_core::matrix::{cholesky_factor, validate_correlation, CorrelationMatrix};
use risk_core::types::{PortfolioAsset, RiskMetrics, ValidationError};

use crate::config::SimulationConfig;
use crate::error::EngineError;
use crate::metrics::{
    conditional_value_at_risk, expected_portfolio_return, portfolio_volatility, value_at_risk,
};
use crate::runner::{run_trials, RunnerConfig};
use crate::sampler::ReturnSampler;

/// Confidence levels reported in every metrics record.
const CONFIDENCE_LEVELS: (f64, f64) = (0.95, 0.99);

/// Monte Carlo risk engine for a portfolio of correlated assets.
///
/// # Examples
///
/// ```rust
/// use risk_core::matrix::CorrelationMatrix;
/// use risk_core::types::PortfolioAsset;
/// use risk_mc::{RiskEngine, SimulationConfig};
///
/// let assets = vec![PortfolioAsset::new("A", 1.0, 0.10, 0.20)];
/// let corr = CorrelationMatrix::identity(1);
/// let config = SimulationConfig::builder()
///     .num_simulations(5_000)
///     .build()
///     .unwrap();
///
/// let mut engine = RiskEngine::new(assets, corr, config).unwrap();
/// let metrics = engine.run_simulation();
/// assert!(metrics.var_95.is_finite());
///
/// // Rerun with a different trial count on the same engine.
/// engine.set_num_simulations(2_000).unwrap();
/// let rerun = engine.run_simulation();
/// assert_eq!(rerun.simulation_results.len(), 2_000);
/// ```
pub struct RiskEngine {
    portfolio: Vec<PortfolioAsset>,
    correlation: CorrelationMatrix,
    config: SimulationConfig,
    runner: RunnerConfig,
}

impl RiskEngine {
    /// Creates an engine, validating every input eagerly.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` when the portfolio is empty, the
    /// configuration is out of range, or the correlation matrix fails
    /// the structural checks (dimension, symmetry, diagonal scale).
    pub fn new(
        portfolio: Vec<PortfolioAsset>,
        correlation: CorrelationMatrix,
        config: SimulationConfig,
    ) -> Result<Self, EngineError> {
        if portfolio.is_empty() {
            return Err(ValidationError::EmptyPortfolio.into());
        }
        config.validate()?;
        validate_correlation(portfolio.len(), &correlation)?;

        Ok(Self {
            portfolio,
            correlation,
            config,
            runner: RunnerConfig::default(),
        })
    }

    /// Creates an engine with the default configuration (100 000
    /// trials over one trading day).
    pub fn with_defaults(
        portfolio: Vec<PortfolioAsset>,
        correlation: CorrelationMatrix,
    ) -> Result<Self, EngineError> {
        Self::new(portfolio, correlation, SimulationConfig::default())
    }

    /// Returns the current trial count.
    #[inline]
    pub fn num_simulations(&self) -> usize {
        self.config.num_simulations()
    }

    /// Returns the current horizon in years.
    #[inline]
    pub fn time_horizon(&self) -> f64 {
        self.config.time_horizon()
    }

    /// Returns the number of assets in the portfolio.
    #[inline]
    pub fn n_assets(&self) -> usize {
        self.portfolio.len()
    }

    /// Overrides the worker count used for the parallel region.
    ///
    /// Defaults to the available hardware parallelism; primarily
    /// useful for benchmarking scaling behaviour.
    pub fn set_runner(&mut self, runner: RunnerConfig) {
        self.runner = runner;
    }

    /// Sets the trial count for subsequent runs.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` (and leaves the engine unchanged) when
    /// `num_simulations` is zero.
    pub fn set_num_simulations(&mut self, num_simulations: usize) -> Result<(), EngineError> {
        self.config = self.config.with_num_simulations(num_simulations)?;
        Ok(())
    }

    /// Sets the time horizon for subsequent runs.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` (and leaves the engine unchanged) when
    /// `time_horizon` is not strictly positive.
    pub fn set_time_horizon(&mut self, time_horizon: f64) -> Result<(), EngineError> {
        self.config = self.config.with_time_horizon(time_horizon)?;
        Ok(())
    }

    /// Replaces the portfolio.
    ///
    /// The correlation matrix is not re-checked here. A caller
    /// changing the asset count must supply a matching matrix via
    /// [`update_correlation_matrix`](Self::update_correlation_matrix)
    /// before the next run; the sampler asserts that the dimensions
    /// agree.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` when `assets` is empty.
    pub fn update_portfolio(&mut self, assets: Vec<PortfolioAsset>) -> Result<(), EngineError> {
        if assets.is_empty() {
            return Err(ValidationError::EmptyPortfolio.into());
        }
        self.portfolio = assets;
        Ok(())
    }

    /// Replaces the correlation matrix.
    ///
    /// Only the dimension is re-checked against the current asset
    /// count; the structural checks ran at construction and the
    /// replacement path mirrors that contract.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` when the dimensions no longer match the
    /// portfolio.
    pub fn update_correlation_matrix(
        &mut self,
        correlation: CorrelationMatrix,
    ) -> Result<(), EngineError> {
        if correlation.dim() != self.portfolio.len() {
            return Err(ValidationError::DimensionMismatch {
                expected: self.portfolio.len(),
                rows: correlation.dim(),
                cols: correlation.dim(),
            }
            .into());
        }
        self.correlation = correlation;
        Ok(())
    }

    /// Runs the full simulation and returns the metrics record.
    ///
    /// Synchronous and repeatable: each call factorises the matrix
    /// once, fans the trials out across the worker pool, then
    /// aggregates sequentially. Results are freshly allocated per call
    /// and never shared with later runs.
    pub fn run_simulation(&self) -> RiskMetrics {
        let factor = cholesky_factor(&self.correlation);

        let expected_return = expected_portfolio_return(&self.portfolio);
        let portfolio_vol = portfolio_volatility(&self.portfolio, &self.correlation);

        let sampler = ReturnSampler::new(&factor, &self.portfolio, self.config.time_horizon());
        let portfolio_returns = run_trials(&sampler, self.config.num_simulations(), self.runner);

        // VaR sorts a scratch copy; CVaR scans the original order.
        let mut sorted = portfolio_returns.clone();
        let var_95 = value_at_risk(&mut sorted, CONFIDENCE_LEVELS.0);
        let var_99 = value_at_risk(&mut sorted, CONFIDENCE_LEVELS.1);

        let cvar_95 = conditional_value_at_risk(&portfolio_returns, var_95);
        let cvar_99 = conditional_value_at_risk(&portfolio_returns, var_99);

        RiskMetrics {
            var_95,
            var_99,
            cvar_95,
            cvar_99,
            expected_return,
            portfolio_vol,
            simulation_results: portfolio_returns,
        }
    }
}
