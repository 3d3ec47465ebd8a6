//! Simulation configuration.
//!
//! This module provides the configuration type and builder for
//! Monte Carlo risk simulations, validated eagerly at build time.

use crate::error::EngineError;

/// Default number of trials per simulation run.
pub const DEFAULT_NUM_SIMULATIONS: usize = 100_000;

/// Default time horizon in years: one trading day.
pub const DEFAULT_TIME_HORIZON: f64 = 1.0 / 252.0;

/// Monte Carlo simulation configuration.
///
/// Immutable once built; the engine mutators replace whole fields and
/// re-run validation before committing.
///
/// # Examples
///
/// ```rust
/// use risk_mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .num_simulations(50_000)
///     .time_horizon(10.0 / 252.0)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.num_simulations(), 50_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Number of independent trials.
    num_simulations: usize,
    /// Forward-looking horizon in years (e.g. 1/252 for one trading
    /// day).
    time_horizon: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_simulations: DEFAULT_NUM_SIMULATIONS,
            time_horizon: DEFAULT_TIME_HORIZON,
        }
    }
}

impl SimulationConfig {
    /// Creates a configuration, validating both fields.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if `num_simulations` is zero or
    /// `time_horizon` is not strictly positive.
    pub fn new(num_simulations: usize, time_horizon: f64) -> Result<Self, EngineError> {
        let config = Self {
            num_simulations,
            time_horizon,
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of trials.
    #[inline]
    pub fn num_simulations(&self) -> usize {
        self.num_simulations
    }

    /// Returns the time horizon in years.
    #[inline]
    pub fn time_horizon(&self) -> f64 {
        self.time_horizon
    }

    /// Returns a copy with a new trial count, re-validated.
    pub fn with_num_simulations(self, num_simulations: usize) -> Result<Self, EngineError> {
        Self::new(num_simulations, self.time_horizon)
    }

    /// Returns a copy with a new horizon, re-validated.
    pub fn with_time_horizon(self, time_horizon: f64) -> Result<Self, EngineError> {
        Self::new(self.num_simulations, time_horizon)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if either field is out of range.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.num_simulations == 0 {
            return Err(EngineError::InvalidSimulationCount(self.num_simulations));
        }
        if self.time_horizon <= 0.0 {
            return Err(EngineError::InvalidTimeHorizon(self.time_horizon));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Unset fields fall back to the defaults (100 000 trials, one trading
/// day).
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulationConfigBuilder {
    num_simulations: Option<usize>,
    time_horizon: Option<f64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of trials.
    #[inline]
    pub fn num_simulations(mut self, num_simulations: usize) -> Self {
        self.num_simulations = Some(num_simulations);
        self
    }

    /// Sets the time horizon in years.
    #[inline]
    pub fn time_horizon(mut self, time_horizon: f64) -> Self {
        self.time_horizon = Some(time_horizon);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if a supplied field is out of range.
    pub fn build(self) -> Result<SimulationConfig, EngineError> {
        SimulationConfig::new(
            self.num_simulations.unwrap_or(DEFAULT_NUM_SIMULATIONS),
            self.time_horizon.unwrap_or(DEFAULT_TIME_HORIZON),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = SimulationConfig::default();
        assert_eq!(config.num_simulations(), 100_000);
        assert!((config.time_horizon() - 1.0 / 252.0).abs() < 1e-15);
    }

    #[test]
    fn test_builder_valid() {
        let config = SimulationConfig::builder()
            .num_simulations(5_000)
            .time_horizon(1.0)
            .build()
            .unwrap();
        assert_eq!(config.num_simulations(), 5_000);
        assert_eq!(config.time_horizon(), 1.0);
    }

    #[test]
    fn test_builder_defaults() {
        let config = SimulationConfig::builder().build().unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_zero_simulations_rejected() {
        let result = SimulationConfig::new(0, 1.0);
        assert!(matches!(result, Err(EngineError::InvalidSimulationCount(0))));
    }

    #[test]
    fn test_non_positive_horizon_rejected() {
        assert!(matches!(
            SimulationConfig::new(1_000, 0.0),
            Err(EngineError::InvalidTimeHorizon(_))
        ));
        assert!(matches!(
            SimulationConfig::new(1_000, -1.0),
            Err(EngineError::InvalidTimeHorizon(_))
        ));
    }

    #[test]
    fn test_with_num_simulations() {
        let config = SimulationConfig::default()
            .with_num_simulations(42)
            .unwrap();
        assert_eq!(config.num_simulations(), 42);
        assert!(SimulationConfig::default().with_num_simulations(0).is_err());
    }

    #[test]
    fn test_with_time_horizon() {
        let config = SimulationConfig::default().with_time_horizon(0.5).unwrap();
        assert_eq!(config.time_horizon(), 0.5);
        assert!(SimulationConfig::default().with_time_horizon(-0.1).is_err());
    }
}
