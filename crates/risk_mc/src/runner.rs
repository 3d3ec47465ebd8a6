//! Parallel trial execution.
//!
//! Trials are embarrassingly parallel: the pre-sized output vector is
//! split into contiguous per-worker chunks, each worker owns an
//! independently seeded generator plus reusable scratch buffers, and
//! every worker writes only to its own chunk. No synchronisation
//! primitive is needed because no writer overlaps any reader: the
//! Cholesky factor and asset list are read-only for the whole region.

use rayon::prelude::*;

use crate::rng::{worker_seed, TrialRng};
use crate::sampler::ReturnSampler;

/// Configuration for the parallel trial runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Number of workers to partition the trial range across.
    workers: usize,
}

impl Default for RunnerConfig {
    /// Defaults to the available hardware parallelism.
    fn default() -> Self {
        Self {
            workers: num_cpus::get().max(1),
        }
    }
}

impl RunnerConfig {
    /// Creates a configuration with an explicit worker count.
    ///
    /// A count of zero is coerced to one.
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// Returns the worker count.
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }
}

/// Runs `num_simulations` independent trials and returns one portfolio
/// return per trial.
///
/// The output is populated in trial-index order regardless of worker
/// scheduling, since each chunk occupies a fixed index range.
///
/// # Examples
///
/// ```rust
/// use risk_core::matrix::{cholesky_factor, CorrelationMatrix};
/// use risk_core::types::PortfolioAsset;
/// use risk_mc::{run_trials, ReturnSampler, RunnerConfig};
///
/// let assets = vec![PortfolioAsset::new("A", 1.0, 0.10, 0.20)];
/// let factor = cholesky_factor(&CorrelationMatrix::identity(1));
/// let sampler = ReturnSampler::new(&factor, &assets, 1.0 / 252.0);
///
/// let returns = run_trials(&sampler, 1_000, RunnerConfig::default());
/// assert_eq!(returns.len(), 1_000);
/// ```
pub fn run_trials(
    sampler: &ReturnSampler<'_>,
    num_simulations: usize,
    config: RunnerConfig,
) -> Vec<f64> {
    let mut results = vec![0.0; num_simulations];
    if num_simulations == 0 {
        return results;
    }

    let workers = config.workers();
    let chunk_len = num_simulations.div_ceil(workers);

    results
        .par_chunks_mut(chunk_len)
        .enumerate()
        .for_each(|(worker_index, chunk)| {
            let mut rng = TrialRng::from_seed(worker_seed(worker_index));
            let n = sampler.n_assets();
            let mut z = vec![0.0; n];
            let mut asset_returns = vec![0.0; n];

            for slot in chunk.iter_mut() {
                sampler.sample_into(&mut rng, &mut z, &mut asset_returns);
                *slot = sampler.weighted_return(&asset_returns);
            }
        });

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_core::matrix::{cholesky_factor, CorrelationMatrix};
    use risk_core::types::PortfolioAsset;

    fn test_assets() -> Vec<PortfolioAsset> {
        vec![
            PortfolioAsset::new("A", 0.6, 0.10, 0.20),
            PortfolioAsset::new("B", 0.4, 0.08, 0.15),
        ]
    }

    #[test]
    fn test_output_length() {
        let assets = test_assets();
        let factor = cholesky_factor(&CorrelationMatrix::identity(2));
        let sampler = ReturnSampler::new(&factor, &assets, 1.0 / 252.0);

        for n in [1, 7, 1_000] {
            let returns = run_trials(&sampler, n, RunnerConfig::default());
            assert_eq!(returns.len(), n);
        }
    }

    #[test]
    fn test_every_slot_written() {
        // Zero volatility makes every trial deterministic, so any slot
        // left at its initial value would stand out.
        let assets = vec![PortfolioAsset::new("RiskFree", 1.0, 0.05, 0.0)];
        let factor = cholesky_factor(&CorrelationMatrix::identity(1));
        let horizon = 1.0 / 252.0;
        let sampler = ReturnSampler::new(&factor, &assets, horizon);

        let returns = run_trials(&sampler, 10_000, RunnerConfig::default());
        let expected = 0.05 * horizon;
        assert!(returns.iter().all(|&r| (r - expected).abs() < 1e-15));
    }

    #[test]
    fn test_more_workers_than_trials() {
        let assets = test_assets();
        let factor = cholesky_factor(&CorrelationMatrix::identity(2));
        let sampler = ReturnSampler::new(&factor, &assets, 1.0 / 252.0);

        let returns = run_trials(&sampler, 3, RunnerConfig::with_workers(16));
        assert_eq!(returns.len(), 3);
    }

    #[test]
    fn test_single_worker() {
        let assets = test_assets();
        let factor = cholesky_factor(&CorrelationMatrix::identity(2));
        let sampler = ReturnSampler::new(&factor, &assets, 1.0 / 252.0);

        let returns = run_trials(&sampler, 500, RunnerConfig::with_workers(1));
        assert_eq!(returns.len(), 500);
    }

    #[test]
    fn test_runner_config_coerces_zero_workers() {
        assert_eq!(RunnerConfig::with_workers(0).workers(), 1);
    }

    #[test]
    fn test_trial_returns_vary() {
        let assets = test_assets();
        let factor = cholesky_factor(&CorrelationMatrix::identity(2));
        let sampler = ReturnSampler::new(&factor, &assets, 1.0 / 252.0);

        let returns = run_trials(&sampler, 1_000, RunnerConfig::default());
        let first = returns[0];
        assert!(returns.iter().any(|&r| r != first));
    }
}
