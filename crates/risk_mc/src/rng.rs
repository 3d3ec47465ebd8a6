//! Pseudo-random number generation for simulation trials.
//!
//! This module provides [`TrialRng`], a seeded PRNG wrapper with batch
//! normal sampling, and [`worker_seed`], the per-worker seed
//! derivation used by the parallel runner.

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Trial random number generator.
///
/// Wraps a seeded [`StdRng`] with batch operations for standard-normal
/// sampling. The same seed always produces the same sequence, which
/// the sampler and runner tests rely on; the engine itself derives
/// seeds from process entropy and is not reproducible across runs.
///
/// # Examples
///
/// ```rust
/// use risk_mc::TrialRng;
///
/// let mut rng = TrialRng::from_seed(42);
/// let mut buffer = vec![0.0; 16];
/// rng.fill_normal(&mut buffer);
/// ```
pub struct TrialRng {
    inner: StdRng,
    seed: u64,
}

impl TrialRng {
    /// Creates a generator initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single standard-normal variate.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with standard-normal variates.
    ///
    /// Zero-allocation; the buffer must be pre-allocated by the
    /// caller.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}

/// Derives the seed for one simulation worker.
///
/// Each worker draws from the process entropy source and offsets the
/// draw by its worker index, so no two workers of one run share a
/// stream. Seeds produced this way can collide across runs or
/// correlate in principle; the scheme is retained because replacing it
/// with a splittable generator would change the output distribution of
/// existing deployments.
#[inline]
pub fn worker_seed(worker_index: usize) -> u64 {
    let entropy: u64 = OsRng.gen();
    entropy.wrapping_add(worker_index as u64)
}
