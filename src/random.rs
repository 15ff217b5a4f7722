//! Uniform random sources consumed by arbitraries.
//!
//! Every arbitrary draws its randomness through the [`Random`] trait so that
//! tests can substitute a scripted source and observe exactly which draws were
//! made. [`ChaChaRandom`] is the default seeded implementation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed integers
pub trait Random {
    /// Draw an integer uniformly from the inclusive range `[min, max]`.
    ///
    /// Callers guarantee `min <= max`.
    fn next_int(&mut self, min: i64, max: i64) -> i64;
}

/// Random source backed by a ChaCha8 stream
#[derive(Debug, Clone)]
pub struct ChaChaRandom {
    rng: ChaCha8Rng,
}

impl ChaChaRandom {
    /// Deterministic source: the same seed always yields the same draws
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl Random for ChaChaRandom {
    /// # Panics
    ///
    /// Panics if `min > max`.
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        assert!(min <= max, "empty range [{}, {}] passed to next_int", min, max);
        if min == max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}
