//! Drawing values out of an arbitrary outside of a property run.

use crate::arbitrary::Arbitrary;
use crate::random::ChaChaRandom;

/// Options of [`sample`]
#[derive(Debug, Clone)]
pub struct SampleConfig {
    /// Seed of the random stream; `None` seeds from entropy
    pub seed: Option<u64>,
    pub num_runs: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            seed: None,
            num_runs: 10,
        }
    }
}

impl SampleConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_num_runs(mut self, num_runs: usize) -> Self {
        self.num_runs = num_runs;
        self
    }
}

/// Generate `config.num_runs` values from a single random stream
pub fn sample<A: Arbitrary + ?Sized>(arbitrary: &A, config: &SampleConfig) -> Vec<A::Value> {
    let mut mrng = match config.seed {
        Some(seed) => ChaChaRandom::from_seed(seed),
        None => ChaChaRandom::from_entropy(),
    };
    log::debug!("Sampling {} values with seed {:?}", config.num_runs, config.seed);
    (0..config.num_runs)
        .map(|_| arbitrary.generate(&mut mrng).into_value())
        .collect()
}
