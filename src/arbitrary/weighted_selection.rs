//! Weighted entries, their validation and cumulative-weight lookup
//!
//! Weights are plain integers. A list of entries is accepted when it is not
//! empty, holds no negative weight and sums to a strictly positive total.
//! Selection maps a draw `r` in `[0, total_weight)` to the first entry whose
//! cumulative interval contains `r`, so zero-weight entries are never selected
//! by a draw.

use super::{ArbitraryExt, BoxedArbitrary};
use std::fmt;
use thiserror::Error;

/// Errors raised while building an arbitrary from caller configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("expected at least one weighted arbitrary")]
    EmptyChoiceSet,
    #[error("weight {weight} of entry {index} must be greater than or equal to 0")]
    NegativeWeight { index: usize, weight: i64 },
    #[error("the sum of weights must be strictly greater than 0")]
    ZeroTotalWeight,
    #[error("the sum of weights overflows a 64-bit integer")]
    TotalWeightOverflow,
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
}

/// One alternative of a weighted choice
pub struct WeightedArbitrary<T> {
    pub weight: i64,
    pub arbitrary: BoxedArbitrary<T>,
}

impl<T: 'static> WeightedArbitrary<T> {
    pub fn new<A>(weight: i64, arbitrary: A) -> Self
    where
        A: ArbitraryExt<Value = T>,
    {
        Self {
            weight,
            arbitrary: arbitrary.boxed(),
        }
    }

    pub fn from_boxed(weight: i64, arbitrary: BoxedArbitrary<T>) -> Self {
        Self { weight, arbitrary }
    }
}

impl<T> Clone for WeightedArbitrary<T> {
    fn clone(&self) -> Self {
        Self {
            weight: self.weight,
            arbitrary: self.arbitrary.clone(),
        }
    }
}

impl<T> fmt::Debug for WeightedArbitrary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedArbitrary")
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

/// Check `weights` and return their total.
///
/// Rules are checked in order: emptiness, then negative weights (whatever
/// their position), then a zero total.
pub fn validate_weights<I>(weights: I) -> Result<i64, ConfigurationError>
where
    I: IntoIterator<Item = i64>,
{
    let mut count = 0usize;
    let mut total: Option<i64> = Some(0);
    for (index, weight) in weights.into_iter().enumerate() {
        count += 1;
        if weight < 0 {
            return Err(ConfigurationError::NegativeWeight { index, weight });
        }
        total = total.and_then(|t| t.checked_add(weight));
    }
    if count == 0 {
        return Err(ConfigurationError::EmptyChoiceSet);
    }
    match total {
        None => Err(ConfigurationError::TotalWeightOverflow),
        Some(0) => Err(ConfigurationError::ZeroTotalWeight),
        Some(total) => Ok(total),
    }
}

/// Exclusive upper bounds of each entry's interval, in entry order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativeWeights {
    upper_bounds: Vec<i64>,
}

impl CumulativeWeights {
    /// Build from weights already accepted by [`validate_weights`]
    pub fn new(weights: &[i64]) -> Self {
        let mut cumulative = 0i64;
        let upper_bounds = weights
            .iter()
            .map(|&weight| {
                cumulative += weight;
                cumulative
            })
            .collect();
        Self { upper_bounds }
    }

    pub fn total_weight(&self) -> i64 {
        self.upper_bounds.last().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.upper_bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upper_bounds.is_empty()
    }

    /// Index of the first entry whose interval contains `draw`.
    ///
    /// Returns `None` when `draw` lies outside `[0, total_weight)`.
    pub fn select(&self, draw: i64) -> Option<usize> {
        if draw < 0 || draw >= self.total_weight() {
            return None;
        }
        Some(self.upper_bounds.partition_point(|&upper| upper <= draw))
    }

    /// Probability of drawing entry `index`
    pub fn probability(&self, index: usize) -> f64 {
        let upper = match self.upper_bounds.get(index) {
            Some(&upper) => upper,
            None => return 0.0,
        };
        let lower = if index == 0 { 0 } else { self.upper_bounds[index - 1] };
        (upper - lower) as f64 / self.total_weight() as f64
    }
}
