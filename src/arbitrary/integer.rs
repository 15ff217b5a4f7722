//! Bounded integers shrinking towards zero.

use super::{Arbitrary, BiasWrapper, BoxedArbitrary, ConfigurationError, Shrinkable};
use crate::random::Random;
use std::rc::Rc;

/// Integers drawn uniformly from `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerArbitrary {
    min: i64,
    max: i64,
}

pub fn integer(min: i64, max: i64) -> Result<IntegerArbitrary, ConfigurationError> {
    IntegerArbitrary::new(min, max)
}

impl IntegerArbitrary {
    pub fn new(min: i64, max: i64) -> Result<Self, ConfigurationError> {
        if min > max {
            return Err(ConfigurationError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Value shrinks converge to: zero clamped into the range
    pub fn target(&self) -> i64 {
        0i64.clamp(self.min, self.max)
    }

    /// Narrow range around the target, its width logarithmic in the full range
    fn biased_range(&self) -> IntegerArbitrary {
        let width = (i128::from(self.max) - i128::from(self.min)) as u128;
        let log = i128::from(128 - width.leading_zeros());
        let target = i128::from(self.target());
        let min = (target - log).max(i128::from(self.min));
        let max = (target + log).min(i128::from(self.max));
        // Both bounds were clamped into [self.min, self.max], so they fit in an i64.
        IntegerArbitrary {
            min: min as i64,
            max: max as i64,
        }
    }
}

fn shrink_towards(value: i64, target: i64) -> Shrinkable<i64> {
    Shrinkable::with_shrinks(value, move || {
        let gap = i128::from(value) - i128::from(target);
        std::iter::successors(Some(gap), |delta| Some(delta / 2))
            .take_while(|delta| *delta != 0)
            .map(move |delta| shrink_towards((i128::from(value) - delta) as i64, target))
    })
}

impl Arbitrary for IntegerArbitrary {
    type Value = i64;

    fn generate(&self, mrng: &mut dyn Random) -> Shrinkable<i64> {
        let value = mrng.next_int(self.min, self.max);
        shrink_towards(value, self.target())
    }

    fn with_bias(&self, freq: u32) -> BoxedArbitrary<i64> {
        let biased = self.biased_range();
        if biased == *self {
            return Rc::new(*self);
        }
        BiasWrapper::wrap(freq, Rc::new(*self), Rc::new(biased))
    }
}
