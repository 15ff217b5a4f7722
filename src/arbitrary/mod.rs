//! Arbitraries: composable descriptions of value spaces
//!
//! An [`Arbitrary`] produces a [`Shrinkable`] value from a [`Random`] source
//! and can hand out a bias-adjusted copy of itself. Every generator in this
//! crate (constants, integers, mapped and filtered values, forward references
//! and weighted choices) implements the same trait, so they nest freely,
//! including inside themselves.

pub mod combinators;
pub mod constant;
pub mod depth;
pub mod frequency;
pub mod integer;
pub mod lazy;
pub mod shrinkable;
pub mod weighted_selection;

pub use combinators::{BiasWrapper, Filter, Map, NoBias, NoShrink};
pub use constant::{constant, ConstantArbitrary};
pub use depth::DepthContext;
pub use frequency::{frequency, frequency_with, one_of, option, FrequencyArbitrary, FrequencyConfig, OptionConfig};
pub use integer::{integer, IntegerArbitrary};
pub use lazy::LazyArbitrary;
pub use shrinkable::Shrinkable;
pub use weighted_selection::{ConfigurationError, WeightedArbitrary};

use crate::random::Random;
use std::rc::Rc;

/// Shared, type-erased arbitrary
pub type BoxedArbitrary<T> = Rc<dyn Arbitrary<Value = T>>;

/// Core capability of every generator
pub trait Arbitrary {
    type Value: 'static;

    /// Generate one value, with its shrink tree, from `mrng`
    fn generate(&self, mrng: &mut dyn Random) -> Shrinkable<Self::Value>;

    /// Copy of this arbitrary skewed towards "interesting" values.
    ///
    /// `freq` is the inverse probability of applying the bias on a given
    /// generation; arbitraries without a notion of bias return an equivalent
    /// copy of themselves.
    fn with_bias(&self, freq: u32) -> BoxedArbitrary<Self::Value>;
}

impl<A: Arbitrary + ?Sized> Arbitrary for Rc<A> {
    type Value = A::Value;

    fn generate(&self, mrng: &mut dyn Random) -> Shrinkable<Self::Value> {
        (**self).generate(mrng)
    }

    fn with_bias(&self, freq: u32) -> BoxedArbitrary<Self::Value> {
        (**self).with_bias(freq)
    }
}

/// Combinators available on every sized arbitrary
pub trait ArbitraryExt: Arbitrary + Sized + 'static {
    fn map<U, F>(self, mapper: F) -> Map<Self, U>
    where
        U: 'static,
        F: Fn(Self::Value) -> U + 'static,
    {
        Map::new(self, mapper)
    }

    fn filter<F>(self, predicate: F) -> Filter<Self>
    where
        F: Fn(&Self::Value) -> bool + 'static,
    {
        Filter::new(self, predicate)
    }

    fn no_bias(self) -> NoBias<Self> {
        NoBias::new(self)
    }

    fn no_shrink(self) -> NoShrink<Self> {
        NoShrink::new(self)
    }

    fn boxed(self) -> BoxedArbitrary<Self::Value> {
        Rc::new(self)
    }
}

impl<A: Arbitrary + Sized + 'static> ArbitraryExt for A {}
