//! # Conjecture Arbitrary
//!
//! Weighted choice between arbitraries, with recursion bounded by depth.
//!
//! The [`arbitrary`] module provides the [`Arbitrary`](arbitrary::Arbitrary)
//! trait, a handful of building blocks (constants, integers, mapping,
//! filtering, forward references) and [`frequency`](fn@arbitrary::frequency),
//! which picks one of several weighted alternatives per generation. All
//! randomness flows through the [`Random`](random::Random) trait.

pub mod arbitrary;
pub mod random;
pub mod sample;

#[cfg(test)]
pub(crate) mod test_utils;

pub use arbitrary::{
    constant, frequency, frequency_with, integer, one_of, option, Arbitrary, ArbitraryExt,
    BoxedArbitrary, ConfigurationError, DepthContext, FrequencyArbitrary, FrequencyConfig,
    LazyArbitrary, OptionConfig, Shrinkable, WeightedArbitrary,
};
pub use random::{ChaChaRandom, Random};
pub use sample::{sample, SampleConfig};
