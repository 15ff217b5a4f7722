//! Weighted choice between arbitraries with depth-bounded recursion
//!
//! A [`FrequencyArbitrary`] holds an ordered list of weighted alternatives.
//! Each generation draws a single integer in `[0, total_weight)` and delegates
//! to the alternative whose cumulative interval contains it.
//!
//! Recursive definitions (an alternative that refers back to the choice it
//! belongs to) are kept finite by `max_depth`: once the choice's own
//! [`DepthContext`] reaches the bound, the first alternative is generated
//! directly without drawing. The first alternative should therefore be the
//! base case of a recursive definition, whatever its weight.
//!
//! ```
//! use conjecture_arbitrary::arbitrary::{
//!     constant, frequency_with, Arbitrary, ArbitraryExt, FrequencyConfig, LazyArbitrary,
//!     WeightedArbitrary,
//! };
//! use conjecture_arbitrary::random::ChaChaRandom;
//!
//! let tree = LazyArbitrary::<String>::new();
//! let arb = frequency_with(
//!     FrequencyConfig::default().with_max_depth(3),
//!     vec![
//!         WeightedArbitrary::new(1, constant("leaf".to_string())),
//!         WeightedArbitrary::new(2, tree.clone().map(|t| format!("node({})", t))),
//!     ],
//! )
//! .unwrap()
//! .boxed();
//! tree.bind(&arb);
//!
//! let mut mrng = ChaChaRandom::from_seed(0);
//! let value = arb.generate(&mut mrng).value;
//! assert!(value.matches("node").count() <= 3);
//! ```

use super::weighted_selection::{validate_weights, CumulativeWeights};
use super::{
    constant, Arbitrary, ArbitraryExt, BoxedArbitrary, ConfigurationError, DepthContext, Shrinkable,
    WeightedArbitrary,
};
use crate::random::Random;
use log::{debug, trace};
use std::fmt;
use std::rc::Rc;

/// Construction options of a [`FrequencyArbitrary`]
#[derive(Debug, Clone, Default)]
pub struct FrequencyConfig {
    /// Maximal number of nested selections before the first entry is forced.
    /// `None` leaves recursion unbounded.
    pub max_depth: Option<usize>,

    /// Counter to share with other choices. `None` gives the choice a
    /// private counter.
    pub depth_context: Option<DepthContext>,
}

impl FrequencyConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_depth_context(mut self, depth_context: DepthContext) -> Self {
        self.depth_context = Some(depth_context);
        self
    }
}

/// Weighted choice between alternatives
pub struct FrequencyArbitrary<T> {
    entries: Vec<WeightedArbitrary<T>>,
    cumulative: CumulativeWeights,
    max_depth: Option<usize>,
    context: DepthContext,
}

/// Weighted choice with unbounded depth
pub fn frequency<T: 'static>(
    entries: Vec<WeightedArbitrary<T>>,
) -> Result<FrequencyArbitrary<T>, ConfigurationError> {
    FrequencyArbitrary::new(FrequencyConfig::default(), entries)
}

pub fn frequency_with<T: 'static>(
    config: FrequencyConfig,
    entries: Vec<WeightedArbitrary<T>>,
) -> Result<FrequencyArbitrary<T>, ConfigurationError> {
    FrequencyArbitrary::new(config, entries)
}

/// Uniform choice: every alternative gets a weight of 1
pub fn one_of<T: 'static>(
    arbitraries: Vec<BoxedArbitrary<T>>,
) -> Result<FrequencyArbitrary<T>, ConfigurationError> {
    let entries = arbitraries
        .into_iter()
        .map(|arbitrary| WeightedArbitrary::from_boxed(1, arbitrary))
        .collect();
    frequency(entries)
}

/// Construction options of [`option`]
#[derive(Debug, Clone)]
pub struct OptionConfig {
    /// Weight of `Some` against a weight of 1 for `None`
    pub freq: i64,
    pub max_depth: Option<usize>,
}

impl Default for OptionConfig {
    fn default() -> Self {
        Self {
            freq: 5,
            max_depth: None,
        }
    }
}

/// `None` or a value from `arbitrary`.
///
/// `None` is the first alternative, so it is what recursion falls back to
/// once `max_depth` is reached.
pub fn option<A>(
    arbitrary: A,
    config: OptionConfig,
) -> Result<FrequencyArbitrary<Option<A::Value>>, ConfigurationError>
where
    A: ArbitraryExt,
    A::Value: Clone,
{
    let mut frequency_config = FrequencyConfig::default();
    frequency_config.max_depth = config.max_depth;
    FrequencyArbitrary::new(
        frequency_config,
        vec![
            WeightedArbitrary::new(1, constant(None)),
            WeightedArbitrary::new(config.freq, arbitrary.map(Some)),
        ],
    )
}

impl<T: 'static> FrequencyArbitrary<T> {
    /// Validate `entries` and build the choice.
    ///
    /// Fails when `entries` is empty, holds a negative weight, or when all
    /// weights are zero. No randomness is involved.
    pub fn new(
        config: FrequencyConfig,
        entries: Vec<WeightedArbitrary<T>>,
    ) -> Result<Self, ConfigurationError> {
        let total_weight = validate_weights(entries.iter().map(|entry| entry.weight))?;
        let weights: Vec<i64> = entries.iter().map(|entry| entry.weight).collect();
        let cumulative = CumulativeWeights::new(&weights);

        debug!(
            "Created frequency arbitrary with {} entries, total weight {}, max depth {:?}",
            entries.len(),
            total_weight,
            config.max_depth
        );

        Ok(Self {
            entries,
            cumulative,
            max_depth: config.max_depth,
            context: config.depth_context.unwrap_or_default(),
        })
    }

    pub fn total_weight(&self) -> i64 {
        self.cumulative.total_weight()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: construction rejects empty choices
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Nested selections recorded so far by this choice's context
    pub fn depth(&self) -> usize {
        self.context.depth()
    }

    pub fn depth_context(&self) -> &DepthContext {
        &self.context
    }

    /// Probability of a draw selecting entry `index`
    pub fn probability(&self, index: usize) -> f64 {
        self.cumulative.probability(index)
    }

    /// Entry selected by `draw`, or `None` outside `[0, total_weight)`
    pub fn select_index(&self, draw: i64) -> Option<usize> {
        self.cumulative.select(draw)
    }

    fn must_generate_first(&self) -> bool {
        match self.max_depth {
            Some(max_depth) => self.context.depth() >= max_depth,
            None => false,
        }
    }
}

impl<T: 'static> Arbitrary for FrequencyArbitrary<T> {
    type Value = T;

    /// # Panics
    ///
    /// Panics if `mrng` returns a value outside the requested range.
    fn generate(&self, mrng: &mut dyn Random) -> Shrinkable<T> {
        if self.must_generate_first() {
            debug!(
                "Depth {} reached max depth {:?}, generating first entry",
                self.context.depth(),
                self.max_depth
            );
            return self.entries[0].arbitrary.generate(mrng);
        }

        let depth = self.context.increment();
        let draw = mrng.next_int(0, self.total_weight() - 1);
        let index = self.cumulative.select(draw).unwrap_or_else(|| {
            panic!(
                "random source returned {} outside of [0, {}]",
                draw,
                self.total_weight() - 1
            )
        });
        trace!("Depth {}: draw {} selected entry {}", depth, draw, index);

        self.entries[index].arbitrary.generate(mrng)
    }

    /// Bias every entry, keeping weights, max depth and the depth context.
    fn with_bias(&self, freq: u32) -> BoxedArbitrary<T> {
        let entries = self
            .entries
            .iter()
            .map(|entry| WeightedArbitrary::from_boxed(entry.weight, entry.arbitrary.with_bias(freq)))
            .collect();
        Rc::new(FrequencyArbitrary {
            entries,
            cumulative: self.cumulative.clone(),
            max_depth: self.max_depth,
            context: self.context.clone(),
        })
    }
}

impl<T> fmt::Debug for FrequencyArbitrary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrequencyArbitrary")
            .field("entries", &self.entries)
            .field("max_depth", &self.max_depth)
            .field("context", &self.context)
            .finish()
    }
}
