//! Forward references for recursive arbitraries
//!
//! A recursive definition needs to mention the arbitrary being defined before
//! it exists. [`LazyArbitrary`] is an empty slot that can be placed inside the
//! definition and bound once the enclosing arbitrary has been built:
//!
//! ```
//! use conjecture_arbitrary::arbitrary::{
//!     constant, frequency_with, ArbitraryExt, FrequencyConfig, LazyArbitrary, WeightedArbitrary,
//! };
//!
//! let list = LazyArbitrary::<Vec<u8>>::new();
//! let arb = frequency_with(
//!     FrequencyConfig::default().with_max_depth(10),
//!     vec![
//!         WeightedArbitrary::new(1, constant(Vec::new())),
//!         WeightedArbitrary::new(3, list.clone().map(|mut tail| {
//!             tail.push(0);
//!             tail
//!         })),
//!     ],
//! )
//! .unwrap()
//! .boxed();
//! list.bind(&arb);
//! assert!(list.is_bound());
//! ```
//!
//! The slot keeps a weak reference, so a self-referential graph is released
//! as soon as the caller drops the outer arbitrary.
//!
//! Biased copies of the target are built on first use and shared by every
//! clone of the reference while they are alive, so a biased recursive
//! definition is rebuilt once per top-level generation rather than at every
//! level of the recursion.

use super::{Arbitrary, BoxedArbitrary, Shrinkable};
use crate::random::Random;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

type WeakArbitrary<T> = Weak<dyn Arbitrary<Value = T>>;

struct Slot<T> {
    target: Option<WeakArbitrary<T>>,
    biased: HashMap<u32, WeakArbitrary<T>>,
}

/// Arbitrary resolved on use from a slot bound after construction
pub struct LazyArbitrary<T> {
    slot: Rc<RefCell<Slot<T>>>,
    bias: Option<u32>,
}

impl<T: 'static> LazyArbitrary<T> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                target: None,
                biased: HashMap::new(),
            })),
            bias: None,
        }
    }

    /// Point every clone of this reference at `target`
    pub fn bind(&self, target: &BoxedArbitrary<T>) {
        let mut slot = self.slot.borrow_mut();
        if slot.target.is_some() {
            log::warn!("Rebinding a lazy arbitrary that was already bound");
        }
        slot.target = Some(Rc::downgrade(target));
        slot.biased.clear();
    }

    pub fn is_bound(&self) -> bool {
        self.resolve().is_some()
    }

    fn resolve(&self) -> Option<BoxedArbitrary<T>> {
        self.slot.borrow().target.as_ref().and_then(Weak::upgrade)
    }

    /// Biased copy of the target, reused while another user keeps it alive
    fn resolve_biased(&self, freq: u32) -> Option<BoxedArbitrary<T>> {
        let cached = self.slot.borrow().biased.get(&freq).and_then(Weak::upgrade);
        if cached.is_some() {
            return cached;
        }
        let biased = self.resolve()?.with_bias(freq);
        self.slot
            .borrow_mut()
            .biased
            .insert(freq, Rc::downgrade(&biased));
        Some(biased)
    }
}

impl<T: 'static> Default for LazyArbitrary<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for LazyArbitrary<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
            bias: self.bias,
        }
    }
}

impl<T> fmt::Debug for LazyArbitrary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyArbitrary")
            .field("bound", &self.slot.borrow().target.is_some())
            .field("bias", &self.bias)
            .finish()
    }
}

impl<T: 'static> Arbitrary for LazyArbitrary<T> {
    type Value = T;

    /// # Panics
    ///
    /// Panics if the reference was never bound or its target was dropped.
    fn generate(&self, mrng: &mut dyn Random) -> Shrinkable<T> {
        let target = match self.bias {
            Some(freq) => self.resolve_biased(freq),
            None => self.resolve(),
        };
        match target {
            Some(target) => target.generate(mrng),
            None => panic!("lazy arbitrary generated before being bound to a live arbitrary"),
        }
    }

    /// Records the bias; the target is only biased when generating, so a
    /// recursive definition is never expanded eagerly.
    fn with_bias(&self, freq: u32) -> BoxedArbitrary<T> {
        Rc::new(LazyArbitrary {
            slot: Rc::clone(&self.slot),
            bias: Some(freq),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arbitrary::{
        constant, frequency_with, ArbitraryExt, FrequencyConfig, WeightedArbitrary,
    };
    use crate::random::ChaChaRandom;
    use crate::test_utils::ScriptedRandom;
    use std::cell::Cell;

    /// Counts bias requests and yields "0"
    struct BiasCounter {
        calls: Rc<Cell<u32>>,
    }

    impl Arbitrary for BiasCounter {
        type Value = String;

        fn generate(&self, _mrng: &mut dyn Random) -> Shrinkable<String> {
            Shrinkable::new("0".to_string())
        }

        fn with_bias(&self, _freq: u32) -> BoxedArbitrary<String> {
            self.calls.set(self.calls.get() + 1);
            Rc::new(BiasCounter {
                calls: Rc::clone(&self.calls),
            })
        }
    }

    #[test]
    fn test_resolves_after_binding() {
        let lazy = LazyArbitrary::<i32>::new();
        assert!(!lazy.is_bound());
        let target = constant(7).boxed();
        lazy.clone().bind(&target);
        assert!(lazy.is_bound());
        let mut mrng = ChaChaRandom::from_seed(0);
        assert_eq!(lazy.generate(&mut mrng).value, 7);
    }

    #[test]
    fn test_weak_reference_released_with_target() {
        let lazy = LazyArbitrary::<i32>::new();
        {
            let target = constant(1).boxed();
            lazy.bind(&target);
            assert!(lazy.is_bound());
        }
        assert!(!lazy.is_bound());
    }

    #[test]
    #[should_panic(expected = "before being bound")]
    fn test_unbound_generation_panics() {
        let lazy = LazyArbitrary::<i32>::new();
        let mut mrng = ChaChaRandom::from_seed(0);
        let _ = lazy.generate(&mut mrng);
    }

    #[test]
    fn test_bias_is_deferred_until_generation() {
        let lazy = LazyArbitrary::<i32>::new();
        let biased = lazy.with_bias(3);
        let target = constant(5).boxed();
        lazy.bind(&target);
        let mut mrng = ChaChaRandom::from_seed(0);
        assert_eq!(biased.generate(&mut mrng).value, 5);
    }

    #[test]
    fn test_biased_target_is_built_once_per_generation() {
        let calls = Rc::new(Cell::new(0));
        let recursive = LazyArbitrary::<String>::new();
        let arb: BoxedArbitrary<String> = frequency_with(
            FrequencyConfig::default().with_max_depth(4),
            vec![
                WeightedArbitrary::new(0, BiasCounter { calls: Rc::clone(&calls) }),
                WeightedArbitrary::new(1, recursive.clone().map(|inner| format!("[{}]", inner))),
            ],
        )
        .unwrap()
        .boxed();
        recursive.bind(&arb);

        let mut mrng = ScriptedRandom::lower_bound();
        let value = arb.with_bias(2).generate(&mut mrng).value;

        assert_eq!(value, "[[[[0]]]]");
        // once for the outer call, once when the reference first resolves
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_rebinding_discards_biased_copies() {
        let lazy = LazyArbitrary::<i32>::new();
        let biased = lazy.with_bias(2);
        let first = constant(1).boxed();
        lazy.bind(&first);
        let mut mrng = ChaChaRandom::from_seed(0);
        assert_eq!(biased.generate(&mut mrng).value, 1);
        let second = constant(2).boxed();
        lazy.bind(&second);
        assert_eq!(biased.generate(&mut mrng).value, 2);
    }
}
