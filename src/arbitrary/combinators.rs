//! Generic wrappers shared by every arbitrary: mapping, filtering and bias control.

use super::{Arbitrary, BoxedArbitrary, Shrinkable};
use crate::random::Random;
use std::rc::Rc;

/// Arbitrary whose values are transformed by a mapper
pub struct Map<A: Arbitrary, U> {
    inner: A,
    mapper: Rc<dyn Fn(A::Value) -> U>,
}

impl<A: Arbitrary, U: 'static> Map<A, U> {
    pub fn new<F>(inner: A, mapper: F) -> Self
    where
        F: Fn(A::Value) -> U + 'static,
    {
        Self {
            inner,
            mapper: Rc::new(mapper),
        }
    }
}

impl<A: Arbitrary, U: 'static> Arbitrary for Map<A, U> {
    type Value = U;

    fn generate(&self, mrng: &mut dyn Random) -> Shrinkable<U> {
        self.inner.generate(mrng).map(Rc::clone(&self.mapper))
    }

    fn with_bias(&self, freq: u32) -> BoxedArbitrary<U> {
        Rc::new(Map {
            inner: self.inner.with_bias(freq),
            mapper: Rc::clone(&self.mapper),
        })
    }
}

/// Arbitrary keeping only the values accepted by a predicate.
///
/// Generation retries until a value passes; a predicate that rejects every
/// value never returns.
pub struct Filter<A: Arbitrary> {
    inner: A,
    predicate: Rc<dyn Fn(&A::Value) -> bool>,
}

impl<A: Arbitrary> Filter<A> {
    pub fn new<F>(inner: A, predicate: F) -> Self
    where
        F: Fn(&A::Value) -> bool + 'static,
    {
        Self {
            inner,
            predicate: Rc::new(predicate),
        }
    }
}

impl<A: Arbitrary> Arbitrary for Filter<A> {
    type Value = A::Value;

    fn generate(&self, mrng: &mut dyn Random) -> Shrinkable<A::Value> {
        let mut rejected = 0u64;
        loop {
            let candidate = self.inner.generate(mrng);
            if (self.predicate)(&candidate.value) {
                if rejected > 0 {
                    log::trace!("Filter accepted a value after {} rejections", rejected);
                }
                return candidate.filter(Rc::clone(&self.predicate));
            }
            rejected += 1;
        }
    }

    fn with_bias(&self, freq: u32) -> BoxedArbitrary<A::Value> {
        Rc::new(Filter {
            inner: self.inner.with_bias(freq),
            predicate: Rc::clone(&self.predicate),
        })
    }
}

/// Arbitrary that ignores bias requests
pub struct NoBias<A> {
    inner: Rc<A>,
}

impl<A: Arbitrary + 'static> NoBias<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner: Rc::new(inner),
        }
    }
}

impl<A: Arbitrary + 'static> Arbitrary for NoBias<A> {
    type Value = A::Value;

    fn generate(&self, mrng: &mut dyn Random) -> Shrinkable<A::Value> {
        self.inner.generate(mrng)
    }

    fn with_bias(&self, _freq: u32) -> BoxedArbitrary<A::Value> {
        Rc::new(NoBias {
            inner: Rc::clone(&self.inner),
        })
    }
}

/// Arbitrary whose values never shrink
pub struct NoShrink<A> {
    inner: A,
}

impl<A: Arbitrary> NoShrink<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

impl<A: Arbitrary> Arbitrary for NoShrink<A> {
    type Value = A::Value;

    fn generate(&self, mrng: &mut dyn Random) -> Shrinkable<A::Value> {
        self.inner.generate(mrng).without_shrinks()
    }

    fn with_bias(&self, freq: u32) -> BoxedArbitrary<A::Value> {
        Rc::new(NoShrink {
            inner: self.inner.with_bias(freq),
        })
    }
}

/// Picks the biased variant once every `freq` generations on average
pub struct BiasWrapper<T> {
    freq: u32,
    unbiased: BoxedArbitrary<T>,
    biased: BoxedArbitrary<T>,
}

impl<T: 'static> BiasWrapper<T> {
    /// A `freq` of 0 disables the bias and returns `unbiased` untouched
    pub fn wrap(freq: u32, unbiased: BoxedArbitrary<T>, biased: BoxedArbitrary<T>) -> BoxedArbitrary<T> {
        if freq == 0 {
            return unbiased;
        }
        Rc::new(Self {
            freq,
            unbiased,
            biased,
        })
    }
}

impl<T: 'static> Arbitrary for BiasWrapper<T> {
    type Value = T;

    fn generate(&self, mrng: &mut dyn Random) -> Shrinkable<T> {
        if mrng.next_int(1, i64::from(self.freq)) == 1 {
            self.biased.generate(mrng)
        } else {
            self.unbiased.generate(mrng)
        }
    }

    fn with_bias(&self, _freq: u32) -> BoxedArbitrary<T> {
        Rc::new(BiasWrapper {
            freq: self.freq,
            unbiased: Rc::clone(&self.unbiased),
            biased: Rc::clone(&self.biased),
        })
    }
}
