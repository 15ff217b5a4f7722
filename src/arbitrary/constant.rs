use super::{Arbitrary, BoxedArbitrary, Shrinkable};
use crate::random::Random;
use std::rc::Rc;

/// Always yields the same value, without consuming randomness
#[derive(Debug, Clone)]
pub struct ConstantArbitrary<T> {
    value: T,
}

pub fn constant<T: Clone + 'static>(value: T) -> ConstantArbitrary<T> {
    ConstantArbitrary { value }
}

impl<T: Clone + 'static> Arbitrary for ConstantArbitrary<T> {
    type Value = T;

    fn generate(&self, _mrng: &mut dyn Random) -> Shrinkable<T> {
        Shrinkable::new(self.value.clone())
    }

    fn with_bias(&self, _freq: u32) -> BoxedArbitrary<T> {
        Rc::new(self.clone())
    }
}
