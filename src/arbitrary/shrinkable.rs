//! Generated values together with their lazily computed shrink candidates.

use std::fmt;
use std::rc::Rc;

type ShrinkFn<T> = Rc<dyn Fn() -> Box<dyn Iterator<Item = Shrinkable<T>>>>;

/// A generated value and the recipe for producing smaller candidates.
///
/// Shrinks are only computed when [`Shrinkable::shrink`] is called, and each
/// candidate carries its own shrinks, forming a lazy tree.
pub struct Shrinkable<T> {
    pub value: T,
    shrinks: ShrinkFn<T>,
}

impl<T: 'static> Shrinkable<T> {
    /// A value that cannot be shrunk any further
    pub fn new(value: T) -> Self {
        Self {
            value,
            shrinks: Rc::new(|| -> Box<dyn Iterator<Item = Shrinkable<T>>> {
                Box::new(std::iter::empty())
            }),
        }
    }

    pub fn with_shrinks<F, I>(value: T, shrinks: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: Iterator<Item = Shrinkable<T>> + 'static,
    {
        Self {
            value,
            shrinks: Rc::new(move || -> Box<dyn Iterator<Item = Shrinkable<T>>> {
                Box::new(shrinks())
            }),
        }
    }

    pub fn shrink(&self) -> Box<dyn Iterator<Item = Shrinkable<T>>> {
        (self.shrinks)()
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Drop the shrink tree, keeping only the value
    pub fn without_shrinks(self) -> Self {
        Self::new(self.value)
    }

    pub fn map<U: 'static>(self, mapper: Rc<dyn Fn(T) -> U>) -> Shrinkable<U> {
        let shrinks = self.shrinks;
        let value = mapper(self.value);
        Shrinkable {
            value,
            shrinks: Rc::new(move || -> Box<dyn Iterator<Item = Shrinkable<U>>> {
                let mapper = Rc::clone(&mapper);
                Box::new(shrinks().map(move |s| s.map(Rc::clone(&mapper))))
            }),
        }
    }

    /// Restrict the shrink tree to candidates accepted by `predicate`.
    ///
    /// The root value itself is not checked.
    pub fn filter(self, predicate: Rc<dyn Fn(&T) -> bool>) -> Shrinkable<T> {
        let shrinks = self.shrinks;
        Shrinkable {
            value: self.value,
            shrinks: Rc::new(move || -> Box<dyn Iterator<Item = Shrinkable<T>>> {
                let predicate = Rc::clone(&predicate);
                let keep = Rc::clone(&predicate);
                Box::new(
                    shrinks()
                        .filter(move |s| keep(&s.value))
                        .map(move |s| s.filter(Rc::clone(&predicate))),
                )
            }),
        }
    }
}

impl<T: Clone> Clone for Shrinkable<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            shrinks: Rc::clone(&self.shrinks),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Shrinkable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shrinkable").field("value", &self.value).finish()
    }
}
