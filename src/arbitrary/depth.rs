//! Depth bookkeeping for recursive weighted choices.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Counter of the nested selections made through one weighted-choice definition.
///
/// Cloning the handle shares the counter. Each `FrequencyArbitrary` creates
/// its own context unless one is passed explicitly, so unrelated definitions
/// never observe each other's depth. The counter only ever grows.
#[derive(Clone, Default)]
pub struct DepthContext {
    depth: Rc<Cell<usize>>,
}

impl DepthContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Record one more nested selection and return the new depth
    pub fn increment(&self) -> usize {
        let next = self.depth.get().saturating_add(1);
        self.depth.set(next);
        next
    }

    /// Whether both handles point at the same counter
    pub fn shares_with(&self, other: &DepthContext) -> bool {
        Rc::ptr_eq(&self.depth, &other.depth)
    }
}

impl fmt::Debug for DepthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepthContext").field("depth", &self.depth()).finish()
    }
}
