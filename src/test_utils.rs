//! Random sources shared by the unit tests.

use crate::random::Random;

/// Returns scripted draws in order, then the lower bound, and records every call
pub struct ScriptedRandom {
    draws: Vec<i64>,
    pub calls: Vec<(i64, i64)>,
}

impl ScriptedRandom {
    pub fn new(draws: Vec<i64>) -> Self {
        Self {
            draws,
            calls: Vec::new(),
        }
    }

    /// Answers the lower bound of every range
    pub fn lower_bound() -> Self {
        Self::new(Vec::new())
    }
}

impl Random for ScriptedRandom {
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        self.calls.push((min, max));
        let draw = self.draws.get(self.calls.len() - 1).copied().unwrap_or(min);
        assert!(min <= draw && draw <= max, "scripted draw {} outside [{}, {}]", draw, min, max);
        draw
    }
}
