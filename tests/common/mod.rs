//! Random source shared by the integration tests.

use conjecture_arbitrary::Random;

enum Answer {
    LowerBound,
    Fixed(i64),
    Modulo(u64),
}

/// Answers every draw by a fixed rule and records the requested ranges
pub struct ScriptedRandom {
    answer: Answer,
    pub calls: Vec<(i64, i64)>,
}

#[allow(dead_code)]
impl ScriptedRandom {
    fn with_answer(answer: Answer) -> Self {
        Self {
            answer,
            calls: Vec::new(),
        }
    }

    pub fn lower_bound() -> Self {
        Self::with_answer(Answer::LowerBound)
    }

    /// Answers `value` whatever the range
    pub fn fixed(value: i64) -> Self {
        Self::with_answer(Answer::Fixed(value))
    }

    /// Answers `min + seed % (max - min + 1)`
    pub fn modulo(seed: u64) -> Self {
        Self::with_answer(Answer::Modulo(seed))
    }
}

impl Random for ScriptedRandom {
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        self.calls.push((min, max));
        match self.answer {
            Answer::LowerBound => min,
            Answer::Fixed(value) => value,
            Answer::Modulo(seed) => {
                let span = (i128::from(max) - i128::from(min) + 1) as u128;
                (i128::from(min) + (u128::from(seed) % span) as i128) as i64
            }
        }
    }
}
