//! # Frequency Arbitrary Test Suite
//!
//! Laws of the weighted choice that must hold for any list of entries:
//! the single draw over `[0, total_weight - 1]`, the mapping from draw to
//! entry, the `max_depth = 0` short-circuit, and the construction rejections.

mod common;

use common::ScriptedRandom;
use conjecture_arbitrary::{
    constant, frequency, frequency_with, Arbitrary, ConfigurationError, FrequencyConfig,
    WeightedArbitrary,
};
use proptest::prelude::*;

/// `(weight, expected value)` pairs with at least one strictly positive weight
fn valid_inputs() -> impl Strategy<Value = Vec<(i64, i32)>> {
    let meta = (1i64..1_000_000, any::<i32>());
    (
        meta.clone(),
        prop::collection::vec(meta.clone(), 0..10),
        prop::collection::vec(meta, 0..10),
    )
        .prop_map(|(positive, mut heading, trailing)| {
            heading.push(positive);
            heading.extend(trailing);
            heading
        })
}

fn entries_of(inputs: &[(i64, i32)]) -> Vec<WeightedArbitrary<i32>> {
    inputs
        .iter()
        .map(|&(weight, value)| WeightedArbitrary::new(weight, constant(value)))
        .collect()
}

fn zero_entries(weights: &[i64]) -> Vec<WeightedArbitrary<i32>> {
    weights
        .iter()
        .map(|&weight| WeightedArbitrary::new(weight, constant(0)))
        .collect()
}

proptest! {
    /// One draw between 0 and the total weight (excluded) per generation.
    #[test]
    fn draws_once_over_total_weight(inputs in valid_inputs(), seed in any::<u64>()) {
        let arb = frequency(entries_of(&inputs)).unwrap();
        let total_weight: i64 = inputs.iter().map(|&(weight, _)| weight).sum();
        let mut mrng = ScriptedRandom::modulo(seed);

        arb.generate(&mut mrng);

        prop_assert_eq!(mrng.calls, vec![(0, total_weight - 1)]);
    }

    /// A draw inside an entry's interval yields that entry's value.
    #[test]
    fn draw_selects_matching_entry(
        inputs in valid_inputs(),
        selection_seed in any::<usize>(),
        generate_seed in any::<i64>(),
    ) {
        let selected = selection_seed % inputs.len();
        let (weight, expected) = inputs[selected];
        let weight_before: i64 = inputs[..selected].iter().map(|&(w, _)| w).sum();
        let arb = frequency(entries_of(&inputs)).unwrap();
        let mut mrng = ScriptedRandom::fixed(weight_before + generate_seed.rem_euclid(weight));

        prop_assert_eq!(arb.generate(&mut mrng).value, expected);
    }

    /// With a max depth of 0 the first entry is generated without any draw.
    #[test]
    fn max_depth_zero_generates_first_entry(inputs in valid_inputs()) {
        let config = FrequencyConfig::default().with_max_depth(0);
        let arb = frequency_with(config, entries_of(&inputs)).unwrap();

        let mut mrng = ScriptedRandom::lower_bound();

        prop_assert_eq!(arb.generate(&mut mrng).value, inputs[0].1);
        prop_assert!(mrng.calls.is_empty());
    }

    #[test]
    fn rejects_any_negative_weight(
        negative in i64::MIN..0,
        heading in prop::collection::vec(0i64..1_000_000, 0..10),
        trailing in prop::collection::vec(0i64..1_000_000, 0..10),
    ) {
        let mut weights = heading;
        weights.push(negative);
        weights.extend(trailing);
        let result = frequency(zero_entries(&weights));
        prop_assert!(
            matches!(result, Err(ConfigurationError::NegativeWeight { .. })),
            "expected a negative weight rejection"
        );
    }

    #[test]
    fn rejects_zero_total_weight(num_entries in 1usize..1000) {
        let result = frequency(zero_entries(&vec![0; num_entries]));
        prop_assert!(matches!(result, Err(ConfigurationError::ZeroTotalWeight)));
    }

    #[test]
    fn accepts_positive_total_without_negative_weights(
        positive in 1i64..1_000_000,
        heading in prop::collection::vec(0i64..1_000_000, 0..10),
        trailing in prop::collection::vec(0i64..1_000_000, 0..10),
    ) {
        let mut weights = heading;
        weights.push(positive);
        weights.extend(trailing);
        prop_assert!(frequency(zero_entries(&weights)).is_ok());
    }
}

#[test]
fn test_rejects_empty_entries() {
    assert_eq!(
        frequency(zero_entries(&[])).unwrap_err(),
        ConfigurationError::EmptyChoiceSet
    );
}

#[test]
fn test_rejects_total_weight_overflow() {
    assert_eq!(
        frequency(zero_entries(&[i64::MAX, i64::MAX])).unwrap_err(),
        ConfigurationError::TotalWeightOverflow
    );
}

#[test]
fn test_zero_weight_entries_are_never_drawn() {
    let arb = frequency(vec![
        WeightedArbitrary::new(2, constant("first")),
        WeightedArbitrary::new(0, constant("never")),
        WeightedArbitrary::new(3, constant("last")),
    ])
    .unwrap();
    let expected = ["first", "first", "last", "last", "last"];
    for (draw, value) in expected.iter().enumerate() {
        let mut mrng = ScriptedRandom::fixed(draw as i64);
        assert_eq!(arb.generate(&mut mrng).value, *value);
    }
}

#[test]
fn test_zero_weight_first_entry_is_depth_fallback() {
    let config = FrequencyConfig::default().with_max_depth(0);
    let arb = frequency_with(
        config,
        vec![
            WeightedArbitrary::new(0, constant("fallback")),
            WeightedArbitrary::new(1, constant("drawn")),
        ],
    )
    .unwrap();
    let mut mrng = ScriptedRandom::lower_bound();
    assert_eq!(arb.generate(&mut mrng).value, "fallback");
    assert!(mrng.calls.is_empty());
}
