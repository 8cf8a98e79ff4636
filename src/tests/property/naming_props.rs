//! Property-based tests for potion name synthesis
//!
//! Tests invariants:
//! - Output is non-empty and starts with an uppercase letter
//! - Deterministic given same seed
//! - Genitive inflection never panics and keeps the word count

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::alchemy::{genitive_form, synthesize};

/// Lowercase Cyrillic names of one or two words
fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof!["[а-я]{1,12}", "[а-я]{2,10} [а-я]{2,10}"]
}

proptest! {
    #[test]
    fn prop_name_is_capitalized(
        plant in arb_name(),
        animal in arb_name(),
        seed in any::<u64>()
    ) {
        let name = synthesize(&plant, &animal, &mut StdRng::seed_from_u64(seed));
        let first = name.chars().next();
        prop_assert!(first.is_some_and(char::is_uppercase), "name '{}'", name);
    }

    #[test]
    fn prop_name_is_deterministic(
        plant in arb_name(),
        animal in arb_name(),
        seed in any::<u64>()
    ) {
        let a = synthesize(&plant, &animal, &mut StdRng::seed_from_u64(seed));
        let b = synthesize(&plant, &animal, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_genitive_keeps_word_count(name in "\\PC{0,30}") {
        let inflected = genitive_form(&name);
        prop_assert_eq!(
            inflected.split_whitespace().count(),
            name.split_whitespace().count()
        );
    }
}
