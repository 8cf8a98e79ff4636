//! Property-based tests for unique combination draws
//!
//! Tests invariants:
//! - No pair is returned twice while `seen` is kept
//! - With a generous attempt bound, exactly |P| x |A| draws succeed

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::alchemy::{draw_unique_combination, GeneratorError, SeenCombinations};
use crate::tests::common::create_uniform_items;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: pools are fully enumerated, then exhausted
    #[test]
    fn prop_draws_enumerate_every_pair(
        plant_count in 1usize..=4,
        animal_count in 1usize..=4,
        seed in any::<u64>()
    ) {
        let plants = create_uniform_items("p", plant_count);
        let animals = create_uniform_items("a", animal_count);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut seen = SeenCombinations::new();
        let mut returned = HashSet::new();

        for _ in 0..plant_count * animal_count {
            let record = draw_unique_combination(&plants, &animals, &mut rng, &mut seen, 10_000).unwrap();
            prop_assert!(returned.insert(record.key.clone()), "pair {} returned twice", record.key);
        }

        prop_assert_eq!(seen.len(), plant_count * animal_count);
        let exhausted = draw_unique_combination(&plants, &animals, &mut rng, &mut seen, 50);
        let is_exhausted = matches!(exhausted, Err(GeneratorError::CombinationExhausted { .. }));
        prop_assert!(is_exhausted);
        prop_assert_eq!(seen.len(), plant_count * animal_count);
    }
}
