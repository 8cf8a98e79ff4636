//! Property-based tests for weighted sampling
//!
//! Tests invariants:
//! - Same seed, same pool, same item
//! - `roll_many` returns exactly `count` items, all from the pool
//! - Frequencies approach weight / total weight

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::alchemy::{roll_many, sample, Item, PoolKind, Rarity, RarityWeights};
use crate::tests::common::{create_plant_pool, create_test_session, create_uniform_items};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_rarity() -> impl Strategy<Value = Rarity> {
    prop_oneof![
        Just(Rarity::Common),
        Just(Rarity::Uncommon),
        Just(Rarity::Rare),
        Just(Rarity::Legendary),
        "[a-z]{1,6}".prop_map(Rarity::Unrecognized),
    ]
}

fn arb_pool() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(arb_rarity(), 1..20).prop_map(|rarities| {
        rarities
            .into_iter()
            .enumerate()
            .map(|(i, rarity)| Item::new(format!("item{i}"), rarity))
            .collect()
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: a seeded draw is reproducible and ignores the caller's RNG
    #[test]
    fn prop_seeded_sample_is_deterministic(
        pool in arb_pool(),
        seed in any::<u64>(),
        noise in any::<u64>()
    ) {
        let weights = RarityWeights::default();
        let first = sample(&pool, &weights, &mut StdRng::seed_from_u64(noise), Some(seed));
        let second = sample(&pool, &weights, &mut rand::thread_rng(), Some(seed));
        prop_assert!(first.is_some());
        prop_assert_eq!(first.map(|i| &i.name), second.map(|i| &i.name));
    }

    /// Property: batch length equals the requested count
    #[test]
    fn prop_roll_many_has_requested_length(
        pool in arb_pool(),
        count in 0usize..=10,
        seed_base in prop::option::of(any::<u64>())
    ) {
        let weights = RarityWeights::default();
        let mut rng = StdRng::seed_from_u64(7);
        let roll = roll_many(PoolKind::Plants, &pool, count, &weights, &mut rng, seed_base).unwrap();
        prop_assert_eq!(roll.len(), count);
        for item in &roll.items {
            prop_assert!(pool.iter().any(|p| p.name == item.name));
        }
    }

    /// Property: seeded batches reproduce exactly
    #[test]
    fn prop_seeded_roll_is_reproducible(
        pool in arb_pool(),
        count in 1usize..=10,
        seed_base in any::<u64>()
    ) {
        let weights = RarityWeights::default();
        let a = roll_many(PoolKind::Animals, &pool, count, &weights, &mut rand::thread_rng(), Some(seed_base)).unwrap();
        let b = roll_many(PoolKind::Animals, &pool, count, &weights, &mut rand::thread_rng(), Some(seed_base)).unwrap();
        prop_assert_eq!(a, b);
    }
}

// ============================================================================
// Statistical checks
// ============================================================================

#[test]
fn test_frequencies_follow_weights() {
    let pool = create_plant_pool();
    let weights = RarityWeights::default();
    let mut rng = StdRng::seed_from_u64(2024);
    let draws = 20_000;

    let mut common = 0usize;
    let mut legendary = 0usize;
    for _ in 0..draws {
        let item = sample(&pool.items, &weights, &mut rng, None).unwrap();
        match item.rarity {
            Rarity::Common => common += 1,
            Rarity::Legendary => legendary += 1,
            _ => {}
        }
    }

    // Expected shares: 80% and 1%
    let common_share = common as f64 / draws as f64;
    let legendary_share = legendary as f64 / draws as f64;
    assert!((common_share - 0.80).abs() < 0.02, "common share {common_share}");
    assert!((legendary_share - 0.01).abs() < 0.005, "legendary share {legendary_share}");
}

#[test]
fn test_uniform_pool_is_roughly_uniform() {
    let pool = create_uniform_items("p", 4);
    let weights = RarityWeights::default();
    let mut rng = StdRng::seed_from_u64(99);
    let mut counts = [0usize; 4];
    for _ in 0..10_000 {
        let item = sample(&pool, &weights, &mut rng, None).unwrap();
        let index: usize = item.name[1..].parse().unwrap();
        counts[index] += 1;
    }
    for count in counts {
        assert!((2_200..=2_800).contains(&count), "count {count}");
    }
}

#[test]
fn test_session_roll_respects_count_and_filter() {
    let mut session = create_test_session(5);
    session.set_count(10);
    session.plant_filter = session.plant_filter.clone().with_habitat("степи");

    let entry = session.roll(PoolKind::Plants).unwrap();
    let crate::core::session::RollOutcome::Roll(roll) = &entry.outcome else {
        panic!("expected a roll");
    };
    assert_eq!(roll.len(), 10);
    assert!(roll.items.iter().all(|item| item.name == "Полынь горькая"));
    assert_eq!(session.eligible_count(PoolKind::Animals), 4);
}
