//! Rarity-weighted sampling.
//!
//! Selection probability of item *i* is `weight(i) / Σ weight(j)`, computed
//! with a cumulative-weight index rather than by expanding every item into
//! `weight` copies.
//!
//! ## Example
//!
//! ```rust,ignore
//! let weights = RarityWeights::default();
//! let mut rng = rand::thread_rng();
//!
//! let one = sample(&pool.items, &weights, &mut rng, None);
//! let roll = roll_many(PoolKind::Plants, &pool.items, 5, &weights, &mut rng, Some(42))?;
//! ```

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use tracing::{debug, warn};

use super::errors::{GeneratorError, GeneratorResult};
use super::item::{Drawable, Item, PoolKind};
use super::rarity::RarityWeights;

/// Upper bound for a single batch roll in the UI.
pub const MAX_ROLL_COUNT: usize = 10;

// ============================================================================
// Single Draw
// ============================================================================

/// Draw one item with probability proportional to its rarity weight.
///
/// With `seed`, the draw uses a fresh RNG seeded from it, so the same seed
/// against the same pool always yields the same item; `rng` is left
/// untouched. Returns `None` for an empty pool.
pub fn sample<'a, T, R>(
    pool: &'a [T],
    weights: &RarityWeights,
    rng: &mut R,
    seed: Option<u64>,
) -> Option<&'a T>
where
    T: Drawable,
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return None;
    }

    // Summed as u64 so large configured weights cannot overflow the index.
    let index = match WeightedIndex::new(
        pool.iter()
            .map(|item| u64::from(weights.weight_of(item.rarity()))),
    ) {
        Ok(index) => index,
        Err(e) => {
            warn!(error = %e, "Unusable weight table for pool");
            return None;
        }
    };

    let position = match seed {
        Some(seed) => index.sample(&mut StdRng::seed_from_u64(seed)),
        None => index.sample(rng),
    };

    pool.get(position)
}

// ============================================================================
// Batch Roll
// ============================================================================

/// Ordered result of one batch draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roll {
    pub kind: PoolKind,
    pub items: Vec<Item>,
    /// Seed of the first draw, when the roll is reproducible
    pub seed_base: Option<u64>,
}

impl Roll {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Draw `count` items independently, with replacement.
///
/// An empty pool is reported up front as [`GeneratorError::EmptyPool`];
/// otherwise the roll holds exactly `count` items. With `seed_base`, draw
/// `k` is seeded with `seed_base + k` (wrapping).
pub fn roll_many<T, R>(
    kind: PoolKind,
    pool: &[T],
    count: usize,
    weights: &RarityWeights,
    rng: &mut R,
    seed_base: Option<u64>,
) -> GeneratorResult<Roll>
where
    T: Drawable + Borrow<Item>,
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return Err(GeneratorError::empty_pool(kind));
    }

    let mut items = Vec::with_capacity(count);
    for k in 0..count {
        let seed = seed_base.map(|base| base.wrapping_add(k as u64));
        let drawn = sample(pool, weights, rng, seed).ok_or(GeneratorError::empty_pool(kind))?;
        items.push(drawn.borrow().clone());
    }

    debug!(%kind, count, eligible = pool.len(), seeded = seed_base.is_some(), "Rolled batch");

    Ok(Roll {
        kind,
        items,
        seed_base,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alchemy::rarity::Rarity;

    fn herbs() -> Vec<Item> {
        vec![
            Item::new("Мята", Rarity::Common),
            Item::new("Зверобой", Rarity::Uncommon),
            Item::new("Мандрагора", Rarity::Rare),
            Item::new("Папоротник", Rarity::Legendary),
        ]
    }

    #[test]
    fn test_sample_empty_pool_returns_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: Vec<Item> = Vec::new();
        assert!(sample(&empty, &RarityWeights::default(), &mut rng, None).is_none());
        assert!(sample(&empty, &RarityWeights::default(), &mut rng, Some(42)).is_none());
    }

    #[test]
    fn test_seeded_sample_is_deterministic() {
        let pool = herbs();
        let weights = RarityWeights::default();
        let mut rng = rand::thread_rng();
        let first = sample(&pool, &weights, &mut rng, Some(42)).unwrap();
        for _ in 0..20 {
            let again = sample(&pool, &weights, &mut rng, Some(42)).unwrap();
            assert_eq!(first.name, again.name);
        }
    }

    #[test]
    fn test_single_item_pool_always_drawn() {
        let pool = vec![Item::new("Мох", Rarity::Legendary)];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let item = sample(&pool, &RarityWeights::default(), &mut rng, None).unwrap();
            assert_eq!(item.name, "Мох");
        }
    }

    #[test]
    fn test_roll_many_length() {
        let pool = herbs();
        let mut rng = StdRng::seed_from_u64(3);
        let roll = roll_many(PoolKind::Plants, &pool, 5, &RarityWeights::default(), &mut rng, None)
            .unwrap();
        assert_eq!(roll.len(), 5);
        assert_eq!(roll.kind, PoolKind::Plants);
    }

    #[test]
    fn test_roll_many_zero_count() {
        let pool = herbs();
        let mut rng = StdRng::seed_from_u64(3);
        let roll = roll_many(PoolKind::Plants, &pool, 0, &RarityWeights::default(), &mut rng, None)
            .unwrap();
        assert!(roll.is_empty());
    }

    #[test]
    fn test_roll_many_empty_pool_is_reported() {
        let empty: Vec<Item> = Vec::new();
        let mut rng = StdRng::seed_from_u64(3);
        let err = roll_many(PoolKind::Animals, &empty, 3, &RarityWeights::default(), &mut rng, None)
            .unwrap_err();
        assert_eq!(err, GeneratorError::empty_pool(PoolKind::Animals));
    }

    #[test]
    fn test_seeded_roll_matches_per_slot_seeds() {
        let pool = herbs();
        let weights = RarityWeights::default();
        let mut rng = StdRng::seed_from_u64(99);
        let roll = roll_many(PoolKind::Plants, &pool, 4, &weights, &mut rng, Some(100)).unwrap();
        for (k, item) in roll.items.iter().enumerate() {
            let expected = sample(&pool, &weights, &mut rng, Some(100 + k as u64)).unwrap();
            assert_eq!(item.name, expected.name);
        }
    }

    #[test]
    fn test_roll_over_filtered_view() {
        let pool = herbs();
        let view: Vec<&Item> = pool.iter().filter(|i| i.rarity == Rarity::Rare).collect();
        let mut rng = StdRng::seed_from_u64(5);
        let roll = roll_many(PoolKind::Plants, &view, 3, &RarityWeights::default(), &mut rng, None)
            .unwrap();
        assert!(roll.items.iter().all(|i| i.name == "Мандрагора"));
    }

    #[test]
    fn test_huge_weights_do_not_overflow() {
        let weights = RarityWeights::new(u32::MAX, u32::MAX, 1, 1, 1).unwrap();
        let pool = vec![
            Item::new("Мята", Rarity::Common),
            Item::new("Ромашка", Rarity::Common),
            Item::new("Зверобой", Rarity::Uncommon),
            Item::new("Мандрагора", Rarity::Rare),
        ];
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            let item = sample(&pool, &weights, &mut rng, None).unwrap();
            assert_ne!(item.rarity, Rarity::Rare);
        }
        let roll = roll_many(PoolKind::Plants, &pool, 10, &weights, &mut rng, Some(1)).unwrap();
        assert_eq!(roll.len(), 10);
    }
}
