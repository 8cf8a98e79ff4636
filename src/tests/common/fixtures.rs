//! Test Fixtures
//!
//! Provides small plant and animal catalogs covering every rarity tier.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::alchemy::{Item, Pool, PoolKind, Rarity};
use crate::core::session::{Session, SessionOptions};

// =============================================================================
// Pool Fixtures
// =============================================================================

/// One plant per rarity tier.
pub fn create_plant_pool() -> Pool {
    Pool::new(
        PoolKind::Plants,
        vec![
            Item::new("Мята", Rarity::Common).with_habitat("Луга"),
            Item::new("Полынь горькая", Rarity::Uncommon).with_habitat("Степи"),
            Item::new("Лунный цветок", Rarity::Rare).with_habitat("Горы"),
            Item::new("Огненный папоротник", Rarity::Legendary).with_habitat("Древние леса"),
        ],
    )
}

/// One animal per rarity tier.
pub fn create_animal_pool() -> Pool {
    Pool::new(
        PoolKind::Animals,
        vec![
            Item::new("Волк", Rarity::Common).with_habitat("Леса"),
            Item::new("Летучая мышь", Rarity::Uncommon).with_habitat("Пещеры"),
            Item::new("Василиск", Rarity::Rare).with_habitat("Руины"),
            Item::new("Феникс", Rarity::Legendary).with_habitat("Вулканы"),
        ],
    )
}

/// A pool of `n` common items named `prefix0..prefixN`.
pub fn create_uniform_items(prefix: &str, n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item::new(format!("{prefix}{i}"), Rarity::Common))
        .collect()
}

// =============================================================================
// Session Fixtures
// =============================================================================

/// Session over the fixture pools with a fixed RNG.
pub fn create_test_session(seed: u64) -> Session {
    Session::with_rng(
        create_plant_pool(),
        create_animal_pool(),
        SessionOptions::default(),
        StdRng::seed_from_u64(seed),
    )
}
