//! Unique plant/animal pairing.
//!
//! Each attempt picks one plant and one animal uniformly at random and
//! rejects the pair if its key is already in the caller's
//! [`SeenCombinations`]. This approximates drawing without replacement over
//! the cross product; as the unseen pairs run out, attempts fail more often
//! until the bound is hit and [`GeneratorError::CombinationExhausted`] is
//! returned. Exhaustion never clears the seen set.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info};

use super::errors::{GeneratorError, GeneratorResult};
use super::item::{Drawable, Item, PoolKind};

/// Attempts per call before reporting exhaustion.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Separator between the plant and animal names in a key.
pub const KEY_SEPARATOR: char = '|';

// ============================================================================
// Keys
// ============================================================================

/// Identity of a plant/animal pair: `"plant|animal"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComboKey(String);

impl ComboKey {
    pub fn new(plant: &str, animal: &str) -> Self {
        Self(format!("{plant}{KEY_SEPARATOR}{animal}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComboKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pairs already drawn in one session. Owned by the session, never global.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeenCombinations {
    keys: HashSet<ComboKey>,
}

impl SeenCombinations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &ComboKey) -> bool {
        self.keys.contains(key)
    }

    /// Record a key. Returns `false` if it was already present.
    pub fn insert(&mut self, key: ComboKey) -> bool {
        self.keys.insert(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComboKey> {
        self.keys.iter()
    }
}

// ============================================================================
// Records
// ============================================================================

/// One plant and one animal drawn together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationRecord {
    pub plant: Item,
    pub animal: Item,
    pub key: ComboKey,
}

/// Draw a plant/animal pair not yet in `seen`, recording it on success.
///
/// Both pools are expected to be filtered already. Empty pools yield
/// [`GeneratorError::EmptyPool`]; `max_attempts` consecutive repeats yield
/// [`GeneratorError::CombinationExhausted`] and leave `seen` unchanged.
pub fn draw_unique_combination<P, A, R>(
    plants: &[P],
    animals: &[A],
    rng: &mut R,
    seen: &mut SeenCombinations,
    max_attempts: u32,
) -> GeneratorResult<CombinationRecord>
where
    P: Drawable + Borrow<Item>,
    A: Drawable + Borrow<Item>,
    R: Rng + ?Sized,
{
    if plants.is_empty() {
        return Err(GeneratorError::empty_pool(PoolKind::Plants));
    }
    if animals.is_empty() {
        return Err(GeneratorError::empty_pool(PoolKind::Animals));
    }

    for attempt in 1..=max_attempts {
        let (Some(plant), Some(animal)) = (plants.choose(rng), animals.choose(rng)) else {
            break;
        };

        let key = ComboKey::new(plant.name(), animal.name());
        if seen.contains(&key) {
            continue;
        }

        debug!(%key, attempt, "Drew unseen combination");
        seen.insert(key.clone());
        return Ok(CombinationRecord {
            plant: plant.borrow().clone(),
            animal: animal.borrow().clone(),
            key,
        });
    }

    info!(attempts = max_attempts, seen = seen.len(), "Combination space exhausted");
    Err(GeneratorError::CombinationExhausted {
        attempts: max_attempts,
        seen: seen.len(),
    })
}
