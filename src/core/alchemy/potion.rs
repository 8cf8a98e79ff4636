//! Potion brewing: a unique plant/animal pair plus a synthesized name.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use tracing::info;

use super::combination::{draw_unique_combination, CombinationRecord, SeenCombinations, DEFAULT_MAX_ATTEMPTS};
use super::errors::GeneratorResult;
use super::item::{Drawable, Item};
use super::naming::synthesize;

/// A brewed potion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Potion {
    pub name: String,
    pub record: CombinationRecord,
    /// Seed used for both pairing and naming, if any
    pub seed: Option<u64>,
}

impl Potion {
    pub fn plant(&self) -> &Item {
        &self.record.plant
    }

    pub fn animal(&self) -> &Item {
        &self.record.animal
    }
}

/// Options for [`brew_potion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrewOptions {
    pub max_attempts: u32,
    /// Makes the pairing and the name reproducible for a given seen set
    pub seed: Option<u64>,
}

impl Default for BrewOptions {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

/// Draw an unseen pair and name it.
///
/// Without a seed, both steps use `rng`. With a seed, both steps use a fresh
/// RNG seeded with `seed + seen.len()`, so a fixed seed still walks the whole
/// pair space across successive brews while staying reproducible for a given
/// seen set.
pub fn brew_potion<P, A, R>(
    plants: &[P],
    animals: &[A],
    rng: &mut R,
    seen: &mut SeenCombinations,
    options: BrewOptions,
) -> GeneratorResult<Potion>
where
    P: Drawable + Borrow<Item>,
    A: Drawable + Borrow<Item>,
    R: Rng + ?Sized,
{
    let (record, name) = match options.seed {
        Some(seed) => {
            let mut seeded = StdRng::seed_from_u64(seed.wrapping_add(seen.len() as u64));
            pair_and_name(plants, animals, &mut seeded, seen, options.max_attempts)?
        }
        None => pair_and_name(plants, animals, rng, seen, options.max_attempts)?,
    };

    info!(potion = %name, key = %record.key, "Brewed potion");

    Ok(Potion {
        name,
        record,
        seed: options.seed,
    })
}

fn pair_and_name<P, A, R>(
    plants: &[P],
    animals: &[A],
    rng: &mut R,
    seen: &mut SeenCombinations,
    max_attempts: u32,
) -> GeneratorResult<(CombinationRecord, String)>
where
    P: Drawable + Borrow<Item>,
    A: Drawable + Borrow<Item>,
    R: Rng + ?Sized,
{
    let record = draw_unique_combination(plants, animals, rng, seen, max_attempts)?;
    let name = synthesize(&record.plant.name, &record.animal.name, rng);
    Ok((record, name))
}
