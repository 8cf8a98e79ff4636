//! Per-session state for the roller UI.
//!
//! A [`Session`] owns everything that must persist between user actions:
//! the loaded pools, filters, seen combinations, roll history, and its own
//! RNG. Separate sessions share nothing mutable.

pub mod history;

pub use history::{HistoryEntry, RollHistory, RollOutcome, DEFAULT_HISTORY_LIMIT};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::core::alchemy::{
    brew_potion, roll_many, BrewOptions, GeneratorResult, Pool, PoolFilter, PoolKind,
    RarityWeights, SeenCombinations, DEFAULT_MAX_ATTEMPTS, MAX_ROLL_COUNT,
};

/// Tunables for a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub weights: RarityWeights,
    pub count: usize,
    pub max_attempts: u32,
    pub history_limit: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            weights: RarityWeights::default(),
            count: 1,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Interactive rolling session.
pub struct Session {
    plants: Pool,
    animals: Pool,
    weights: RarityWeights,
    pub plant_filter: PoolFilter,
    pub animal_filter: PoolFilter,
    count: usize,
    seed: Option<u64>,
    max_attempts: u32,
    seen: SeenCombinations,
    history: RollHistory<HistoryEntry>,
    rng: StdRng,
}

impl Session {
    pub fn new(plants: Pool, animals: Pool, options: SessionOptions) -> Self {
        Self::with_rng(plants, animals, options, StdRng::from_entropy())
    }

    /// Create a session with a caller-supplied RNG (for reproducible tests).
    pub fn with_rng(plants: Pool, animals: Pool, options: SessionOptions, rng: StdRng) -> Self {
        Self {
            plants,
            animals,
            weights: options.weights,
            plant_filter: PoolFilter::all(),
            animal_filter: PoolFilter::all(),
            count: options.count.clamp(1, MAX_ROLL_COUNT),
            seed: None,
            max_attempts: options.max_attempts.max(1),
            seen: SeenCombinations::new(),
            history: RollHistory::new(options.history_limit),
            rng,
        }
    }

    // ========================================================================
    // Settings
    // ========================================================================

    pub fn pool(&self, kind: PoolKind) -> &Pool {
        match kind {
            PoolKind::Plants => &self.plants,
            PoolKind::Animals => &self.animals,
        }
    }

    pub fn filter(&self, kind: PoolKind) -> &PoolFilter {
        match kind {
            PoolKind::Plants => &self.plant_filter,
            PoolKind::Animals => &self.animal_filter,
        }
    }

    pub fn filter_mut(&mut self, kind: PoolKind) -> &mut PoolFilter {
        match kind {
            PoolKind::Plants => &mut self.plant_filter,
            PoolKind::Animals => &mut self.animal_filter,
        }
    }

    pub fn weights(&self) -> &RarityWeights {
        &self.weights
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Set the number of items per roll, clamped to `1..=MAX_ROLL_COUNT`.
    pub fn set_count(&mut self, count: usize) {
        self.count = count.clamp(1, MAX_ROLL_COUNT);
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    pub fn seen(&self) -> &SeenCombinations {
        &self.seen
    }

    pub fn history(&self) -> &RollHistory<HistoryEntry> {
        &self.history
    }

    /// Step a pool's habitat filter through its known habitats, then back to
    /// no constraint. Returns the new habitat.
    pub fn cycle_habitat(&mut self, kind: PoolKind) -> Option<String> {
        let next = {
            let habitats = self.pool(kind).habitats();
            let current = self.filter(kind).habitat.as_deref();
            match current {
                None => habitats.first().map(|h| h.to_string()),
                Some(current) => habitats
                    .iter()
                    .position(|h| *h == current)
                    .and_then(|i| habitats.get(i + 1))
                    .map(|h| h.to_string()),
            }
        };
        debug!(%kind, habitat = ?next, "Habitat filter changed");
        self.filter_mut(kind).habitat = next.clone();
        next
    }

    /// Number of items passing the current filter for a pool.
    pub fn eligible_count(&self, kind: PoolKind) -> usize {
        self.pool(kind).filter(self.filter(kind)).len()
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Roll `count` items from one pool and record the result.
    ///
    /// On error the history is left untouched.
    pub fn roll(&mut self, kind: PoolKind) -> GeneratorResult<&HistoryEntry> {
        let pool = match kind {
            PoolKind::Plants => &self.plants,
            PoolKind::Animals => &self.animals,
        };
        let filter = match kind {
            PoolKind::Plants => &self.plant_filter,
            PoolKind::Animals => &self.animal_filter,
        };
        let eligible = pool.filter(filter);
        let roll = roll_many(kind, &eligible, self.count, &self.weights, &mut self.rng, self.seed)?;
        Ok(self.history.push(HistoryEntry::new(RollOutcome::Roll(roll))))
    }

    /// Brew a potion from the filtered pools and record it.
    ///
    /// Unseeded brews draw from the session RNG.
    pub fn brew(&mut self) -> GeneratorResult<&HistoryEntry> {
        let plants = self.plants.filter(&self.plant_filter);
        let animals = self.animals.filter(&self.animal_filter);
        let options = BrewOptions {
            max_attempts: self.max_attempts,
            seed: self.seed,
        };
        let potion = brew_potion(&plants, &animals, &mut self.rng, &mut self.seen, options)?;
        Ok(self.history.push(HistoryEntry::new(RollOutcome::Potion(potion))))
    }

    /// Forget every combination drawn so far.
    pub fn reset_seen(&mut self) {
        info!(cleared = self.seen.len(), "Reset seen combinations");
        self.seen.clear();
    }

    pub fn back(&mut self) -> Option<&HistoryEntry> {
        debug!("History back");
        self.history.back()
    }

    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        debug!("History forward");
        self.history.forward()
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.history.current()
    }
}
