//! Ingredient Rolling and Potion Generation
//!
//! Draws plant and animal ingredients from catalog pools with
//! rarity-weighted sampling, pairs them into unique combinations, and names
//! the resulting potions.
//!
//! # Architecture
//!
//! ```text
//! catalog::load_pool ──► Pool ──► PoolFilter ──► eligible &Item
//!                                                   │
//!               RarityWeights ──► sampler::sample / roll_many ──► Roll
//!                                                   │
//!   SeenCombinations ──► combination::draw_unique_combination
//!                                                   │
//!                         naming::synthesize ──► potion::Potion
//! ```
//!
//! Nothing here holds state between calls: the RNG and the seen set are
//! always passed in by the caller.

pub mod catalog;
pub mod combination;
pub mod errors;
pub mod filter;
pub mod item;
pub mod naming;
pub mod potion;
pub mod rarity;
pub mod sampler;

pub use catalog::load_pool;
pub use combination::{draw_unique_combination, CombinationRecord, ComboKey, SeenCombinations, DEFAULT_MAX_ATTEMPTS};
pub use errors::{CatalogError, CatalogResult, GeneratorError, GeneratorResult};
pub use filter::PoolFilter;
pub use item::{Drawable, Item, Pool, PoolKind, PLACEHOLDER};
pub use naming::{core_token, genitive_form, synthesize};
pub use potion::{brew_potion, BrewOptions, Potion};
pub use rarity::{Rarity, RarityWeights};
pub use sampler::{roll_many, sample, Roll, MAX_ROLL_COUNT};
