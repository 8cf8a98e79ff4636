//! Rarity tiers and their draw weights.
//!
//! Catalog tables label rarity in Russian (`Обычный`, `Необычный`, `Редкий`,
//! `Легендарный`); English labels are accepted too. Anything else is kept as
//! [`Rarity::Unrecognized`] and drawn with the fallback weight.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{GeneratorError, GeneratorResult};
use super::item::Drawable;

// ============================================================================
// Rarity
// ============================================================================

/// Rarity tier of a catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
    /// Label that matched none of the known tiers, kept verbatim
    Unrecognized(String),
}

impl Rarity {
    /// Parse a rarity label. Never fails.
    pub fn parse(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_lowercase().as_str() {
            "обычный" | "обычная" | "обычное" | "common" => Self::Common,
            "необычный" | "необычная" | "необычное" | "uncommon" => Self::Uncommon,
            "редкий" | "редкая" | "редкое" | "rare" => Self::Rare,
            "легендарный" | "легендарная" | "легендарное" | "legendary" => Self::Legendary,
            _ => Self::Unrecognized(trimmed.to_string()),
        }
    }

    /// Display label as used in the source tables.
    pub fn label(&self) -> &str {
        match self {
            Self::Common => "Обычный",
            Self::Uncommon => "Необычный",
            Self::Rare => "Редкий",
            Self::Legendary => "Легендарный",
            Self::Unrecognized(label) => label,
        }
    }

    /// The four known tiers, from most to least frequent.
    pub fn canonical() -> &'static [Rarity] {
        &[
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Legendary,
        ]
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl Default for Rarity {
    fn default() -> Self {
        Self::Common
    }
}

impl From<String> for Rarity {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<Rarity> for String {
    fn from(rarity: Rarity) -> Self {
        rarity.label().to_string()
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Weight Table
// ============================================================================

/// Relative draw weight per rarity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RarityWeights {
    pub common: u32,
    pub uncommon: u32,
    pub rare: u32,
    pub legendary: u32,
    /// Weight for labels outside the known tiers
    pub fallback: u32,
}

impl Default for RarityWeights {
    fn default() -> Self {
        Self {
            common: 80,
            uncommon: 15,
            rare: 4,
            legendary: 1,
            fallback: 1,
        }
    }
}

impl RarityWeights {
    /// Build a weight table, rejecting zero weights.
    pub fn new(
        common: u32,
        uncommon: u32,
        rare: u32,
        legendary: u32,
        fallback: u32,
    ) -> GeneratorResult<Self> {
        Self {
            common,
            uncommon,
            rare,
            legendary,
            fallback,
        }
        .validated()
    }

    /// Check every weight is positive.
    pub fn validated(self) -> GeneratorResult<Self> {
        let entries = [
            (Rarity::Common.label().to_string(), self.common),
            (Rarity::Uncommon.label().to_string(), self.uncommon),
            (Rarity::Rare.label().to_string(), self.rare),
            (Rarity::Legendary.label().to_string(), self.legendary),
            ("fallback".to_string(), self.fallback),
        ];
        for (rarity, weight) in entries {
            if weight == 0 {
                return Err(GeneratorError::InvalidWeight { rarity });
            }
        }
        Ok(self)
    }

    /// Weight used when drawing an item of the given tier.
    pub fn weight_of(&self, rarity: &Rarity) -> u32 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Uncommon => self.uncommon,
            Rarity::Rare => self.rare,
            Rarity::Legendary => self.legendary,
            Rarity::Unrecognized(_) => self.fallback,
        }
    }

    /// Weight for a raw table label.
    pub fn weight_of_label(&self, label: &str) -> u32 {
        self.weight_of(&Rarity::parse(label))
    }

    /// Expected share of draws that land on `rarity` for the given pool.
    ///
    /// Returns 0.0 for an empty pool.
    pub fn probability_of<T: Drawable>(&self, rarity: &Rarity, pool: &[T]) -> f64 {
        let total: u64 = pool
            .iter()
            .map(|item| u64::from(self.weight_of(item.rarity())))
            .sum();
        if total == 0 {
            return 0.0;
        }
        let tier: u64 = pool
            .iter()
            .filter(|item| item.rarity() == rarity)
            .map(|item| u64::from(self.weight_of(item.rarity())))
            .sum();
        tier as f64 / total as f64
    }
}
