//! Pool filters supplied by the UI: a rarity subset and a habitat substring.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::item::Item;
use super::rarity::Rarity;

/// Criteria an item must meet to be eligible for a draw.
///
/// `None` means "no constraint". An empty rarity set excludes everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolFilter {
    pub rarities: Option<BTreeSet<Rarity>>,
    pub habitat: Option<String>,
}

impl PoolFilter {
    /// A filter that keeps every item.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to the given rarity tiers.
    pub fn with_rarities(mut self, rarities: impl IntoIterator<Item = Rarity>) -> Self {
        self.rarities = Some(rarities.into_iter().collect());
        self
    }

    /// Restrict to items whose habitat contains `needle` (case-insensitive).
    pub fn with_habitat(mut self, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        self.habitat = if needle.trim().is_empty() {
            None
        } else {
            Some(needle)
        };
        self
    }

    /// Flip one tier in the rarity subset.
    ///
    /// Toggling from "no constraint" starts from all canonical tiers, so the
    /// first toggle removes the chosen tier.
    pub fn toggle_rarity(&mut self, rarity: Rarity) {
        let set = self
            .rarities
            .get_or_insert_with(|| Rarity::canonical().iter().cloned().collect());
        if !set.remove(&rarity) {
            set.insert(rarity);
        }
    }

    /// Whether the tier passes the rarity part of the filter.
    pub fn allows_rarity(&self, rarity: &Rarity) -> bool {
        self.rarities
            .as_ref()
            .map(|set| set.contains(rarity))
            .unwrap_or(true)
    }

    pub fn matches(&self, item: &Item) -> bool {
        if !self.allows_rarity(&item.rarity) {
            return false;
        }
        match &self.habitat {
            None => true,
            Some(needle) => item
                .habitat
                .as_deref()
                .map(|habitat| habitat.to_lowercase().contains(&needle.trim().to_lowercase()))
                .unwrap_or(false),
        }
    }
}
