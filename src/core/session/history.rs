//! Roll history with back/forward navigation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::alchemy::{Potion, Roll};

/// Default number of entries kept per session.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

// ============================================================================
// Entries
// ============================================================================

/// What a user action produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RollOutcome {
    Roll(Roll),
    Potion(Potion),
}

/// One recorded result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub outcome: RollOutcome,
    pub rolled_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(outcome: RollOutcome) -> Self {
        Self {
            outcome,
            rolled_at: Utc::now(),
        }
    }

    /// Short label for status lines.
    pub fn summary(&self) -> String {
        match &self.outcome {
            RollOutcome::Roll(roll) => {
                let names: Vec<&str> = roll.items.iter().map(|i| i.name.as_str()).collect();
                format!("{}: {}", roll.kind.title(), names.join(", "))
            }
            RollOutcome::Potion(potion) => potion.name.clone(),
        }
    }
}

// ============================================================================
// History
// ============================================================================

/// Bounded list of past results plus a cursor.
///
/// New entries are appended at the end and the cursor jumps to them; the
/// oldest entry is dropped once `limit` is exceeded.
#[derive(Debug, Clone)]
pub struct RollHistory<T> {
    entries: VecDeque<T>,
    cursor: Option<usize>,
    limit: usize,
}

impl<T> RollHistory<T> {
    /// Create a history holding at most `limit` entries (minimum 1).
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
            limit: limit.max(1),
        }
    }

    /// Append an entry and move the cursor to it.
    pub fn push(&mut self, entry: T) -> &T {
        self.entries.push_back(entry);
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        let newest = self.entries.len() - 1;
        self.cursor = Some(newest);
        &self.entries[newest]
    }

    /// Entry under the cursor.
    pub fn current(&self) -> Option<&T> {
        self.cursor.and_then(|i| self.entries.get(i))
    }

    /// Step to the previous entry. Returns `None` when already at the start.
    pub fn back(&mut self) -> Option<&T> {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                self.entries.get(i - 1)
            }
            _ => None,
        }
    }

    /// Step to the next entry. Returns `None` when already at the end.
    pub fn forward(&mut self) -> Option<&T> {
        match self.cursor {
            Some(i) if i + 1 < self.entries.len() => {
                self.cursor = Some(i + 1);
                self.entries.get(i + 1)
            }
            _ => None,
        }
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.cursor, Some(i) if i > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.cursor, Some(i) if i + 1 < self.entries.len())
    }

    /// 1-based cursor position, for "3 / 7" displays.
    pub fn position(&self) -> Option<usize> {
        self.cursor.map(|i| i + 1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

impl<T> Default for RollHistory<T> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}
