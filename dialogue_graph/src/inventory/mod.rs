//! Session inventory - the item counts conditions and text tags read.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Item-name to count store for one playthrough.
///
/// Owned by the session that mutates it rather than any global instance, so
/// parallel sessions and tests get isolated state. Unknown items count as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Inventory {
    items: HashMap<String, i64>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to an item, creating the entry if absent.
    ///
    /// The arithmetic is unchecked pass-through: negative adds are permitted
    /// and the entry is kept even at zero or below.
    pub fn add(&mut self, name: impl Into<String>, amount: i64) {
        *self.items.entry(name.into()).or_insert(0) += amount;
    }

    /// Subtract `amount` from an item.
    ///
    /// When the count drops to zero or below the entry is dropped entirely,
    /// so `get` returns to the 0 default rather than going negative.
    /// Removing from an absent item is a no-op.
    pub fn remove(&mut self, name: &str, amount: i64) {
        if let Some(count) = self.items.get_mut(name) {
            *count -= amount;
            if *count <= 0 {
                self.items.remove(name);
            }
        }
    }

    /// Current count, 0 for unknown items.
    pub fn get(&self, name: &str) -> i64 {
        self.items.get(name).copied().unwrap_or(0)
    }

    /// Threshold check used by condition nodes.
    pub fn has_at_least(&self, name: &str, amount: i64) -> bool {
        self.get(name) >= amount
    }

    /// Number of distinct items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over held items and their counts.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.items.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
