//! Selection state for the table engine.
//!
//! Selection tracks row keys, not row positions, so it stays stable while
//! rows are re-sorted or re-paged. Keys are never pruned when rows vanish
//! from the data; callers reconcile stale keys themselves.

use std::collections::HashSet;

/// Selection mode for row-selecting components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// No selection allowed
    #[default]
    None,
    /// Single row selection
    Single,
    /// Multiple rows can be selected
    Multiple,
}

/// Key-based selection state.
///
/// Every mutation returns the keys that changed, so callers can emit
/// selection events without diffing the set themselves.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: HashSet<String>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected keys (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.selected.iter().cloned().collect();
        keys.sort();
        keys
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.contains(key)
    }

    /// Get the number of selected keys.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Check if every key in `keys` is currently selected.
    ///
    /// Vacuously false for an empty slice, so toggling select-all over
    /// empty data cannot clear an existing selection.
    pub fn contains_all(&self, keys: &[String]) -> bool {
        !keys.is_empty() && keys.iter().all(|key| self.selected.contains(key))
    }

    /// Clear all selection.
    /// Returns the keys that were deselected (sorted).
    pub fn clear(&mut self) -> Vec<String> {
        let mut removed: Vec<_> = self.selected.drain().collect();
        removed.sort();
        removed
    }

    /// Select a single key (clears others).
    /// Returns (added, removed) keys.
    pub fn select(&mut self, key: &str) -> (Vec<String>, Vec<String>) {
        let mut removed: Vec<_> = self
            .selected
            .iter()
            .filter(|&k| k != key)
            .cloned()
            .collect();
        removed.sort();
        let was_selected = self.selected.contains(key);
        self.selected.clear();
        self.selected.insert(key.to_string());
        let added = if was_selected {
            vec![]
        } else {
            vec![key.to_string()]
        };
        (added, removed)
    }

    /// Toggle selection of a key.
    /// Returns (added, removed) keys.
    pub fn toggle(&mut self, key: &str) -> (Vec<String>, Vec<String>) {
        if self.selected.remove(key) {
            (vec![], vec![key.to_string()])
        } else {
            self.selected.insert(key.to_string());
            (vec![key.to_string()], vec![])
        }
    }

    /// Select every key in `keys`.
    /// Returns the keys that were newly selected.
    pub fn select_all(&mut self, keys: &[String]) -> Vec<String> {
        let mut added = Vec::new();
        for key in keys {
            if self.selected.insert(key.clone()) {
                added.push(key.clone());
            }
        }
        added
    }
}
