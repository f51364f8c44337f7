//! Row selection state, keyed by row id.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Tracks selected rows by their ids.
///
/// Selection is keyed by [`GridRow::id`](crate::GridRow::id) rather than by
/// position so it survives sorting, filtering and data replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    selected: HashSet<String>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a row id is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Select a row id. Returns `true` if the selection changed.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.selected.insert(id.into())
    }

    /// Deselect a row id. Returns `true` if the selection changed.
    pub fn remove(&mut self, id: &str) -> bool {
        self.selected.remove(id)
    }

    /// Toggle a row id. Returns `true` if the id is now selected.
    pub fn toggle(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.selected.contains(&id) {
            self.selected.remove(&id);
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drop every id not present in `live_ids`.
    ///
    /// Called after rows are removed so the selection never references
    /// rows that no longer exist.
    pub fn retain_ids(&mut self, live_ids: &HashSet<String>) {
        self.selected.retain(|id| live_ids.contains(id));
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterate over selected ids.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }
}
