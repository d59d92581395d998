//! Per-column visibility state.

use std::collections::HashMap;

use super::column::Column;

/// Maps each known column id to whether the column is shown.
///
/// The key set is fixed when the map is seeded: toggling flips an existing
/// entry and never adds or removes one. Unknown ids are ignored, since they
/// usually come from stale UI state rather than programming errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityMap {
    entries: HashMap<String, bool>,
}

impl VisibilityMap {
    /// Seeds a map in which every column starts visible.
    pub fn all_visible<T>(columns: &[Column<T>]) -> Self {
        let entries = columns
            .iter()
            .map(|column| (column.id().to_string(), true))
            .collect();
        Self { entries }
    }

    /// Re-seeds for a new column set, keeping the state of ids that survive.
    pub fn reseed<T>(&self, columns: &[Column<T>]) -> Self {
        let entries = columns
            .iter()
            .map(|column| {
                let visible = self.entries.get(column.id()).copied().unwrap_or(true);
                (column.id().to_string(), visible)
            })
            .collect();
        Self { entries }
    }

    /// Flips the entry for `id`. Returns the new state, or `None` if unknown.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let entry = self.entries.get_mut(id)?;
        *entry = !*entry;
        Some(*entry)
    }

    /// Sets the entry for `id`. Returns `false` if the id is unknown.
    pub fn set(&mut self, id: &str, visible: bool) -> bool {
        match self.entries.get_mut(id) {
            Some(entry) => {
                *entry = visible;
                true
            }
            None => false,
        }
    }

    /// Whether `id` is shown. Unknown ids are not.
    pub fn is_visible(&self, id: &str) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    /// Whether `id` has an entry.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
