//! Canonical, ungrouped entry list.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashSet;

use super::entry::{Category, Entry, EntryId};
use crate::error::ValidationError;

/// Ordered entries; insertion order is the flat-mode display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardStore {
    entries: Vec<Entry>,
}

impl CardStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the canonical list. On error the previous list is kept.
    ///
    /// # Errors
    ///
    /// [`ValidationError::DuplicateId`] if two entries share an id, or
    /// [`ValidationError::UnknownCategory`] for a tag outside the known set.
    pub fn load(&mut self, entries: Vec<Entry>) -> Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if Category::parse(&entry.category).is_none() {
                return Err(ValidationError::UnknownCategory(entry.category.clone()));
            }
            if !seen.insert(&entry.id) {
                return Err(ValidationError::DuplicateId(entry.id.to_string()));
            }
        }

        self.entries = entries
            .into_iter()
            .enumerate()
            .map(|(order, mut entry)| {
                entry.display_order = order;
                entry
            })
            .collect();
        Ok(())
    }

    /// Read-only view in canonical order.
    #[must_use]
    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
