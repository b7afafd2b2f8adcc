//! Category grouping derived from the card store.
//!
//! The index is rebuilt from scratch on every entry into grouped mode and is
//! never edited in place. Sections follow the descriptor order, entries keep
//! their relative canonical order, and empty sections are omitted.

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;

use std::collections::HashMap;

use super::entry::{Category, CategoryDescriptor, Entry, EntryId};

/// One non-empty category section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: Category,
    pub entries: Vec<EntryId>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    groups: Vec<CategoryGroup>,
}

impl CategoryIndex {
    /// Group `entries` under `categories`, in descriptor order.
    ///
    /// Entries whose tag is outside the known set land in the default
    /// category. Categories missing from `categories` are dropped, as are
    /// duplicates after their first descriptor.
    #[must_use]
    pub fn build(entries: &[Entry], categories: &[CategoryDescriptor]) -> Self {
        let mut buckets: HashMap<Category, Vec<EntryId>> = HashMap::new();
        for entry in entries {
            buckets
                .entry(entry.resolved_category())
                .or_default()
                .push(entry.id.clone());
        }

        let groups = categories
            .iter()
            .filter_map(|descriptor| {
                let entries = buckets.remove(&descriptor.category)?;
                (!entries.is_empty()).then_some(CategoryGroup { category: descriptor.category, entries })
            })
            .collect();
        Self { groups }
    }

    #[must_use]
    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    #[must_use]
    pub fn get(&self, category: Category) -> Option<&[EntryId]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.entries.as_slice())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
