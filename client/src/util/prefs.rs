//! Key-value preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Preferences are string-valued and read once at initialization, then
//! written on change. The browser implementation is backed by
//! `localStorage`; tests and SSR paths use the in-memory store.
//!
//! TRADE-OFFS
//! ==========
//! Writes are best-effort. A full or disabled `localStorage` silently drops
//! the value, which only costs the user their preference on next load.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Directory sort preference, `grid` or `list`.
pub const VIEW_MODE_KEY: &str = "view-mode";
/// UI language code, e.g. `en`.
pub const LANGUAGE_KEY: &str = "preferred-language";
/// Theme preference, `true` or `false`.
pub const DARK_MODE_KEY: &str = "dark-mode";

pub const DEFAULT_LANGUAGE: &str = "en";

/// String-valued preference storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-process store. Used natively and as the fallback when the browser
/// refuses storage access.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryPrefs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with `pairs`.
    #[must_use]
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        let values = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Self { values: RefCell::new(values) }
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}

/// Browser `localStorage` store.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStoragePrefs;

#[cfg(feature = "hydrate")]
impl LocalStoragePrefs {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStoragePrefs {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Read the UI language, defaulting to English.
pub fn read_language(store: &dyn PreferenceStore) -> String {
    store
        .get(LANGUAGE_KEY)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned())
}

/// Persist the UI language.
pub fn set_language(store: &dyn PreferenceStore, lang: &str) {
    store.set(LANGUAGE_KEY, lang);
}
