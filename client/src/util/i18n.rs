//! Translation table lookups with static English fallbacks.
//!
//! Tables are flat `key -> string` JSON objects served from
//! `/i18n/{lang}.json`. Lookups fall through the loaded table, then the
//! caller's static fallback tables, then the key itself, so a missing or
//! failed translation load never leaves a blank label.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use std::collections::HashMap;

use crate::error::RemoteError;

/// Static `(key, english)` pairs compiled into the client.
pub type FallbackTable = &'static [(&'static str, &'static str)];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Translations {
    lang: String,
    map: HashMap<String, String>,
}

impl Translations {
    /// Empty table; every lookup falls back.
    #[must_use]
    pub fn empty(lang: &str) -> Self {
        Self { lang: lang.to_owned(), map: HashMap::new() }
    }

    /// Parse a translation file body. Non-string values are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Parse`] if the body is not a JSON object.
    pub fn from_json(lang: &str, raw: &str) -> Result<Self, RemoteError> {
        let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| RemoteError::Parse(e.to_string()))?;
        let obj = value
            .as_object()
            .ok_or_else(|| RemoteError::Parse("translation file is not an object".to_owned()))?;
        let map = obj
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_owned())))
            .collect();
        Ok(Self { lang: lang.to_owned(), map })
    }

    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// Translate `key`, falling back through `fallbacks` and finally the key.
    #[must_use]
    pub fn t(&self, key: &str, fallbacks: &[FallbackTable]) -> String {
        if let Some(hit) = self.get(key) {
            return hit.to_owned();
        }
        fallbacks
            .iter()
            .flat_map(|table| table.iter())
            .find(|(k, _)| *k == key)
            .map_or_else(|| key.to_owned(), |(_, v)| (*v).to_owned())
    }

    /// Translate `key` with a single inline fallback string.
    #[must_use]
    pub fn or(&self, key: &str, fallback: &str) -> String {
        self.get(key).unwrap_or(fallback).to_owned()
    }
}

#[must_use]
pub fn translations_path(lang: &str) -> String {
    format!("/i18n/{lang}.json")
}
