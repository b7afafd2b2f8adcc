//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from the preference store and applies a
//! `data-theme="dark"` attribute to the `<html>` element (removing it for
//! light mode). Toggling writes back to the store and updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; native paths
//! safely no-op on the document so unit tests stay deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::prefs::{DARK_MODE_KEY, PreferenceStore};

/// Read the dark mode preference.
///
/// A stored value always wins. Without one, a server-rendered
/// `data-theme="dark"` or the system color scheme turns dark mode on.
pub fn read_preference(store: &dyn PreferenceStore) -> bool {
    resolve(store.get(DARK_MODE_KEY).as_deref(), document_is_dark, system_prefers_dark)
}

/// Precedence: stored value, then the document attribute, then the system.
/// The page is only inspected when nothing is stored.
pub(crate) fn resolve(
    stored: Option<&str>,
    document_dark: impl FnOnce() -> bool,
    system_dark: impl FnOnce() -> bool,
) -> bool {
    match stored {
        Some(val) => val == "true",
        None => document_dark() || system_dark(),
    }
}

/// Apply or clear the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            if enabled {
                let _ = el.set_attribute("data-theme", "dark");
            } else {
                let _ = el.remove_attribute("data-theme");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Set dark mode explicitly, persist it, and apply it.
pub fn set(store: &dyn PreferenceStore, enabled: bool) {
    apply(enabled);
    store.set(DARK_MODE_KEY, if enabled { "true" } else { "false" });
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(store: &dyn PreferenceStore, current: bool) -> bool {
    let next = !current;
    set(store, next);
    next
}

fn document_is_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|el| el.get_attribute("data-theme"))
            .is_some_and(|v| v == "dark")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
