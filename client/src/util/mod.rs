//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from the state and
//! component logic to improve reuse and testability.

pub mod clipboard;
pub mod dark_mode;
pub mod debounce;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod i18n;
pub mod prefs;
pub mod ready;
pub mod transient;
