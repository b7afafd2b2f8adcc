#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::util::prefs::MemoryPrefs;

#[test]
fn read_preference_is_false_without_stored_value() {
    let prefs = MemoryPrefs::new();
    assert!(!read_preference(&prefs));
}

#[test]
fn read_preference_honors_stored_true() {
    let prefs = MemoryPrefs::with(&[(DARK_MODE_KEY, "true")]);
    assert!(read_preference(&prefs));
}

#[test]
fn read_preference_treats_other_values_as_light() {
    let prefs = MemoryPrefs::with(&[(DARK_MODE_KEY, "yes")]);
    assert!(!read_preference(&prefs));
}

#[test]
fn stored_light_overrides_dark_document() {
    assert!(!resolve(Some("false"), || true, || true));
}

#[test]
fn stored_dark_overrides_light_system() {
    assert!(resolve(Some("true"), || false, || false));
}

#[test]
fn document_then_system_apply_without_stored_value() {
    assert!(resolve(None, || true, || false));
    assert!(resolve(None, || false, || true));
    assert!(!resolve(None, || false, || false));
}

#[test]
fn page_state_ignored_when_value_is_stored() {
    let touched = std::cell::Cell::new(false);
    let touch = || {
        touched.set(true);
        true
    };
    let _ = resolve(Some("false"), touch, touch);
    assert!(!touched.get());
}

#[test]
fn toggle_flips_and_persists() {
    let prefs = MemoryPrefs::new();
    assert!(toggle(&prefs, false));
    assert_eq!(prefs.get(DARK_MODE_KEY).as_deref(), Some("true"));
    assert!(!toggle(&prefs, true));
    assert_eq!(prefs.get(DARK_MODE_KEY).as_deref(), Some("false"));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
