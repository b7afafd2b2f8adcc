use super::*;

#[test]
fn transient_is_inactive_by_default() {
    assert!(!Transient::default().is_active(0.0));
}

#[test]
fn transient_reverts_at_deadline() {
    let mut t = Transient::default();
    t.show(1_000.0, 2_000.0);
    assert!(t.is_active(1_000.0));
    assert!(t.is_active(2_999.0));
    assert!(!t.is_active(3_000.0));
}

#[test]
fn transient_clear_deactivates() {
    let mut t = Transient::default();
    t.show(0.0, 3_000.0);
    t.clear();
    assert!(!t.is_active(1.0));
}

#[test]
fn transient_set_tracks_keys_independently() {
    let mut set = TransientSet::default();
    set.show("a", 0.0, 2_000.0);
    set.show("b", 1_500.0, 2_000.0);
    assert!(set.is_active(&"a", 1_999.0));
    assert!(!set.is_active(&"a", 2_000.0));
    assert!(set.is_active(&"b", 3_000.0));
    assert!(!set.is_active(&"c", 0.0));
}

#[test]
fn transient_set_prune_drops_expired() {
    let mut set = TransientSet::default();
    set.show(1_u32, 0.0, 100.0);
    set.show(2_u32, 0.0, 500.0);
    set.prune(200.0);
    assert_eq!(set.len(), 1);
    set.prune(600.0);
    assert!(set.is_empty());
}

#[test]
fn transient_set_clear_drops_one_key() {
    let mut set = TransientSet::default();
    set.show("a", 0.0, 100.0);
    set.show("b", 0.0, 100.0);
    set.clear(&"a");
    assert!(!set.is_active(&"a", 10.0));
    assert!(set.is_active(&"b", 10.0));
    assert_eq!(set.len(), 1);
}
