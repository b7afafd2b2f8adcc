use super::*;

fn ids(store: &CardStore) -> Vec<&str> {
    store.all().iter().map(|e| e.id.0.as_str()).collect()
}

#[test]
fn load_preserves_order_and_assigns_display_order() {
    let mut store = CardStore::new();
    store
        .load(vec![Entry::new("b", "youth"), Entry::new("a", "crisis"), Entry::new("c", "general")])
        .unwrap();
    assert_eq!(ids(&store), vec!["b", "a", "c"]);
    let orders: Vec<_> = store.all().iter().map(|e| e.display_order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
}

#[test]
fn load_rejects_duplicate_ids() {
    let mut store = CardStore::new();
    let err = store
        .load(vec![Entry::new("x", "crisis"), Entry::new("x", "youth")])
        .unwrap_err();
    assert_eq!(err, ValidationError::DuplicateId("x".to_owned()));
}

#[test]
fn load_rejects_unknown_category() {
    let mut store = CardStore::new();
    let err = store.load(vec![Entry::new("x", "pets")]).unwrap_err();
    assert_eq!(err, ValidationError::UnknownCategory("pets".to_owned()));
}

#[test]
fn failed_load_keeps_previous_list() {
    let mut store = CardStore::new();
    store.load(vec![Entry::new("keep", "crisis")]).unwrap();
    assert!(store.load(vec![Entry::new("y", "nope")]).is_err());
    assert_eq!(ids(&store), vec!["keep"]);
}

#[test]
fn load_replaces_existing_list() {
    let mut store = CardStore::new();
    store.load(vec![Entry::new("one", "crisis")]).unwrap();
    store.load(vec![Entry::new("two", "youth")]).unwrap();
    assert_eq!(ids(&store), vec!["two"]);
    assert_eq!(store.len(), 1);
}

#[test]
fn get_finds_by_id() {
    let mut store = CardStore::new();
    assert!(store.is_empty());
    store.load(vec![Entry::new("a", "crisis").with_field("phone", "988")]).unwrap();
    assert_eq!(store.get(&EntryId::from("a")).and_then(|e| e.field("phone")), Some("988"));
    assert!(store.get(&EntryId::from("zzz")).is_none());
}
