use super::*;

fn record(email: &str, confirmed: bool) -> SubscriberRecord {
    SubscriberRecord {
        email: email.into(),
        confirmed,
        source: "footer".into(),
        subscribed_at: "2026-01-01T00:00:00Z".into(),
    }
}

#[test]
fn table_url_strips_trailing_slash() {
    assert_eq!(
        table_url("https://example.supabase.co/"),
        "https://example.supabase.co/rest/v1/newsletter_subscribers"
    );
}

#[test]
fn parse_lookup_empty_array_is_none() {
    assert_eq!(parse_lookup("[]").unwrap(), None);
}

#[test]
fn parse_lookup_takes_first_row() {
    let found = parse_lookup(r#"[{"confirmed": true}, {"confirmed": false}]"#).unwrap().unwrap();
    assert!(found.confirmed);
}

#[test]
fn parse_lookup_missing_confirmed_defaults_false() {
    let found = parse_lookup(r#"[{"id": "abc"}]"#).unwrap().unwrap();
    assert_eq!(found, Subscriber { confirmed: false });
    assert!(!found.confirmed);
}

#[test]
fn parse_lookup_rejects_non_array() {
    let err = parse_lookup(r#"{"message": "permission denied"}"#).unwrap_err();
    assert!(matches!(err, StoreError::Parse(_)));
}

#[test]
fn record_serializes_with_wire_field_names() {
    let value = serde_json::to_value(record("a@b.co", true)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "email": "a@b.co",
            "confirmed": true,
            "source": "footer",
            "subscribed_at": "2026-01-01T00:00:00Z",
        })
    );
}

#[tokio::test]
async fn memory_store_find_after_upsert() {
    let store = MemoryStore::new();
    assert!(store.is_empty().await);
    assert_eq!(store.find("a@b.co").await.unwrap(), None);

    store.upsert(&record("a@b.co", true)).await.unwrap();
    let found = store.find("a@b.co").await.unwrap().unwrap();
    assert!(found.confirmed);
}

#[tokio::test]
async fn memory_store_upsert_replaces_existing_row() {
    let store = MemoryStore::new();
    store.upsert(&record("a@b.co", false)).await.unwrap();
    store.upsert(&record("a@b.co", true)).await.unwrap();

    assert_eq!(store.len().await, 1);
    assert!(store.get("a@b.co").await.unwrap().confirmed);
}

#[test]
fn supabase_store_builds_with_default_timeouts() {
    let timeouts = OutboundTimeouts { request_secs: 15, connect_secs: 10 };
    assert!(SupabaseStore::new("https://example.supabase.co", "key".into(), timeouts).is_ok());
}
