use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn defaults_when_environment_is_empty() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.serve_static);
    assert!(cfg.site_dir.ends_with("site"));
    assert_eq!(cfg.supabase_url, DEFAULT_SUPABASE_URL);
    assert_eq!(cfg.supabase_service_key, None);
    assert!(!cfg.memory_subscribers);
    assert_eq!(cfg.elevenlabs_api_key, None);
    assert_eq!(
        cfg.timeouts,
        OutboundTimeouts {
            request_secs: DEFAULT_OUTBOUND_TIMEOUT_SECS,
            connect_secs: DEFAULT_OUTBOUND_CONNECT_TIMEOUT_SECS
        }
    );
}

#[test]
fn overrides_are_parsed() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("SITE_DIR", "/srv/site"),
        ("SERVE_STATIC", "off"),
        ("SUPABASE_URL", "https://example.supabase.co/"),
        ("SUPABASE_SERVICE_ROLE_KEY", "service"),
        ("NEWSLETTER_IN_MEMORY", "yes"),
        ("ELEVENLABS_API_KEY", " xi-key "),
        ("OUTBOUND_TIMEOUT_SECS", "30"),
        ("OUTBOUND_CONNECT_TIMEOUT_SECS", "5"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_dir, PathBuf::from("/srv/site"));
    assert!(!cfg.serve_static);
    assert_eq!(cfg.supabase_url, "https://example.supabase.co");
    assert_eq!(cfg.supabase_service_key.as_deref(), Some("service"));
    assert!(cfg.memory_subscribers);
    assert_eq!(cfg.elevenlabs_api_key.as_deref(), Some("xi-key"));
    assert_eq!(cfg.timeouts, OutboundTimeouts { request_secs: 30, connect_secs: 5 });
}

#[test]
fn blank_credentials_count_as_absent() {
    let cfg = config_from(&[("SUPABASE_SERVICE_ROLE_KEY", "   "), ("ELEVENLABS_API_KEY", "")]).unwrap();
    assert_eq!(cfg.supabase_service_key, None);
    assert_eq!(cfg.elevenlabs_api_key, None);
}

#[test]
fn invalid_port_is_rejected() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "eighty".into() });
}

#[test]
fn invalid_timeout_is_rejected() {
    let err = config_from(&[("OUTBOUND_TIMEOUT_SECS", "-1")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "OUTBOUND_TIMEOUT_SECS", .. }));
}

#[test]
fn invalid_serve_static_is_rejected() {
    let err = config_from(&[("SERVE_STATIC", "maybe")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "SERVE_STATIC", .. }));
}

#[test]
fn parse_bool_variants() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(raw), Some(true), "expected true for {raw:?}");
    }
    for raw in ["0", "False", "no", "off"] {
        assert_eq!(parse_bool(raw), Some(false), "expected false for {raw:?}");
    }
    assert_eq!(parse_bool(""), None);
    assert_eq!(parse_bool("maybe"), None);
}
