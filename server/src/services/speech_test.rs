use super::*;

#[test]
fn every_listed_voice_has_a_provider_id() {
    for voice in VOICES {
        assert!(voice_id(voice.id).is_some(), "no provider id for {}", voice.id);
    }
}

#[test]
fn bella_is_accepted_but_not_listed() {
    assert_eq!(voice_id("bella"), voice_id("rachel"));
    assert!(VOICES.iter().all(|v| v.id != "bella"));
}

#[test]
fn missing_voice_uses_rachel_regardless_of_language() {
    assert_eq!(resolve_voice(None, Some("fr")), voice_id("rachel").unwrap());
}

#[test]
fn known_voice_wins_over_language() {
    assert_eq!(resolve_voice(Some("josh"), Some("es")), voice_id("josh").unwrap());
}

#[test]
fn unknown_voice_falls_back_by_language() {
    assert_eq!(resolve_voice(Some("nobody"), Some("es")), voice_id("adam").unwrap());
    assert_eq!(resolve_voice(Some("nobody"), Some("zh")), voice_id("adam").unwrap());
    assert_eq!(resolve_voice(Some("nobody"), Some("hi")), voice_id("adam").unwrap());
    assert_eq!(resolve_voice(Some("nobody"), Some("fr")), voice_id("antoni").unwrap());
    assert_eq!(resolve_voice(Some("nobody"), Some("en")), voice_id("rachel").unwrap());
    assert_eq!(resolve_voice(Some("nobody"), Some("de")), voice_id("rachel").unwrap());
    assert_eq!(resolve_voice(Some("nobody"), None), voice_id("rachel").unwrap());
}

#[test]
fn quota_classification() {
    let rate_limited = SpeechError::Response { status: 429, body: String::new() };
    assert!(rate_limited.is_quota());

    let quota_body = SpeechError::Response {
        status: 401,
        body: r#"{"detail":{"status":"quota_exceeded"}}"#.into(),
    };
    assert!(quota_body.is_quota());

    let limit_message = SpeechError::Request("character LIMIT reached".into());
    assert!(limit_message.is_quota());

    let other = SpeechError::Response { status: 500, body: "internal".into() };
    assert!(!other.is_quota());
}

#[test]
fn client_builds() {
    let timeouts = OutboundTimeouts { request_secs: 15, connect_secs: 10 };
    assert!(ElevenLabs::new("key".into(), timeouts).is_ok());
}
