use super::*;

#[test]
fn check_status_accepts_2xx_only() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(204), Ok(()));
    assert_eq!(check_status(404), Err(RemoteError::Status(404)));
    assert_eq!(check_status(500), Err(RemoteError::Status(500)));
}

#[test]
fn parse_body_reports_parse_errors() {
    let err = parse_body::<InsightResponse>("<html>").unwrap_err();
    assert!(matches!(err, RemoteError::Parse(_)));
}

#[test]
fn subscribe_body_is_read_even_on_error_status() {
    let body = parse_subscribe_body(400, r#"{"error":"Email is required"}"#).unwrap();
    assert_eq!(body.error.as_deref(), Some("Email is required"));
}

#[test]
fn unparseable_subscribe_body_surfaces_status_first() {
    assert_eq!(parse_subscribe_body(502, "Bad Gateway"), Err(RemoteError::Status(502)));
    assert!(matches!(parse_subscribe_body(200, "oops"), Err(RemoteError::Parse(_))));
}

#[test]
fn native_calls_are_unavailable() {
    let req = SubscribeRequest { email: "a@b.co".to_owned(), source: "footer".to_owned() };
    assert_eq!(futures::executor::block_on(subscribe(&req)), Err(RemoteError::Unavailable));
    assert_eq!(futures::executor::block_on(fetch_translations("en")), Err(RemoteError::Unavailable));
    let insight = futures::executor::block_on(HttpWellnessApi.insight(&InsightRequest::default()));
    assert_eq!(insight, Err(RemoteError::Unavailable));
}

#[test]
fn timeout_constants_agree() {
    assert_eq!(u64::from(OUTBOUND_TIMEOUT_MS) / 1000, OUTBOUND_TIMEOUT_SECS);
}
