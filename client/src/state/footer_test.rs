use super::*;

#[test]
fn back_to_top_shows_strictly_past_threshold() {
    assert!(!back_to_top_visible(0.0));
    assert!(!back_to_top_visible(400.0));
    assert!(back_to_top_visible(401.0));
}

#[test]
fn email_pattern_matches_server_rule() {
    assert!(is_valid_email("someone@example.com"));
    assert!(is_valid_email("first.last+tag@sub.example.co"));
    assert!(!is_valid_email("no-at-sign.com"));
    assert!(!is_valid_email("a@b.c"));
    assert!(!is_valid_email("a b@example.com"));
    assert!(!is_valid_email("a@example.c0m"));
}

#[test]
fn accordion_toggles_from_attribute() {
    assert!(toggled_expanded(None));
    assert!(toggled_expanded(Some("false")));
    assert!(!toggled_expanded(Some("true")));
}

// =============================================================
// Newsletter form
// =============================================================

#[test]
fn blank_submit_is_ignored() {
    let mut form = NewsletterForm::new();
    assert_eq!(form.submit("   "), Err(ValidationError::MissingEmail));
    assert_eq!(form.phase(), FormPhase::Idle);
}

#[test]
fn submit_trims_and_tags_source() {
    let mut form = NewsletterForm::new();
    let req = form.submit("  me@example.org ").unwrap();
    assert_eq!(req.email, "me@example.org");
    assert_eq!(req.source, "footer");
    assert_eq!(form.phase(), FormPhase::Submitting);
    assert!(form.button_disabled(0.0));
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let mut form = NewsletterForm::new();
    form.submit("me@example.org").unwrap();
    assert_eq!(form.submit("me@example.org"), Err(ValidationError::MissingEmail));
}

#[test]
fn invalid_email_rejects_with_error_toast() {
    let mut form = NewsletterForm::new();
    let err = form.submit("nope").unwrap_err();
    assert_eq!(err, ValidationError::InvalidEmail);
    form.reject(&err, 10.0);
    let toast = form.toast(10.0).unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Invalid email address");
}

#[test]
fn success_acknowledges_for_three_seconds() {
    let mut form = NewsletterForm::new();
    form.submit("me@example.org").unwrap();
    let body = SubscribeResponse {
        success: Some(true),
        message: Some("Thanks for subscribing! Welcome to our community.".to_owned()),
        ..SubscribeResponse::default()
    };
    assert!(form.complete(Ok(body), 1_000.0));
    assert_eq!(form.phase(), FormPhase::Subscribed);
    assert!(form.button_acknowledged(3_999.0));
    assert_eq!(form.toast(3_999.0).unwrap().message, "Thanks for subscribing! Welcome to our community.");
    assert!(!form.button_acknowledged(4_000.0));
    assert!(form.toast(4_000.0).is_none());

    form.settle(4_000.0);
    assert_eq!(form.phase(), FormPhase::Idle);
    assert!(!form.button_disabled(4_000.0));
}

#[test]
fn server_error_body_is_shown() {
    let mut form = NewsletterForm::new();
    form.submit("me@example.org").unwrap();
    let body = SubscribeResponse { error: Some("Failed to subscribe. Please try again.".to_owned()), ..Default::default() };
    assert!(!form.complete(Ok(body), 0.0));
    assert_eq!(form.phase(), FormPhase::Failed);
    assert_eq!(form.toast(0.0).unwrap().message, "Failed to subscribe. Please try again.");
    assert!(!form.button_disabled(0.0));
}

#[test]
fn transport_failure_shows_generic_retry() {
    let mut form = NewsletterForm::new();
    form.submit("me@example.org").unwrap();
    form.complete(Err(RemoteError::Timeout { secs: 15 }), 0.0);
    assert_eq!(form.toast(0.0).unwrap().message, GENERIC_FAILURE_MESSAGE);
}

#[test]
fn missing_message_uses_default_success_text() {
    let mut form = NewsletterForm::new();
    form.submit("me@example.org").unwrap();
    form.complete(Ok(SubscribeResponse::default()), 0.0);
    assert_eq!(form.toast(0.0).unwrap().message, DEFAULT_SUCCESS_MESSAGE);
}
