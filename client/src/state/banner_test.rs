use super::*;

// =============================================================
// Quotes
// =============================================================

#[test]
fn quote_view_uses_fallback_and_prefixes_author() {
    let view = quote_view(2, &Translations::empty("en"));
    assert_eq!(view.text, "There is hope, even when your brain tells you there isn't.");
    assert_eq!(view.author, "— John Green");
}

#[test]
fn quote_view_prefers_translation() {
    let t = Translations::from_json("es", r#"{"quote_4_text":"El autocuidado...","quote_4_author":"Lalah Delia"}"#).unwrap();
    let view = quote_view(3, &t);
    assert_eq!(view.text, "El autocuidado...");
}

#[test]
fn every_quote_has_fallback_text_and_author() {
    let t = Translations::empty("en");
    for i in 0..QUOTES.len() {
        let view = quote_view(i, &t);
        assert!(!view.text.starts_with("quote_"), "quote {i} missing fallback text");
        assert!(!view.author.contains("quote_"), "quote {i} missing fallback author");
    }
}

#[test]
fn dot_label_is_one_based() {
    assert_eq!(dot_label(0), "Quote 1 of 7");
    assert_eq!(dot_label(6), "Quote 7 of 7");
}

// =============================================================
// Rotation
// =============================================================

#[test]
fn rotation_starts_unless_reduced_motion() {
    let (r, cmd) = QuoteRotation::new(false);
    assert_eq!(cmd, RotationCommand::Start);
    assert!(r.is_rotating());

    let (r, cmd) = QuoteRotation::new(true);
    assert_eq!(cmd, RotationCommand::Keep);
    assert!(!r.is_rotating());
}

#[test]
fn next_wraps_after_last_quote() {
    let (mut r, _) = QuoteRotation::new(false);
    for _ in 0..6 {
        r.next();
    }
    assert_eq!(r.current(), 6);
    assert_eq!(r.next(), 0);
}

#[test]
fn go_to_pauses_then_requests_resume() {
    let (mut r, _) = QuoteRotation::new(false);
    assert_eq!(r.go_to(4), Ok(RotationCommand::StopThenResume));
    assert_eq!(r.current(), 4);
    assert!(!r.is_rotating());
    assert_eq!(r.resume(), RotationCommand::Start);
    assert!(r.is_rotating());
}

#[test]
fn go_to_under_reduced_motion_never_resumes() {
    let (mut r, _) = QuoteRotation::new(true);
    assert_eq!(r.go_to(1), Ok(RotationCommand::Stop));
    assert_eq!(r.resume(), RotationCommand::Keep);
}

#[test]
fn go_to_out_of_range_is_rejected() {
    let (mut r, _) = QuoteRotation::new(false);
    assert_eq!(r.go_to(7), Err(ValidationError::QuoteOutOfRange { index: 7, len: 7 }));
    assert_eq!(r.current(), 0);
}

#[test]
fn hover_pauses_and_leave_resumes() {
    let (mut r, _) = QuoteRotation::new(false);
    assert_eq!(r.pointer_enter(), RotationCommand::Stop);
    assert_eq!(r.pointer_leave(), RotationCommand::Start);
}

#[test]
fn focus_within_keeps_rotation_paused() {
    let (mut r, _) = QuoteRotation::new(false);
    r.focus_in();
    assert_eq!(r.focus_out(true), RotationCommand::Keep);
    assert!(!r.is_rotating());
    assert_eq!(r.focus_out(false), RotationCommand::Start);
}

#[test]
fn resume_waits_while_hovered() {
    let (mut r, _) = QuoteRotation::new(false);
    r.pointer_enter();
    r.go_to(2).unwrap();
    assert_eq!(r.resume(), RotationCommand::Keep);
    assert_eq!(r.pointer_leave(), RotationCommand::Start);
}

// =============================================================
// Wellness tip
// =============================================================

#[test]
fn tip_matches_weekday() {
    let t = Translations::empty("en");
    let sunday = tip_for_weekday(0, &t);
    assert_eq!(sunday.title, "Start Fresh");
    assert_eq!(sunday.link, "/articles/mindfulness.html");
    assert_eq!(sunday.day_label, "Sunday's wellness focus");

    let saturday = tip_for_weekday(6, &t);
    assert_eq!(saturday.title, "Rest & Recharge");
    assert_eq!(saturday.icon, "💤");
}

#[test]
fn tip_weekday_wraps() {
    let t = Translations::empty("en");
    assert_eq!(tip_for_weekday(8, &t), tip_for_weekday(1, &t));
}
