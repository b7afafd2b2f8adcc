use super::*;

// =============================================================
// Newsletter
// =============================================================

#[test]
fn subscribe_request_serializes_email_and_source() {
    let req = SubscribeRequest { email: "a@b.co".to_owned(), source: "footer".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({"email": "a@b.co", "source": "footer"})
    );
}

#[test]
fn subscribe_response_accepts_error_only_body() {
    let resp: SubscribeResponse = serde_json::from_str(r#"{"error":"Invalid email address"}"#).unwrap();
    assert_eq!(resp.error.as_deref(), Some("Invalid email address"));
    assert_eq!(resp.success, None);
}

#[test]
fn subscribe_response_reads_already_subscribed() {
    let resp: SubscribeResponse = serde_json::from_str(
        r#"{"success":true,"message":"You are already subscribed to our newsletter!","already_subscribed":true}"#,
    )
    .unwrap();
    assert_eq!(resp.already_subscribed, Some(true));
}

// =============================================================
// Wellness data
// =============================================================

#[test]
fn mood_log_accepts_float_encoded_level() {
    let log: MoodLog = serde_json::from_str(r#"{"mood_level":4.0,"note":null,"created_at":"2026-01-01T00:00:00Z"}"#).unwrap();
    assert_eq!(log.mood_level, 4);
    assert_eq!(log.note, None);
}

#[test]
fn mood_log_rejects_fractional_level() {
    let result = serde_json::from_str::<MoodLog>(r#"{"mood_level":3.5,"created_at":"x"}"#);
    assert!(result.is_err());
}

#[test]
fn streak_data_treats_null_and_missing_as_zero() {
    let s: StreakData = serde_json::from_str(r#"{"current_streak":null}"#).unwrap();
    assert_eq!(s, StreakData { current_streak: 0, longest_streak: 0 });
    let s: StreakData = serde_json::from_str(r#"{"current_streak":3,"longest_streak":9}"#).unwrap();
    assert_eq!(s.longest_streak, 9);
}

#[test]
fn streak_data_clamps_negative_counts() {
    let s: StreakData = serde_json::from_str(r#"{"current_streak":-2,"longest_streak":1}"#).unwrap();
    assert_eq!(s.current_streak, 0);
}

#[test]
fn insight_request_matches_endpoint_shape() {
    let req = InsightRequest {
        mood_data: vec![],
        goals_data: vec![],
        streak_data: StreakData { current_streak: 2, longest_streak: 5 },
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({
            "mood_data": [],
            "goals_data": [],
            "streak_data": {"current_streak": 2, "longest_streak": 5}
        })
    );
}

#[test]
fn goal_suggestion_request_splits_by_completion() {
    let goal = |id: &str, completed| WellnessGoal {
        id: id.to_owned(),
        title: format!("goal {id}"),
        category: None,
        completed,
    };
    let req = GoalSuggestionRequest::from_goals(&[goal("1", false), goal("2", true), goal("3", false)]);
    let current: Vec<_> = req.current_goals.iter().map(|g| g.id.as_str()).collect();
    let done: Vec<_> = req.completed_goals.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(current, vec!["1", "3"]);
    assert_eq!(done, vec!["2"]);
}

#[test]
fn ai_responses_tolerate_empty_bodies() {
    let insight: InsightResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(insight, InsightResponse::default());
    let goal: GoalSuggestionResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
    assert_eq!(goal.success, Some(false));
}
