use std::cell::Cell;

use futures::executor::block_on;

use super::*;
use crate::error::RemoteError;
use crate::net::types::{InsightResponse, MoodAnalysisResponse};
use crate::util::ready::readiness;

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct FakeApi {
    insight: Option<Result<InsightResponse, RemoteError>>,
    mood: Option<Result<MoodAnalysisResponse, RemoteError>>,
    goal: Option<Result<GoalSuggestionResponse, RemoteError>>,
    calls: Cell<u32>,
    last_goal_request: std::cell::RefCell<Option<GoalSuggestionRequest>>,
}

impl WellnessApi for FakeApi {
    async fn insight(&self, _request: &InsightRequest) -> Result<InsightResponse, RemoteError> {
        self.calls.set(self.calls.get() + 1);
        self.insight.clone().unwrap_or(Err(RemoteError::Unavailable))
    }

    async fn mood_analysis(&self, _request: &MoodAnalysisRequest) -> Result<MoodAnalysisResponse, RemoteError> {
        self.calls.set(self.calls.get() + 1);
        self.mood.clone().unwrap_or(Err(RemoteError::Unavailable))
    }

    async fn goal_suggestion(&self, request: &GoalSuggestionRequest) -> Result<GoalSuggestionResponse, RemoteError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_goal_request.borrow_mut() = Some(request.clone());
        self.goal.clone().unwrap_or(Err(RemoteError::Unavailable))
    }
}

fn signed_in() -> WellnessSnapshot {
    WellnessSnapshot {
        signed_in: true,
        goals: vec![
            WellnessGoal { id: "g1".to_owned(), title: "Walk".to_owned(), category: None, completed: true },
            WellnessGoal { id: "g2".to_owned(), title: "Read".to_owned(), category: None, completed: false },
        ],
        ..WellnessSnapshot::default()
    }
}

// =============================================================
// Insight
// =============================================================

#[test]
fn personalized_insight_is_shown_with_quoted_affirmation() {
    let api = FakeApi {
        insight: Some(Ok(InsightResponse {
            success: Some(true),
            insight: Some("Your mood is trending up.".to_owned()),
            affirmation: Some("Keep going.".to_owned()),
        })),
        ..FakeApi::default()
    };
    let view = block_on(resolve_insight(&api, Some(&signed_in()), 0));
    assert_eq!(view.source, InsightSource::Personalized);
    assert_eq!(view.message, "Your mood is trending up.");
    assert_eq!(view.affirmation.as_deref(), Some("\"Keep going.\""));
}

#[test]
fn signed_out_gets_prompt_without_calling_api() {
    let api = FakeApi::default();
    let view = block_on(resolve_insight(&api, Some(&WellnessSnapshot::default()), 3));
    assert_eq!(view.source, InsightSource::SignedOut);
    assert_eq!(view.message, SIGNED_OUT.message);
    assert_eq!(api.calls.get(), 0);
}

#[test]
fn explicit_failure_uses_seeded_fallback() {
    let api = FakeApi {
        insight: Some(Ok(InsightResponse { success: Some(false), insight: Some("x".to_owned()), affirmation: None })),
        ..FakeApi::default()
    };
    let view = block_on(resolve_insight(&api, Some(&signed_in()), 9));
    assert_eq!(view.source, InsightSource::Fallback);
    assert_eq!(view.message, FALLBACK_MESSAGES[1].message);
    assert_eq!(view.affirmation, Some(format!("\"{}\"", FALLBACK_MESSAGES[1].affirmation)));
}

#[test]
fn timeout_and_missing_insight_fall_back() {
    let api = FakeApi { insight: Some(Err(RemoteError::Timeout { secs: 15 })), ..FakeApi::default() };
    assert_eq!(block_on(resolve_insight(&api, Some(&signed_in()), 0)).source, InsightSource::Fallback);

    let api = FakeApi { insight: Some(Ok(InsightResponse::default())), ..FakeApi::default() };
    assert_eq!(block_on(resolve_insight(&api, Some(&signed_in()), 0)).source, InsightSource::Fallback);
}

#[test]
fn dropped_publisher_resolves_to_fallback() {
    let (publisher, ready) = readiness::<WellnessSnapshot>();
    drop(publisher);
    let api = FakeApi::default();
    let view = block_on(async {
        let snapshot = ready.wait().await;
        resolve_insight(&api, snapshot.as_ref(), 2).await
    });
    assert_eq!(view.message, FALLBACK_MESSAGES[2].message);
    assert_eq!(api.calls.get(), 0);
}

#[test]
fn published_snapshot_drives_personalized_load() {
    let (publisher, ready) = readiness::<WellnessSnapshot>();
    assert!(publisher.publish(signed_in()));
    let api = FakeApi {
        insight: Some(Ok(InsightResponse { success: None, insight: Some("Nice.".to_owned()), affirmation: None })),
        ..FakeApi::default()
    };
    let view = block_on(async {
        let snapshot = ready.wait().await;
        resolve_insight(&api, snapshot.as_ref(), 0).await
    });
    assert_eq!(view.source, InsightSource::Personalized);
    assert_eq!(view.affirmation, None);
}

#[test]
fn fallback_pool_has_eight_distinct_messages() {
    let mut messages: Vec<_> = FALLBACK_MESSAGES.iter().map(|f| f.message).collect();
    messages.sort_unstable();
    messages.dedup();
    assert_eq!(messages.len(), 8);
}

// =============================================================
// Session
// =============================================================

fn view(message: &str) -> InsightView {
    InsightView { source: InsightSource::Fallback, message: message.to_owned(), affirmation: None }
}

#[test]
fn session_loads_once() {
    let mut session = InsightsSession::init();
    let ticket = session.begin().unwrap();
    assert_eq!(session.begin(), None, "in-flight load blocks a second one");
    assert!(session.finish(ticket, view("a")));
    assert!(session.is_loaded());
    assert_eq!(session.begin(), None, "loaded session ignores further loads");
}

#[test]
fn reset_discards_stale_results() {
    let mut session = InsightsSession::init();
    let stale = session.begin().unwrap();
    session.reset();
    assert!(!session.finish(stale, view("old")));
    assert!(!session.is_loaded());

    let fresh = session.begin().unwrap();
    assert!(session.finish(fresh, view("new")));
    assert_eq!(session.view().unwrap().message, "new");
}

#[test]
fn reset_after_load_allows_reload() {
    let mut session = InsightsSession::init();
    let t = session.begin().unwrap();
    session.finish(t, view("a"));
    session.reset();
    assert!(session.begin().is_some());
}

// =============================================================
// Mood and goal
// =============================================================

#[test]
fn mood_trend_is_first_word_of_analysis() {
    let insight = mood_insight(MoodAnalysisResponse {
        success: Some(true),
        analysis: Some("Improving steadily over the week".to_owned()),
        suggestion: Some("Keep journaling".to_owned()),
    })
    .unwrap();
    let trend = insight.trend.unwrap();
    assert_eq!(trend.label, "Improving");
    assert_eq!(trend.tooltip, "Improving steadily over the week");
    assert_eq!(insight.suggestion.as_deref(), Some("Keep journaling"));
}

#[test]
fn leading_space_analysis_defaults_to_stable() {
    let insight = mood_insight(MoodAnalysisResponse { success: None, analysis: Some(" odd".to_owned()), suggestion: None })
        .unwrap();
    assert_eq!(insight.trend.unwrap().label, DEFAULT_TREND);
}

#[test]
fn failed_mood_analysis_is_none() {
    assert_eq!(mood_insight(MoodAnalysisResponse { success: Some(false), ..Default::default() }), None);
    let api = FakeApi { mood: Some(Err(RemoteError::Status(500))), ..FakeApi::default() };
    assert_eq!(block_on(resolve_mood(&api, &signed_in())), None);
}

#[test]
fn goal_suggestion_defaults_category() {
    let suggestion = goal_suggestion(GoalSuggestionResponse {
        success: None,
        goal: Some("Try a 5 minute meditation".to_owned()),
        why: None,
        category: None,
    })
    .unwrap();
    assert_eq!(suggestion.category, "mindfulness");
    assert_eq!(suggestion.why, "");
}

#[test]
fn goal_suggestion_requires_goal_text() {
    assert_eq!(goal_suggestion(GoalSuggestionResponse::default()), None);
    assert_eq!(
        goal_suggestion(GoalSuggestionResponse { success: Some(false), goal: Some("x".to_owned()), ..Default::default() }),
        None
    );
}

#[test]
fn resolve_goal_splits_goals_and_skips_signed_out() {
    let api = FakeApi {
        goal: Some(Ok(GoalSuggestionResponse { goal: Some("Sleep early".to_owned()), ..Default::default() })),
        ..FakeApi::default()
    };
    assert_eq!(block_on(resolve_goal(&api, &WellnessSnapshot::default())), None);
    assert_eq!(api.calls.get(), 0);

    let suggestion = block_on(resolve_goal(&api, &signed_in())).unwrap();
    assert_eq!(suggestion.goal, "Sleep early");
    let sent = api.last_goal_request.borrow().clone().unwrap();
    assert_eq!(sent.completed_goals.len(), 1);
    assert_eq!(sent.current_goals[0].id, "g2");
}
