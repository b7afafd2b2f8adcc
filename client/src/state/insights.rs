//! AI wellness insights for the profile page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The profile's data loader publishes a [`WellnessSnapshot`] once through a
//! [`Readiness`](crate::util::ready::Readiness) handle. The panel awaits that
//! single signal, asks the backend for a personalized insight, and settles
//! on exactly one final view: personalized, a sign-in prompt, or one of the
//! static fallbacks.
//!
//! DESIGN
//! ======
//! [`InsightsSession`] is plain state with no borrow held across `.await`:
//! `begin` hands out a ticket, the async resolution runs without touching
//! the session, and `finish` accepts the view only if the ticket is still
//! current. `reset` (sign-out, page re-entry) invalidates outstanding
//! tickets, so a slow response from the previous session is dropped.

#[cfg(test)]
#[path = "insights_test.rs"]
mod insights_test;

use serde::{Deserialize, Serialize};

use crate::net::api::WellnessApi;
use crate::net::types::{
    GoalSuggestionRequest, GoalSuggestionResponse, InsightRequest, MoodAnalysisRequest, MoodAnalysisResponse, MoodLog,
    StreakData, WellnessGoal,
};

/// Static message/affirmation pair shown when no personalized insight is
/// available.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fallback {
    pub message: &'static str,
    pub affirmation: &'static str,
}

pub const FALLBACK_MESSAGES: [Fallback; 8] = [
    Fallback {
        message: "Keep tracking your wellness journey - every step counts!",
        affirmation: "You are capable of amazing things.",
    },
    Fallback {
        message: "Your dedication to self-care makes a real difference.",
        affirmation: "Every day is a chance to grow stronger.",
    },
    Fallback {
        message: "Small steps lead to big changes in your wellbeing.",
        affirmation: "You have the strength to overcome any challenge.",
    },
    Fallback {
        message: "Taking time for yourself is never wasted time.",
        affirmation: "Your mental health matters deeply.",
    },
    Fallback {
        message: "Progress, not perfection, is what truly matters.",
        affirmation: "Be proud of how far you have come.",
    },
    Fallback {
        message: "Your commitment to wellness inspires positive change.",
        affirmation: "You deserve all the happiness in the world.",
    },
    Fallback {
        message: "Checking in with yourself is a powerful habit.",
        affirmation: "Today is full of new possibilities.",
    },
    Fallback {
        message: "Awareness is the first step toward positive growth.",
        affirmation: "You are worthy of love and care.",
    },
];

pub const SIGNED_OUT: Fallback = Fallback {
    message: "Sign in to see your personalized wellness insights.",
    affirmation: "Your journey to wellness starts here.",
};

pub const DEFAULT_TREND: &str = "Stable";
pub const DEFAULT_GOAL_CATEGORY: &str = "mindfulness";

/// Pick a fallback from any seed (random in the browser, fixed in tests).
#[must_use]
pub fn fallback(seed: usize) -> Fallback {
    FALLBACK_MESSAGES[seed % FALLBACK_MESSAGES.len()]
}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Everything the AI endpoints need, as loaded by the profile page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WellnessSnapshot {
    #[serde(default)]
    pub signed_in: bool,
    #[serde(default)]
    pub mood_logs: Vec<MoodLog>,
    #[serde(default)]
    pub goals: Vec<WellnessGoal>,
    #[serde(default)]
    pub streaks: StreakData,
}

impl WellnessSnapshot {
    #[must_use]
    pub fn insight_request(&self) -> InsightRequest {
        InsightRequest { mood_data: self.mood_logs.clone(), goals_data: self.goals.clone(), streak_data: self.streaks }
    }

    #[must_use]
    pub fn mood_request(&self) -> MoodAnalysisRequest {
        MoodAnalysisRequest { mood_entries: self.mood_logs.clone() }
    }

    #[must_use]
    pub fn goal_request(&self) -> GoalSuggestionRequest {
        GoalSuggestionRequest::from_goals(&self.goals)
    }
}

// =============================================================================
// INSIGHT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsightSource {
    Personalized,
    SignedOut,
    Fallback,
}

/// Final panel content. Rendered as text nodes only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsightView {
    pub source: InsightSource,
    pub message: String,
    /// Already wrapped in double quotes.
    pub affirmation: Option<String>,
}

impl InsightView {
    fn from_fallback(source: InsightSource, fallback: Fallback) -> Self {
        Self { source, message: fallback.message.to_owned(), affirmation: Some(quoted(fallback.affirmation)) }
    }
}

fn quoted(text: &str) -> String {
    format!("\"{text}\"")
}

/// Produce the final view for `snapshot`. `None` means the data source went
/// away without publishing.
pub async fn resolve_insight<A: WellnessApi>(api: &A, snapshot: Option<&WellnessSnapshot>, seed: usize) -> InsightView {
    let Some(snapshot) = snapshot else {
        log::warn!("wellness data never became ready; showing fallback insight");
        return InsightView::from_fallback(InsightSource::Fallback, fallback(seed));
    };
    if !snapshot.signed_in {
        return InsightView::from_fallback(InsightSource::SignedOut, SIGNED_OUT);
    }

    match api.insight(&snapshot.insight_request()).await {
        Ok(resp) if resp.success != Some(false) => match resp.insight.filter(|s| !s.is_empty()) {
            Some(insight) => {
                log::info!("loaded personalized insight");
                InsightView {
                    source: InsightSource::Personalized,
                    message: insight,
                    affirmation: resp.affirmation.filter(|s| !s.is_empty()).map(|a| quoted(&a)),
                }
            }
            None => {
                log::info!("insight response had no insight; showing fallback");
                InsightView::from_fallback(InsightSource::Fallback, fallback(seed))
            }
        },
        Ok(_) => {
            log::info!("insight endpoint reported failure; showing fallback");
            InsightView::from_fallback(InsightSource::Fallback, fallback(seed))
        }
        Err(err) => {
            log::warn!("insight request failed: {err}");
            InsightView::from_fallback(InsightSource::Fallback, fallback(seed))
        }
    }
}

/// Ticketed once-per-session guard around [`resolve_insight`].
#[derive(Clone, Debug, Default)]
pub struct InsightsSession {
    generation: u64,
    in_flight: bool,
    view: Option<InsightView>,
}

impl InsightsSession {
    #[must_use]
    pub fn init() -> Self {
        Self::default()
    }

    /// Claim the load. `None` if a final view is already showing or a load
    /// is in flight.
    pub fn begin(&mut self) -> Option<u64> {
        if self.view.is_some() || self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(self.generation)
    }

    /// Accept `view` for `ticket`. Stale tickets are ignored.
    pub fn finish(&mut self, ticket: u64, view: InsightView) -> bool {
        if ticket != self.generation || !self.in_flight {
            return false;
        }
        self.in_flight = false;
        self.view = Some(view);
        true
    }

    pub fn reset(&mut self) {
        self.generation += 1;
        self.in_flight = false;
        self.view = None;
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.view.is_some()
    }

    #[must_use]
    pub fn view(&self) -> Option<&InsightView> {
        self.view.as_ref()
    }
}

// =============================================================================
// MOOD ANALYSIS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoodTrend {
    /// First word of the analysis.
    pub label: String,
    /// Full analysis text.
    pub tooltip: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoodInsight {
    pub trend: Option<MoodTrend>,
    pub suggestion: Option<String>,
}

/// Interpret a mood analysis response. `None` when the endpoint reported
/// failure.
#[must_use]
pub fn mood_insight(resp: MoodAnalysisResponse) -> Option<MoodInsight> {
    if resp.success == Some(false) {
        return None;
    }
    let trend = resp.analysis.filter(|a| !a.is_empty()).map(|analysis| MoodTrend {
        label: analysis
            .split(' ')
            .next()
            .filter(|word| !word.is_empty())
            .unwrap_or(DEFAULT_TREND)
            .to_owned(),
        tooltip: analysis,
    });
    Some(MoodInsight { trend, suggestion: resp.suggestion.filter(|s| !s.is_empty()) })
}

/// Fetch and interpret the mood analysis. Signed-out users and failures
/// yield `None`.
pub async fn resolve_mood<A: WellnessApi>(api: &A, snapshot: &WellnessSnapshot) -> Option<MoodInsight> {
    if !snapshot.signed_in {
        return None;
    }
    match api.mood_analysis(&snapshot.mood_request()).await {
        Ok(resp) => mood_insight(resp),
        Err(err) => {
            log::warn!("mood analysis failed: {err}");
            None
        }
    }
}

// =============================================================================
// GOAL SUGGESTION
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalSuggestion {
    pub goal: String,
    pub why: String,
    pub category: String,
}

#[must_use]
pub fn goal_suggestion(resp: GoalSuggestionResponse) -> Option<GoalSuggestion> {
    if resp.success == Some(false) {
        return None;
    }
    let goal = resp.goal.filter(|g| !g.is_empty())?;
    Some(GoalSuggestion {
        goal,
        why: resp.why.unwrap_or_default(),
        category: resp
            .category
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_GOAL_CATEGORY.to_owned()),
    })
}

pub async fn resolve_goal<A: WellnessApi>(api: &A, snapshot: &WellnessSnapshot) -> Option<GoalSuggestion> {
    if !snapshot.signed_in {
        return None;
    }
    match api.goal_suggestion(&snapshot.goal_request()).await {
        Ok(resp) => goal_suggestion(resp),
        Err(err) => {
            log::warn!("goal suggestion failed: {err}");
            None
        }
    }
}
