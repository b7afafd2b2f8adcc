//! Request and response bodies for the site's JSON endpoints.
//!
//! DESIGN
//! ======
//! Response types are lenient: every field the backend may omit is an
//! `Option` or carries a serde default, because callers treat a partial body
//! as "no result" and fall back to static content rather than failing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// NEWSLETTER
// =============================================================================

/// Body of `POST /api/newsletter`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
    /// Where the form lives, e.g. `"footer"`.
    pub source: String,
}

/// Success and error bodies of `POST /api/newsletter` share this shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub already_subscribed: Option<bool>,
}

// =============================================================================
// WELLNESS DATA
// =============================================================================

/// One mood check-in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoodLog {
    /// Self-reported level, typically 1 to 5.
    #[serde(deserialize_with = "deserialize_i32_from_number")]
    pub mood_level: i32,
    #[serde(default)]
    pub note: Option<String>,
    /// ISO-8601 timestamp.
    pub created_at: String,
}

/// A user wellness goal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessGoal {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Current and best check-in streaks. Missing or null counts read as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakData {
    #[serde(default, deserialize_with = "deserialize_count_or_zero")]
    pub current_streak: u32,
    #[serde(default, deserialize_with = "deserialize_count_or_zero")]
    pub longest_streak: u32,
}

// =============================================================================
// AI ENDPOINTS
// =============================================================================

/// Body of `POST /api/wellness/insights`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightRequest {
    pub mood_data: Vec<MoodLog>,
    pub goals_data: Vec<WellnessGoal>,
    pub streak_data: StreakData,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub insight: Option<String>,
    #[serde(default)]
    pub affirmation: Option<String>,
}

/// Body of `POST /api/wellness/mood-analysis`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodAnalysisRequest {
    pub mood_entries: Vec<MoodLog>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodAnalysisResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub analysis: Option<String>,
    #[serde(default)]
    pub suggestion: Option<String>,
}

/// Body of `POST /api/wellness/goal-suggestion`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalSuggestionRequest {
    pub current_goals: Vec<WellnessGoal>,
    pub completed_goals: Vec<WellnessGoal>,
}

impl GoalSuggestionRequest {
    /// Split `goals` by completion, preserving order.
    #[must_use]
    pub fn from_goals(goals: &[WellnessGoal]) -> Self {
        let (completed_goals, current_goals) = goals.iter().cloned().partition(|g| g.completed);
        Self { current_goals, completed_goals }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalSuggestionResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub why: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

// =============================================================================
// LENIENT NUMBERS
// =============================================================================

fn deserialize_i32_from_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    integer_from_value(&value)
        .ok_or_else(|| D::Error::custom("expected integer-compatible number"))
        .and_then(|int| i32::try_from(int).map_err(|_| D::Error::custom(format!("value {int} out of range for i32"))))
}

fn deserialize_count_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(0);
    }
    let int = integer_from_value(&value).ok_or_else(|| D::Error::custom("expected integer-compatible number"))?;
    Ok(u32::try_from(int.max(0)).unwrap_or(u32::MAX))
}

fn integer_from_value(value: &serde_json::Value) -> Option<i64> {
    let serde_json::Value::Number(number) = value else {
        return None;
    };
    if let Some(int) = number.as_i64() {
        return Some(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    number
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
        .map(|f| f as i64)
}
