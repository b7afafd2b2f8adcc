//! `/api/newsletter`: footer signup.
//!
//! Check order is fixed: method, backend availability, email presence,
//! email shape, existing confirmed row, upsert.

use std::sync::LazyLock;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use regex::Regex;
use serde_json::Value;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::{cors_headers, json_error};
use crate::services::subscribers::SubscriberRecord;
use crate::state::AppState;

const METHODS: &str = "POST, OPTIONS";
pub const DEFAULT_SOURCE: &str = "unknown";

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok());

/// The `email` member of a signup body, read without a fixed schema so a
/// mistyped `source` cannot hide a good address.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum EmailField {
    /// Absent, `null`, `""`, `false` or `0`.
    Missing,
    Text(String),
    /// Present but not a string; never matches the address pattern.
    Other,
}

pub(crate) fn email_field(body: &Value) -> EmailField {
    match body.get("email") {
        None | Some(Value::Null | Value::Bool(false)) => EmailField::Missing,
        Some(Value::String(s)) if s.is_empty() => EmailField::Missing,
        Some(Value::String(s)) => EmailField::Text(s.clone()),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => EmailField::Missing,
        Some(_) => EmailField::Other,
    }
}

/// Non-empty string `source`, else [`DEFAULT_SOURCE`].
pub(crate) fn source_field(body: &Value) -> String {
    body.get("source")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SOURCE)
        .to_owned()
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(email))
}

#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn now_rfc3339() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}

/// `POST|OPTIONS /api/newsletter`
pub async fn subscribe(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    if method == Method::OPTIONS {
        return (StatusCode::OK, cors_headers(METHODS)).into_response();
    }
    if method != Method::POST {
        return json_error(StatusCode::METHOD_NOT_ALLOWED, METHODS, "Method not allowed");
    }
    let Some(store) = state.subscribers.clone() else {
        tracing::error!("subscriber store not configured");
        return json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            METHODS,
            "Newsletter service is not configured. Please try again later.",
        );
    };

    // Unparseable bodies read as empty.
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let email = match email_field(&body) {
        EmailField::Missing => return json_error(StatusCode::BAD_REQUEST, METHODS, "Email is required"),
        EmailField::Text(email) if is_valid_email(&email) => email,
        EmailField::Text(_) | EmailField::Other => {
            return json_error(StatusCode::BAD_REQUEST, METHODS, "Invalid email address");
        }
    };

    let email = normalize_email(&email);
    match store.find(&email).await {
        Ok(Some(existing)) if existing.confirmed => {
            return (
                StatusCode::OK,
                cors_headers(METHODS),
                Json(serde_json::json!({
                    "success": true,
                    "message": "You are already subscribed to our newsletter!",
                    "already_subscribed": true,
                })),
            )
                .into_response();
        }
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "subscriber lookup failed; treating as new"),
    }

    let record = SubscriberRecord {
        email,
        confirmed: true,
        source: source_field(&body),
        subscribed_at: now_rfc3339(),
    };
    if let Err(e) = store.upsert(&record).await {
        tracing::error!(error = %e, "subscriber upsert failed");
        return json_error(StatusCode::INTERNAL_SERVER_ERROR, METHODS, "Failed to subscribe. Please try again.");
    }

    tracing::info!(source = %record.source, "newsletter subscription stored");
    (
        StatusCode::OK,
        cors_headers(METHODS),
        Json(serde_json::json!({
            "success": true,
            "message": "Thanks for subscribing! Welcome to our community.",
        })),
    )
        .into_response()
}

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod tests;
