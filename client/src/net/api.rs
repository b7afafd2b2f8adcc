//! REST helpers for the site's JSON endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each bounded by
//! [`OUTBOUND_TIMEOUT_MS`].
//! Native builds: every call resolves to [`RemoteError::Unavailable`] since
//! these endpoints only exist behind a browser origin.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a slow or failing
//! backend degrades the widget to static fallback content. The newsletter
//! endpoint is special: its 4xx/5xx bodies carry the user-facing message, so
//! [`subscribe`] parses the body whatever the status.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{
    GoalSuggestionRequest, GoalSuggestionResponse, InsightRequest, InsightResponse, MoodAnalysisRequest,
    MoodAnalysisResponse, SubscribeRequest, SubscribeResponse,
};
use crate::error::RemoteError;
use crate::util::i18n::{Translations, translations_path};

/// Upper bound on any outbound call, clipboard writes included.
pub const OUTBOUND_TIMEOUT_MS: u32 = 15_000;
pub const OUTBOUND_TIMEOUT_SECS: u64 = 15;

pub const NEWSLETTER_ENDPOINT: &str = "/api/newsletter";
pub const INSIGHTS_ENDPOINT: &str = "/api/wellness/insights";
pub const MOOD_ANALYSIS_ENDPOINT: &str = "/api/wellness/mood-analysis";
pub const GOAL_SUGGESTION_ENDPOINT: &str = "/api/wellness/goal-suggestion";

// =============================================================================
// RESPONSE HANDLING
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), RemoteError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RemoteError::Status(status))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_body<T: DeserializeOwned>(raw: &str) -> Result<T, RemoteError> {
    serde_json::from_str(raw).map_err(|e| RemoteError::Parse(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn with_timeout<T>(fut: impl Future<Output = Result<T, RemoteError>>) -> Result<T, RemoteError> {
    use futures::future::{Either, select};
    use std::pin::pin;

    let fut = pin!(fut);
    let timer = pin!(gloo_timers::future::TimeoutFuture::new(OUTBOUND_TIMEOUT_MS));
    match select(fut, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(RemoteError::Timeout { secs: OUTBOUND_TIMEOUT_SECS }),
    }
}

/// POST `body` as JSON and return the raw status and text.
#[cfg(feature = "hydrate")]
async fn post_raw<B: serde::Serialize>(url: &str, body: &B) -> Result<(u16, String), RemoteError> {
    let request = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| RemoteError::Transport(e.to_string()))?;
    let resp = request
        .send()
        .await
        .map_err(|e| RemoteError::Transport(e.to_string()))?;
    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| RemoteError::Transport(e.to_string()))?;
    Ok((status, text))
}

async fn post_json<B, T>(url: &str, body: &B) -> Result<T, RemoteError>
where
    B: serde::Serialize,
    T: DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        with_timeout(async {
            let (status, text) = post_raw(url, body).await?;
            check_status(status)?;
            parse_body(&text)
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(RemoteError::Unavailable)
    }
}

// =============================================================================
// ENDPOINTS
// =============================================================================

/// Fetch `/i18n/{lang}.json`.
///
/// # Errors
///
/// Any transport, status, or parse failure. Callers keep their previous
/// table on error.
pub async fn fetch_translations(lang: &str) -> Result<Translations, RemoteError> {
    #[cfg(feature = "hydrate")]
    {
        let url = translations_path(lang);
        with_timeout(async {
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| RemoteError::Transport(e.to_string()))?;
            check_status(resp.status())?;
            let text = resp
                .text()
                .await
                .map_err(|e| RemoteError::Transport(e.to_string()))?;
            Translations::from_json(lang, &text)
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = translations_path(lang);
        Err(RemoteError::Unavailable)
    }
}

/// `POST /api/newsletter`. Error statuses still yield `Ok` with the body's
/// `error` text.
///
/// # Errors
///
/// Transport failures, timeouts, and bodies that are not JSON.
pub async fn subscribe(request: &SubscribeRequest) -> Result<SubscribeResponse, RemoteError> {
    #[cfg(feature = "hydrate")]
    {
        with_timeout(async {
            let (status, text) = post_raw(NEWSLETTER_ENDPOINT, request).await?;
            parse_subscribe_body(status, &text)
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(RemoteError::Unavailable)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_subscribe_body(status: u16, raw: &str) -> Result<SubscribeResponse, RemoteError> {
    match parse_body::<SubscribeResponse>(raw) {
        Ok(body) => Ok(body),
        Err(err) => {
            check_status(status)?;
            Err(err)
        }
    }
}

/// Backend seam for the profile's AI features.
#[allow(async_fn_in_trait)]
pub trait WellnessApi {
    async fn insight(&self, request: &InsightRequest) -> Result<InsightResponse, RemoteError>;
    async fn mood_analysis(&self, request: &MoodAnalysisRequest) -> Result<MoodAnalysisResponse, RemoteError>;
    async fn goal_suggestion(&self, request: &GoalSuggestionRequest) -> Result<GoalSuggestionResponse, RemoteError>;
}

/// [`WellnessApi`] over same-origin HTTP.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpWellnessApi;

impl WellnessApi for HttpWellnessApi {
    async fn insight(&self, request: &InsightRequest) -> Result<InsightResponse, RemoteError> {
        post_json(INSIGHTS_ENDPOINT, request).await
    }

    async fn mood_analysis(&self, request: &MoodAnalysisRequest) -> Result<MoodAnalysisResponse, RemoteError> {
        post_json(MOOD_ANALYSIS_ENDPOINT, request).await
    }

    async fn goal_suggestion(&self, request: &GoalSuggestionRequest) -> Result<GoalSuggestionResponse, RemoteError> {
        post_json(GOAL_SUGGESTION_ENDPOINT, request).await
    }
}
