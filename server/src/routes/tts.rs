//! `/api/tts/*`: voice list and speech generation for the read-aloud button.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

use super::{cors_headers, json_error};
use crate::services::speech::{MAX_TEXT_CHARS, VOICES, resolve_voice};
use crate::state::AppState;

const VOICES_METHODS: &str = "GET, OPTIONS";
const GENERATE_METHODS: &str = "POST, OPTIONS";
const AUDIO_CACHE_CONTROL: &str = "public, max-age=3600";

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    voice: Option<String>,
    #[serde(default)]
    language: Option<String>,
}

/// `GET /api/tts/voices`
pub async fn voices(State(state): State<AppState>) -> Response {
    (
        StatusCode::OK,
        cors_headers(VOICES_METHODS),
        Json(serde_json::json!({ "voices": VOICES, "available": state.speech.is_some() })),
    )
        .into_response()
}

/// `OPTIONS /api/tts/voices`
pub async fn voices_preflight() -> Response {
    (StatusCode::OK, cors_headers(VOICES_METHODS)).into_response()
}

/// `OPTIONS /api/tts/generate`
pub async fn generate_preflight() -> Response {
    (StatusCode::OK, cors_headers(GENERATE_METHODS)).into_response()
}

/// `POST /api/tts/generate`: MP3 audio for `{text, voice?, language?}`.
pub async fn generate(State(state): State<AppState>, body: Bytes) -> Response {
    let Some(speech) = state.speech.clone() else {
        return json_error(StatusCode::INTERNAL_SERVER_ERROR, GENERATE_METHODS, "ElevenLabs API key not configured");
    };
    let Ok(request) = serde_json::from_slice::<GenerateRequest>(&body) else {
        return json_error(StatusCode::BAD_REQUEST, GENERATE_METHODS, "Invalid JSON");
    };

    let text = request.text.as_deref().unwrap_or_default().trim();
    if text.is_empty() {
        return json_error(StatusCode::BAD_REQUEST, GENERATE_METHODS, "No text provided");
    }
    if text.chars().count() > MAX_TEXT_CHARS {
        return json_error(
            StatusCode::BAD_REQUEST,
            GENERATE_METHODS,
            format!("Text too long (max {MAX_TEXT_CHARS} characters)"),
        );
    }

    let voice_id = resolve_voice(request.voice.as_deref(), request.language.as_deref());
    match speech.synthesize(text, voice_id).await {
        Ok(audio) => (
            StatusCode::OK,
            cors_headers(GENERATE_METHODS),
            [(header::CONTENT_TYPE, "audio/mpeg"), (header::CACHE_CONTROL, AUDIO_CACHE_CONTROL)],
            audio,
        )
            .into_response(),
        Err(e) if e.is_quota() => {
            tracing::warn!(error = %e, "speech quota exhausted");
            json_error(
                StatusCode::TOO_MANY_REQUESTS,
                GENERATE_METHODS,
                "API quota exceeded. Please try again later or use browser voice.",
            )
        }
        Err(e) => {
            tracing::error!(error = %e, chars = text.chars().count(), "speech generation failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, GENERATE_METHODS, format!("TTS generation failed: {e}"))
        }
    }
}

#[cfg(test)]
#[path = "tts_test.rs"]
mod tests;
