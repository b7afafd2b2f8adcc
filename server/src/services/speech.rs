//! Text-to-speech over the `ElevenLabs` API.
//!
//! Voice keys exposed to the browser map to provider voice ids here. An
//! unknown key falls back to the default voice for the requested language.

use std::time::Duration;

use serde::Serialize;

use crate::config::OutboundTimeouts;

const API_BASE: &str = "https://api.elevenlabs.io/v1/text-to-speech";
pub const MODEL_ID: &str = "eleven_multilingual_v2";
pub const OUTPUT_FORMAT: &str = "mp3_44100_128";
pub const MAX_TEXT_CHARS: usize = 5000;
pub const DEFAULT_VOICE: &str = "rachel";

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("speech request failed: {0}")]
    Request(String),
    #[error("speech provider returned status {status}: {body}")]
    Response { status: u16, body: String },
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl SpeechError {
    /// Provider refused for quota or rate reasons; surfaced as HTTP 429.
    #[must_use]
    pub fn is_quota(&self) -> bool {
        if matches!(self, Self::Response { status: 429, .. }) {
            return true;
        }
        let message = self.to_string().to_ascii_lowercase();
        message.contains("quota") || message.contains("limit")
    }
}

// =============================================================================
// VOICES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Voice {
    pub id: &'static str,
    pub name: &'static str,
    pub language: &'static str,
}

/// Voices offered to the browser picker.
pub const VOICES: [Voice; 8] = [
    Voice { id: "rachel", name: "Rachel (Female, Calm)", language: "en" },
    Voice { id: "adam", name: "Adam (Male, Deep)", language: "en" },
    Voice { id: "antoni", name: "Antoni (Male, Warm)", language: "en" },
    Voice { id: "arnold", name: "Arnold (Male, Crisp)", language: "en" },
    Voice { id: "domi", name: "Domi (Female, Strong)", language: "en" },
    Voice { id: "elli", name: "Elli (Female, Young)", language: "en" },
    Voice { id: "josh", name: "Josh (Male, Warm)", language: "en" },
    Voice { id: "sam", name: "Sam (Male, Friendly)", language: "en" },
];

/// Voice key to provider voice id. `bella` is accepted but not listed.
const VOICE_IDS: [(&str, &str); 9] = [
    ("rachel", "EXAVITQu4vr4xnSDxMaL"),
    ("adam", "21m00Tcm4TlvDq8ikWAM"),
    ("antoni", "ErXwobaYiN019PkySvjV"),
    ("arnold", "VR6AewLTigWG4xSOukaG"),
    ("bella", "EXAVITQu4vr4xnSDxMaL"),
    ("domi", "AZnzlk1XvdvUeBnXmlld"),
    ("elli", "MF3mGyEYCl7XYWbV9V6O"),
    ("josh", "TxGEqnHWrfWFTfGW9XjX"),
    ("sam", "yoZ06aMxZJJ28mfd3POQ"),
];

#[must_use]
pub fn voice_id(key: &str) -> Option<&'static str> {
    VOICE_IDS.iter().find(|(k, _)| *k == key).map(|(_, id)| *id)
}

#[must_use]
pub fn default_voice_for(language: &str) -> &'static str {
    match language {
        "es" | "zh" | "hi" => "adam",
        "fr" => "antoni",
        _ => DEFAULT_VOICE,
    }
}

/// Provider voice id for a request. A missing key means the default voice;
/// an unrecognized one falls back by language.
#[must_use]
pub fn resolve_voice(voice: Option<&str>, language: Option<&str>) -> &'static str {
    let key = voice.unwrap_or(DEFAULT_VOICE);
    voice_id(key)
        .or_else(|| voice_id(default_voice_for(language.unwrap_or("en"))))
        .unwrap_or(VOICE_IDS[0].1)
}

// =============================================================================
// SYNTHESIS
// =============================================================================

#[async_trait::async_trait]
pub trait SpeechSynth: Send + Sync {
    /// Render `text` with the provider voice `voice_id` to MP3 bytes.
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Vec<u8>, SpeechError>;
}

pub struct ElevenLabs {
    http: reqwest::Client,
    api_key: String,
}

impl ElevenLabs {
    /// # Errors
    ///
    /// Returns [`SpeechError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(api_key: String, timeouts: OutboundTimeouts) -> Result<Self, SpeechError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| SpeechError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key })
    }
}

#[derive(Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

#[async_trait::async_trait]
impl SpeechSynth for ElevenLabs {
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Vec<u8>, SpeechError> {
        let response = self
            .http
            .post(format!("{API_BASE}/{voice_id}"))
            .query(&[("output_format", OUTPUT_FORMAT)])
            .header("xi-api-key", &self.api_key)
            .header("Accept", "audio/mpeg")
            .json(&SynthesisRequest { text, model_id: MODEL_ID })
            .send()
            .await
            .map_err(|e| SpeechError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::Response { status: status.as_u16(), body });
        }
        let audio = response
            .bytes()
            .await
            .map_err(|e| SpeechError::Request(e.to_string()))?;
        Ok(audio.to_vec())
    }
}

#[cfg(test)]
#[path = "speech_test.rs"]
mod tests;
