//! Server configuration parsed from environment variables.
//!
//! Parsing runs over a lookup function so tests can supply a map instead of
//! mutating the process environment. Optional credentials that are absent
//! disable the matching endpoint rather than failing start-up.

use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SUPABASE_URL: &str = "https://cxjqessxarjayqxvhnhs.supabase.co";
pub const DEFAULT_OUTBOUND_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_OUTBOUND_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutboundTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub site_dir: PathBuf,
    /// Serve `site_dir` as the router fallback. Off for API-only deployments
    /// where a CDN owns the static files.
    pub serve_static: bool,
    pub supabase_url: String,
    pub supabase_service_key: Option<String>,
    /// Keep subscribers in process memory when no service key is set.
    pub memory_subscribers: bool,
    pub elevenlabs_api_key: Option<String>,
    pub timeouts: OutboundTimeouts,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: default `<manifest>/../site`
    /// - `SERVE_STATIC`: default true
    /// - `SUPABASE_URL`: hosted project URL by default
    /// - `SUPABASE_SERVICE_ROLE_KEY`: newsletter disabled when absent
    /// - `NEWSLETTER_IN_MEMORY`: default false; keyless local subscriber store
    /// - `ELEVENLABS_API_KEY`: speech generation disabled when absent
    /// - `OUTBOUND_TIMEOUT_SECS`: default 15
    /// - `OUTBOUND_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric or boolean variable is
    /// set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = env_parse(&lookup, "PORT", DEFAULT_PORT)?;
        let site_dir = optional(&lookup, "SITE_DIR")
            .map_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../site"), PathBuf::from);
        let serve_static = env_bool(&lookup, "SERVE_STATIC", true)?;
        let memory_subscribers = env_bool(&lookup, "NEWSLETTER_IN_MEMORY", false)?;
        let supabase_url = optional(&lookup, "SUPABASE_URL")
            .unwrap_or_else(|| DEFAULT_SUPABASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let timeouts = OutboundTimeouts {
            request_secs: env_parse(&lookup, "OUTBOUND_TIMEOUT_SECS", DEFAULT_OUTBOUND_TIMEOUT_SECS)?,
            connect_secs: env_parse(&lookup, "OUTBOUND_CONNECT_TIMEOUT_SECS", DEFAULT_OUTBOUND_CONNECT_TIMEOUT_SECS)?,
        };

        Ok(Self {
            port,
            site_dir,
            serve_static,
            supabase_url,
            supabase_service_key: optional(&lookup, "SUPABASE_SERVICE_ROLE_KEY"),
            memory_subscribers,
            elevenlabs_api_key: optional(&lookup, "ELEVENLABS_API_KEY"),
            timeouts,
        })
    }
}

/// Trimmed, non-empty value for `key`.
fn optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn env_parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match optional(lookup, key) {
        None => Ok(default),
        Some(raw) => raw.parse::<T>().map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

fn env_bool(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match optional(lookup, key) {
        None => Ok(default),
        Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key, value: raw }),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
