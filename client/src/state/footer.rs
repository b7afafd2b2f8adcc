//! Footer widgets: back-to-top, newsletter signup, and accordion sections.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{RemoteError, ValidationError};
use crate::net::types::{SubscribeRequest, SubscribeResponse};
use crate::util::transient::Transient;

/// Scroll offset past which the back-to-top button shows.
pub const BACK_TO_TOP_THRESHOLD: f64 = 400.0;
/// Back-to-top visibility is re-evaluated at most once per window.
pub const SCROLL_THROTTLE_MS: u32 = 100;
/// How long the submit button stays in its "Subscribed!" state.
pub const BUTTON_RESET_MS: u32 = 3_000;
pub const TOAST_MS: u32 = 3_000;
pub const NEWSLETTER_SOURCE: &str = "footer";

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thanks for subscribing! Check your inbox for updates.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok());

#[must_use]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Same shape check the newsletter endpoint applies.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(email))
}

/// New `aria-expanded` value for an accordion button whose current attribute
/// is `current`.
#[must_use]
pub fn toggled_expanded(current: Option<&str>) -> bool {
    current != Some("true")
}

// =============================================================================
// NEWSLETTER FORM
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
    Subscribed,
    Failed,
}

#[derive(Clone, Debug)]
pub struct NewsletterForm {
    phase: FormPhase,
    button: Transient,
    toast: Option<Toast>,
    toast_window: Transient,
}

impl Default for NewsletterForm {
    fn default() -> Self {
        Self { phase: FormPhase::Idle, button: Transient::default(), toast: None, toast_window: Transient::default() }
    }
}

impl NewsletterForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Validate the raw input and move to `Submitting`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingEmail`] for blank input (the form ignores
    /// the submit), [`ValidationError::InvalidEmail`] for a malformed
    /// address. A submit while one is already in flight is treated as blank.
    pub fn submit(&mut self, raw: &str) -> Result<SubscribeRequest, ValidationError> {
        let email = raw.trim();
        if email.is_empty() || self.phase == FormPhase::Submitting {
            return Err(ValidationError::MissingEmail);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        self.phase = FormPhase::Submitting;
        Ok(SubscribeRequest { email: email.to_owned(), source: NEWSLETTER_SOURCE.to_owned() })
    }

    /// Show a client-side validation failure as an error toast.
    pub fn reject(&mut self, err: &ValidationError, now_ms: f64) {
        let message = match err {
            ValidationError::InvalidEmail => "Invalid email address".to_owned(),
            other => other.to_string(),
        };
        self.show_toast(ToastKind::Error, message, now_ms);
    }

    /// Apply the endpoint's answer. Returns `true` when the input should be
    /// cleared.
    pub fn complete(&mut self, result: Result<SubscribeResponse, RemoteError>, now_ms: f64) -> bool {
        match result {
            Ok(body) if body.error.is_none() && body.success != Some(false) => {
                self.phase = FormPhase::Subscribed;
                self.button.show(now_ms, f64::from(BUTTON_RESET_MS));
                let message = body.message.unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_owned());
                self.show_toast(ToastKind::Success, message, now_ms);
                true
            }
            Ok(body) => {
                self.phase = FormPhase::Failed;
                let message = body.error.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned());
                self.show_toast(ToastKind::Error, message, now_ms);
                false
            }
            Err(err) => {
                log::warn!("newsletter subscribe failed: {err}");
                self.phase = FormPhase::Failed;
                self.show_toast(ToastKind::Error, GENERIC_FAILURE_MESSAGE.to_owned(), now_ms);
                false
            }
        }
    }

    /// Button shows its success state and stays disabled.
    #[must_use]
    pub fn button_acknowledged(&self, now_ms: f64) -> bool {
        self.button.is_active(now_ms)
    }

    #[must_use]
    pub fn button_disabled(&self, now_ms: f64) -> bool {
        self.phase == FormPhase::Submitting || self.button_acknowledged(now_ms)
    }

    #[must_use]
    pub fn toast(&self, now_ms: f64) -> Option<&Toast> {
        self.toast.as_ref().filter(|_| self.toast_window.is_active(now_ms))
    }

    /// Return to `Idle` once acknowledgements have lapsed.
    pub fn settle(&mut self, now_ms: f64) {
        if self.phase != FormPhase::Submitting && !self.button.is_active(now_ms) {
            self.phase = FormPhase::Idle;
            self.button.clear();
        }
        if !self.toast_window.is_active(now_ms) {
            self.toast = None;
        }
    }

    fn show_toast(&mut self, kind: ToastKind, message: String, now_ms: f64) {
        self.toast = Some(Toast { kind, message });
        self.toast_window.show(now_ms, f64::from(TOAST_MS));
    }
}
