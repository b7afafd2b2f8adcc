//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. Each
//! backend is optional: a missing credential leaves its slot `None` and the
//! matching endpoint answers with its "not configured" error.

use std::sync::Arc;

use crate::services::speech::SpeechSynth;
use crate::services::subscribers::SubscriberStore;

/// Clone is required by Axum; every field is `Arc`-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    pub subscribers: Option<Arc<dyn SubscriberStore>>,
    pub speech: Option<Arc<dyn SpeechSynth>>,
}

impl AppState {
    #[must_use]
    pub fn new(subscribers: Option<Arc<dyn SubscriberStore>>, speech: Option<Arc<dyn SpeechSynth>>) -> Self {
        Self { subscribers, speech }
    }
}
