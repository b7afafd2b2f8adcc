mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use services::speech::{ElevenLabs, SpeechSynth};
use services::subscribers::{MemoryStore, SubscriberStore, SupabaseStore};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");

    // Missing credentials disable the matching endpoint, not the server.
    let subscribers: Option<Arc<dyn SubscriberStore>> = match &config.supabase_service_key {
        Some(key) => match SupabaseStore::new(&config.supabase_url, key.clone(), config.timeouts) {
            Ok(store) => {
                tracing::info!(url = %config.supabase_url, "subscriber store initialized");
                Some(Arc::new(store))
            }
            Err(e) => {
                tracing::warn!(error = %e, "subscriber store unavailable; newsletter disabled");
                None
            }
        },
        None if config.memory_subscribers => {
            tracing::warn!("SUPABASE_SERVICE_ROLE_KEY not set; subscribers kept in memory");
            Some(Arc::new(MemoryStore::new()))
        }
        None => {
            tracing::warn!("SUPABASE_SERVICE_ROLE_KEY not set; newsletter disabled");
            None
        }
    };

    let speech: Option<Arc<dyn SpeechSynth>> = match &config.elevenlabs_api_key {
        Some(key) => match ElevenLabs::new(key.clone(), config.timeouts) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::warn!(error = %e, "speech client unavailable; TTS disabled");
                None
            }
        },
        None => {
            tracing::warn!("ELEVENLABS_API_KEY not set; TTS disabled");
            None
        }
    };

    let state = state::AppState::new(subscribers, speech);
    let site_dir = config.serve_static.then_some(config.site_dir.as_path());
    let app = routes::app(state, site_dir);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, site = %config.site_dir.display(), "mindspace listening");
    axum::serve(listener, app).await.expect("server failed");
}
