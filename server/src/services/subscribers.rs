//! Newsletter subscriber storage.
//!
//! DESIGN
//! ======
//! The newsletter route only needs two operations: look up an address and
//! upsert a confirmed record keyed by email. [`SupabaseStore`] talks to the
//! hosted `PostgREST` endpoint with the service-role key; [`MemoryStore`]
//! backs tests and keyless local runs.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::config::OutboundTimeouts;

pub const TABLE: &str = "newsletter_subscribers";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("subscriber store request failed: {0}")]
    Request(String),
    #[error("subscriber store returned status {status}: {body}")]
    Response { status: u16, body: String },
    #[error("subscriber store response parse failed: {0}")]
    Parse(String),
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Existing row as returned by a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Subscriber {
    #[serde(default)]
    pub confirmed: bool,
}

/// Row written on subscribe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriberRecord {
    pub email: String,
    pub confirmed: bool,
    pub source: String,
    pub subscribed_at: String,
}

#[async_trait::async_trait]
pub trait SubscriberStore: Send + Sync {
    /// Look up a normalized address.
    async fn find(&self, email: &str) -> Result<Option<Subscriber>, StoreError>;

    /// Insert or replace the row for `record.email`.
    async fn upsert(&self, record: &SubscriberRecord) -> Result<(), StoreError>;
}

// =============================================================================
// SUPABASE
// =============================================================================

pub struct SupabaseStore {
    http: reqwest::Client,
    table_url: String,
    service_key: String,
}

impl SupabaseStore {
    /// # Errors
    ///
    /// Returns [`StoreError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(base_url: &str, service_key: String, timeouts: OutboundTimeouts) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| StoreError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, table_url: table_url(base_url), service_key })
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }
}

#[must_use]
pub fn table_url(base_url: &str) -> String {
    format!("{}/rest/v1/{TABLE}", base_url.trim_end_matches('/'))
}

#[async_trait::async_trait]
impl SubscriberStore for SupabaseStore {
    async fn find(&self, email: &str) -> Result<Option<Subscriber>, StoreError> {
        let filter = format!("eq.{email}");
        let response = self
            .authorized(self.http.get(&self.table_url))
            .query(&[("select", "confirmed"), ("email", filter.as_str()), ("limit", "1")])
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        let text = read_success(response).await?;
        parse_lookup(&text)
    }

    async fn upsert(&self, record: &SubscriberRecord) -> Result<(), StoreError> {
        let response = self
            .authorized(self.http.post(&self.table_url))
            .query(&[("on_conflict", "email")])
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(record)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        read_success(response).await.map(|_| ())
    }
}

async fn read_success(response: reqwest::Response) -> Result<String, StoreError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| StoreError::Request(e.to_string()))?;
    if !status.is_success() {
        return Err(StoreError::Response { status: status.as_u16(), body: text });
    }
    Ok(text)
}

/// `PostgREST` answers a filtered select with an array of rows.
pub(crate) fn parse_lookup(body: &str) -> Result<Option<Subscriber>, StoreError> {
    let rows: Vec<Subscriber> = serde_json::from_str(body).map_err(|e| StoreError::Parse(e.to_string()))?;
    Ok(rows.into_iter().next())
}

// =============================================================================
// MEMORY
// =============================================================================

#[derive(Default)]
pub struct MemoryStore {
    rows: RwLock<HashMap<String, SubscriberRecord>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl MemoryStore {
    pub async fn get(&self, email: &str) -> Option<SubscriberRecord> {
        self.rows.read().await.get(email).cloned()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl SubscriberStore for MemoryStore {
    async fn find(&self, email: &str) -> Result<Option<Subscriber>, StoreError> {
        Ok(self.rows.read().await.get(email).map(|row| Subscriber { confirmed: row.confirmed }))
    }

    async fn upsert(&self, record: &SubscriberRecord) -> Result<(), StoreError> {
        self.rows
            .write()
            .await
            .insert(record.email.clone(), record.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "subscribers_test.rs"]
mod tests;
