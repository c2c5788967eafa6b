//! HTTP client for the episodic memory store.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::parse::parse_records;
use super::{MemoryStore, Metadata};
use crate::config::{AssistantConfig, IdentityConfig};
use crate::error::{Error, Result};
use crate::session::new_session;
use crate::types::{Ack, EpisodeRequest, MemoryRecord, SearchRequest};

const SEARCH_PATH: &str = "/api/memories/search";
const APPEND_PATH: &str = "/v1/memories";

/// Memory store reached over HTTP.
#[derive(Clone)]
pub struct HttpMemoryStore {
    client: reqwest::Client,
    search_url: String,
    append_url: String,
    identity: IdentityConfig,
}

impl HttpMemoryStore {
    /// Create a client for the endpoints in `config`.
    pub fn new(config: &AssistantConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            search_url: config.api_url(SEARCH_PATH),
            append_url: config.memory_url(APPEND_PATH),
            identity: config.identity.clone(),
        })
    }

    async fn post_json<B: serde::Serialize>(&self, url: &str, body: &B) -> Result<Value> {
        debug!("Memory request: POST {}", url);

        let resp = self.client.post(url).json(body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            return Err(Error::status(url, status.as_u16(), error_text));
        }

        let text = resp.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        // Acks are opaque; keep non-JSON bodies as text rather than failing.
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}

#[async_trait]
impl MemoryStore for HttpMemoryStore {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<MemoryRecord>> {
        let body = SearchRequest {
            session: new_session(&self.identity),
            query: query.to_string(),
            filter: Metadata::new(),
            limit,
        };

        let response = self.post_json(&self.search_url, &body).await?;
        let mut records = parse_records(&response);
        records.truncate(limit);

        debug!("Memory search returned {} records", records.len());
        Ok(records)
    }

    async fn append(&self, content: &str, metadata: &Metadata) -> Result<Ack> {
        let body = EpisodeRequest {
            session: new_session(&self.identity),
            producer: self.identity.user_id.clone(),
            produced_for: self.identity.primary_agent().to_string(),
            episode_content: content.to_string(),
            episode_type: self.identity.episode_type.clone(),
            metadata: metadata.clone(),
        };

        let response = self.post_json(&self.append_url, &body).await?;
        Ok(Ack { body: response })
    }
}
