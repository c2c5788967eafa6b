//! Assistant Configuration
//!
//! The single configuration structure injected into the memory client, the
//! assistant dispatchers and the orchestrator. Nothing in this crate reads
//! ambient globals or environment variables.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default outfit API root (search proxy and `/generate-outfit`)
pub const DEFAULT_API_ROOT: &str = "http://localhost:8000";

/// Default memory store base URL (episode append)
pub const DEFAULT_MEMORY_API_BASE: &str = "http://0.0.0.0:8080";

/// Default path, under `api_root`, that free-text prompts are posted to
pub const DEFAULT_PROMPT_PATH: &str = "/generate-outfit";

/// Assistant configuration options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Outfit API root, also serves `/api/memories/search`
    pub api_root: String,

    /// Memory store base URL, serves `/v1/memories`
    pub memory_api_base: String,

    /// Use canned collaborators instead of the network
    pub mock_mode: bool,

    /// Path under `api_root` that accepts `{ "prompt": .. }` bodies.
    ///
    /// The stock outfit API only accepts `{ event, weather, mood }` on
    /// `/generate-outfit`, so free-text prompts need a deployment (or a
    /// bridge) exposing a prompt endpoint here.
    pub prompt_path: String,

    /// Number of records retrieved as prompt context (default: 5)
    pub search_limit: usize,

    /// Number of records listed by the history view (default: 20)
    pub history_limit: usize,

    /// Identity carried in every session envelope
    pub identity: IdentityConfig,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            memory_api_base: DEFAULT_MEMORY_API_BASE.to_string(),
            mock_mode: false,
            prompt_path: DEFAULT_PROMPT_PATH.to_string(),
            search_limit: 5,
            history_limit: 20,
            identity: IdentityConfig::default(),
        }
    }
}

/// Who is talking to whom in the memory store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub group_id: String,
    pub agent_ids: Vec<String>,
    pub user_id: String,
    /// Episode type recorded for logged queries
    pub episode_type: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            group_id: "fashion-group-01".to_string(),
            agent_ids: vec!["fashion-stylist-gemini".to_string()],
            user_id: "profile_user_001".to_string(),
            episode_type: "user_query_fashion".to_string(),
        }
    }
}

impl IdentityConfig {
    /// Agent the user's episodes are produced for.
    pub fn primary_agent(&self) -> &str {
        self.agent_ids.first().map(String::as_str).unwrap_or_default()
    }
}

impl AssistantConfig {
    /// Check that the configuration can drive a workflow.
    pub fn validate(&self) -> Result<()> {
        if !self.mock_mode {
            validate_url("api_root", &self.api_root)?;
            validate_url("memory_api_base", &self.memory_api_base)?;
        }
        if self.identity.agent_ids.is_empty() {
            return Err(Error::Config("identity.agent_ids must not be empty".into()));
        }
        if self.identity.user_id.trim().is_empty() {
            return Err(Error::Config("identity.user_id must not be empty".into()));
        }
        if !self.prompt_path.starts_with('/') {
            return Err(Error::Config(format!(
                "prompt_path must start with '/', got {:?}",
                self.prompt_path
            )));
        }
        if self.search_limit == 0 {
            return Err(Error::Config("search_limit must be at least 1".into()));
        }
        Ok(())
    }

    /// Join `path` onto the outfit API root.
    pub fn api_url(&self, path: &str) -> String {
        join_url(&self.api_root, path)
    }

    /// Join `path` onto the memory store base.
    pub fn memory_url(&self, path: &str) -> String {
        join_url(&self.memory_api_base, path)
    }
}

fn validate_url(field: &str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "{} must be an http(s) URL, got {:?}",
            field, value
        )))
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
