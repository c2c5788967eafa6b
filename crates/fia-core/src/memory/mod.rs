//! Memory store access for the assistant.
//!
//! The memory store is an external episodic-memory service. This module
//! defines the interface the orchestrator consumes and the clients that
//! implement it:
//!
//! - **HttpMemoryStore**: talks to the real service over HTTP
//! - **MockMemoryStore**: canned history for mock mode and tests
//!
//! Shape differences between service revisions are absorbed by [`parse`],
//! so callers only ever see flat [`MemoryRecord`] lists.
//!
//! ```text
//!   search(query, limit) ──► POST {api_root}/api/memories/search
//!   append(content, meta) ──► POST {memory_api_base}/v1/memories
//! ```

#[cfg(feature = "client")]
mod client;
mod mock;
pub mod parse;

#[cfg(feature = "client")]
pub use client::*;
pub use mock::*;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Ack, MemoryRecord};

/// Free-form metadata attached to an appended episode.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Query the profile view uses to list every stored recommendation.
pub const HISTORY_QUERY: &str = "Show all outfit recommendations";

/// Interface to the external memory store.
///
/// Each call is a single attempt; implementations never retry.
#[async_trait]
pub trait MemoryStore: Send + Sync {
    /// Retrieve up to `limit` records relevant to `query`, in relevance order.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<MemoryRecord>>;

    /// Persist `content` as a new episode.
    async fn append(&self, content: &str, metadata: &Metadata) -> Result<Ack>;

    /// List prior interactions for the history view.
    async fn history(&self, limit: usize) -> Result<Vec<MemoryRecord>> {
        self.search(HISTORY_QUERY, limit).await
    }
}
