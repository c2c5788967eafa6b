//! In-process memory store used by mock mode and tests.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::Mutex;

use super::{MemoryStore, Metadata};
use crate::error::Result;
use crate::types::{Ack, MemoryRecord};

/// Memory store that serves canned records and remembers appended content.
#[derive(Debug, Default)]
pub struct MockMemoryStore {
    records: Vec<MemoryRecord>,
    appended: Mutex<Vec<String>>,
}

impl MockMemoryStore {
    pub fn new(records: Vec<MemoryRecord>) -> Self {
        Self {
            records,
            appended: Mutex::new(Vec::new()),
        }
    }

    /// Store pre-filled with a couple of earlier shopping interactions.
    pub fn with_sample_history() -> Self {
        let now = Utc::now().timestamp_millis();
        Self::new(vec![
            MemoryRecord::new(
                "mock_1",
                "I am looking for a size M sweater, preferably wool, light gray color. I usually wear a 40 Regular jacket.",
                now,
            ),
            MemoryRecord::new(
                "mock_2",
                "I asked about the difference between slim-fit and relaxed-fit jeans for a 32-inch waist.",
                now - 3_600_000,
            ),
        ])
    }

    /// Content appended so far, oldest first.
    pub async fn appended(&self) -> Vec<String> {
        self.appended.lock().await.clone()
    }
}

#[async_trait]
impl MemoryStore for MockMemoryStore {
    async fn search(&self, _query: &str, limit: usize) -> Result<Vec<MemoryRecord>> {
        Ok(self.records.iter().take(limit).cloned().collect())
    }

    async fn append(&self, content: &str, _metadata: &Metadata) -> Result<Ack> {
        self.appended.lock().await.push(content.to_string());
        Ok(Ack {
            body: json!({ "status": "MOCK_OK", "content_logged": content }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sample_history_respects_limit() {
        let store = MockMemoryStore::with_sample_history();
        assert_eq!(store.search("sweater", 5).await.unwrap().len(), 2);
        assert_eq!(store.search("sweater", 1).await.unwrap()[0].id, "mock_1");
        assert_eq!(store.history(20).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_append_is_recorded() {
        let store = MockMemoryStore::default();
        let ack = store.append("red scarf", &Metadata::new()).await.unwrap();
        assert_eq!(ack.body["status"], "MOCK_OK");
        assert_eq!(store.appended().await, vec!["red scarf".to_string()]);
    }
}
