//! Canned assistant for mock mode.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::AssistantDispatcher;
use crate::error::Result;

const DEV_MODE_ANSWER: &str =
    "DEV MODE: assistant contact simulated. Logging still runs in background.";

/// Dispatcher that answers every prompt with the same text.
#[derive(Debug)]
pub struct MockAssistant {
    answer: String,
    prompts: Mutex<Vec<String>>,
}

impl Default for MockAssistant {
    fn default() -> Self {
        Self::new(DEV_MODE_ANSWER)
    }
}

impl MockAssistant {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }
}

#[async_trait]
impl AssistantDispatcher for MockAssistant {
    async fn ask(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().await.push(prompt.to_string());
        Ok(self.answer.clone())
    }
}
