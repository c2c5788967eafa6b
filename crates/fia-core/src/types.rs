//! Shared types for fia-core.
//!
//! These types are used by the memory client, the assistant dispatchers and
//! the orchestrator.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Entity Types
// ─────────────────────────────────────────────────────────────────────────────

/// A stored prior interaction used as retrieval context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub id: String,
    pub content: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl MemoryRecord {
    pub fn new(id: impl Into<String>, content: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            timestamp,
        }
    }
}

/// Per-request identifying envelope sent with every memory-store call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub group_id: String,
    #[serde(rename = "agent_id")]
    pub agent_ids: Vec<String>,
    #[serde(rename = "user_id")]
    pub user_ids: Vec<String>,
    pub session_id: String,
}

/// Acknowledgement returned by the memory store on append.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    /// Raw response body, kept only for logging
    pub body: serde_json::Value,
}

// ─────────────────────────────────────────────────────────────────────────────
// Workflow Types
// ─────────────────────────────────────────────────────────────────────────────

/// Observable progress of a single `handle` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowStatus {
    #[default]
    Idle,
    Searching,
    Composing,
    Dispatching,
    Done,
}

impl WorkflowStatus {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStatus::Idle => "idle",
            WorkflowStatus::Searching => "searching",
            WorkflowStatus::Composing => "composing",
            WorkflowStatus::Dispatching => "dispatching",
            WorkflowStatus::Done => "done",
        }
    }

    /// Human-readable progress line for front ends.
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowStatus::Idle => "Ready",
            WorkflowStatus::Searching => "Searching history...",
            WorkflowStatus::Composing => "Preparing specialized prompt...",
            WorkflowStatus::Dispatching => "Asking AI...",
            WorkflowStatus::Done => "Done",
        }
    }
}

impl std::fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one orchestrated interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowResult {
    pub succeeded: bool,
    pub answer: Option<String>,
    pub error_message: Option<String>,
}

impl WorkflowResult {
    pub fn success(answer: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            answer: Some(answer.into()),
            error_message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            answer: None,
            error_message: Some(message.into()),
        }
    }

    /// Result of a no-op call (empty query): nothing was attempted.
    pub fn skipped() -> Self {
        Self {
            succeeded: false,
            answer: None,
            error_message: None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        !self.succeeded && self.answer.is_none() && self.error_message.is_none()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Request Types (wire format)
// ─────────────────────────────────────────────────────────────────────────────

/// Memory search request body
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub session: SessionContext,
    pub query: String,
    pub filter: serde_json::Map<String, serde_json::Value>,
    pub limit: usize,
}

/// Memory append request body
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeRequest {
    pub session: SessionContext,
    pub producer: String,
    pub produced_for: String,
    pub episode_content: String,
    pub episode_type: String,
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// Structured outfit request accepted by `/generate-outfit`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitRequest {
    pub event: String,
    pub weather: String,
    pub mood: String,
}

/// Free-form prompt request sent to `/generate-outfit`
#[derive(Debug, Clone, Serialize)]
pub struct PromptRequest {
    pub prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_context_wire_names() {
        let ctx = SessionContext {
            group_id: "fashion-group-01".into(),
            agent_ids: vec!["fashion-stylist-gemini".into()],
            user_ids: vec!["profile_user_001".into()],
            session_id: "abc".into(),
        };
        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["group_id"], "fashion-group-01");
        assert_eq!(json["agent_id"][0], "fashion-stylist-gemini");
        assert_eq!(json["user_id"][0], "profile_user_001");
        assert_eq!(json["session_id"], "abc");
    }

    #[test]
    fn test_workflow_result_constructors() {
        let ok = WorkflowResult::success("Try a wool crewneck, size M.");
        assert!(ok.succeeded);
        assert_eq!(ok.answer.as_deref(), Some("Try a wool crewneck, size M."));
        assert!(ok.error_message.is_none());

        let err = WorkflowResult::failure("HTTP 500");
        assert!(!err.succeeded);
        assert!(err.answer.is_none());
        assert!(!err.is_skipped());

        assert!(WorkflowResult::skipped().is_skipped());
    }

    #[test]
    fn test_workflow_status_display() {
        assert_eq!(WorkflowStatus::default(), WorkflowStatus::Idle);
        assert_eq!(WorkflowStatus::Dispatching.to_string(), "dispatching");
        assert_eq!(WorkflowStatus::Searching.label(), "Searching history...");
    }
}
