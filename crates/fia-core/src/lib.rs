//! fia-core - Core library for Fashion Icon Assistant
//!
//! This crate provides the workflow shared by every Fashion Icon front end:
//!
//! - **config**: Injected API endpoints, mock mode and session identity
//! - **session**: Per-request session envelopes for the memory store
//! - **memory**: Memory store client (search, append, history)
//! - **assistant**: Outfit assistant dispatchers (HTTP, mock, offline stylist)
//! - **orchestrator**: Search → compose → dispatch workflow with background logging

pub mod assistant;
pub mod config;
pub mod error;
pub mod memory;
pub mod orchestrator;
pub mod session;
pub mod types;

use std::sync::Arc;

// Re-export commonly used types
pub use assistant::AssistantDispatcher;
pub use config::AssistantConfig;
pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use orchestrator::InteractionOrchestrator;
pub use types::{MemoryRecord, SessionContext, WorkflowResult, WorkflowStatus};

/// Build the collaborators selected by `config`.
///
/// Mock mode wires the canned memory store and assistant; otherwise the
/// HTTP clients talk to `api_root` and `memory_api_base`.
pub fn build_collaborators(
    config: &AssistantConfig,
) -> Result<(Arc<dyn MemoryStore>, Arc<dyn AssistantDispatcher>)> {
    config.validate()?;

    if config.mock_mode {
        let memory: Arc<dyn MemoryStore> = Arc::new(memory::MockMemoryStore::with_sample_history());
        let assistant: Arc<dyn AssistantDispatcher> = Arc::new(assistant::MockAssistant::default());
        return Ok((memory, assistant));
    }

    #[cfg(feature = "client")]
    {
        let memory: Arc<dyn MemoryStore> = Arc::new(memory::HttpMemoryStore::new(config)?);
        let assistant: Arc<dyn AssistantDispatcher> = Arc::new(assistant::HttpAssistant::new(config)?);
        Ok((memory, assistant))
    }

    #[cfg(not(feature = "client"))]
    {
        Err(Error::Config(
            "HTTP clients are disabled; enable the `client` feature or mock mode".into(),
        ))
    }
}

/// Build an orchestrator wired to the collaborators selected by `config`.
pub fn build_orchestrator(config: &AssistantConfig) -> Result<InteractionOrchestrator> {
    let (memory, assistant) = build_collaborators(config)?;
    Ok(InteractionOrchestrator::new(config.clone(), memory, assistant))
}
