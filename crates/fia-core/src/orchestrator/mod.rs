//! Interaction orchestration - memory-grounded assistant queries.
//!
//! For every user query the orchestrator:
//! 1. Searches the memory store for related prior interactions
//! 2. Composes a prompt grounded in whatever was found
//! 3. Dispatches the prompt to the assistant
//!
//! and, in the background, logs the raw query back into the memory store.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                   InteractionOrchestrator                        │
//! │  ┌─────────────┐   ┌─────────────┐   ┌─────────────────────────┐ │
//! │  │ searching   │→→ │ composing   │→→ │ dispatching → done      │ │
//! │  │ (search)    │   │ (prompt)    │   │ (AssistantDispatcher)   │ │
//! │  └─────────────┘   └──────┬──────┘   └─────────────────────────┘ │
//! │         │                 └──► append (detached, logged only)    │
//! │         └──────────── MemoryStore ◄──┘                           │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

mod prompt;
mod workflow;

pub use prompt::*;
pub use workflow::*;
