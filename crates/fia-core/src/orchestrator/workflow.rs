//! The search → compose → dispatch workflow.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::prompt::compose_prompt;
use crate::assistant::AssistantDispatcher;
use crate::config::AssistantConfig;
use crate::memory::{MemoryStore, Metadata};
use crate::types::{WorkflowResult, WorkflowStatus};

/// Message returned when a query arrives while another is in flight.
pub const BUSY_MESSAGE: &str = "A request is already in progress; wait for it to finish.";

type StatusListener = Box<dyn Fn(WorkflowStatus) + Send + Sync>;

/// Runs one user interaction at a time against injected collaborators.
pub struct InteractionOrchestrator {
    config: AssistantConfig,
    memory: Arc<dyn MemoryStore>,
    assistant: Arc<dyn AssistantDispatcher>,
    status: watch::Sender<WorkflowStatus>,
    /// Number of background appends still running
    logging: Arc<watch::Sender<usize>>,
    busy: AtomicBool,
    listener: Option<StatusListener>,
}

/// Clears the busy flag however `handle` exits.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl InteractionOrchestrator {
    pub fn new(
        config: AssistantConfig,
        memory: Arc<dyn MemoryStore>,
        assistant: Arc<dyn AssistantDispatcher>,
    ) -> Self {
        let (status, _) = watch::channel(WorkflowStatus::Idle);
        let (logging, _) = watch::channel(0usize);

        Self {
            config,
            memory,
            assistant,
            status,
            logging: Arc::new(logging),
            busy: AtomicBool::new(false),
            listener: None,
        }
    }

    /// Call `listener` synchronously on every status transition.
    pub fn with_status_listener<F>(mut self, listener: F) -> Self
    where
        F: Fn(WorkflowStatus) + Send + Sync + 'static,
    {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Current workflow status.
    pub fn status(&self) -> WorkflowStatus {
        *self.status.borrow()
    }

    /// Watch workflow status changes.
    pub fn subscribe(&self) -> watch::Receiver<WorkflowStatus> {
        self.status.subscribe()
    }

    /// Whether a background memory append is still running.
    pub fn is_logging(&self) -> bool {
        *self.logging.borrow() > 0
    }

    /// Wait until every background memory append has finished.
    ///
    /// `handle` never calls this; front ends that exit right after an
    /// answer use it so the query still reaches the memory store.
    pub async fn wait_for_logging(&self) {
        let mut rx = self.logging.subscribe();
        let _ = rx.wait_for(|pending| *pending == 0).await;
    }

    /// Run the full workflow for one raw user query.
    ///
    /// Only an assistant failure fails the result; memory search and append
    /// failures are logged and otherwise ignored.
    pub async fn handle(&self, query: &str) -> WorkflowResult {
        let query = query.trim();
        if query.is_empty() {
            debug!("Ignoring empty query");
            return WorkflowResult::skipped();
        }

        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Rejected query while another request is in flight");
            return WorkflowResult::failure(BUSY_MESSAGE);
        }
        let _guard = BusyGuard(&self.busy);

        // 1. Retrieve context
        self.set_status(WorkflowStatus::Searching);
        let records = match self.memory.search(query, self.config.search_limit).await {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "Memory search failed; continuing without context");
                Vec::new()
            }
        };

        // 2. Compose
        self.set_status(WorkflowStatus::Composing);
        let prompt = compose_prompt(query, &records);
        debug!(context_records = records.len(), "Composed prompt");

        // 3. Log the raw query without waiting for it
        self.spawn_append(query);

        // 4. Dispatch
        self.set_status(WorkflowStatus::Dispatching);
        let result = match self.assistant.ask(&prompt).await {
            Ok(answer) => {
                info!("Assistant answered");
                WorkflowResult::success(answer)
            }
            Err(e) => {
                warn!(error = %e, "Assistant dispatch failed");
                WorkflowResult::failure(e.to_string())
            }
        };

        // 5. Surface
        self.set_status(WorkflowStatus::Done);
        result
    }

    fn set_status(&self, status: WorkflowStatus) {
        debug!(%status, "Workflow status");
        self.status.send_replace(status);
        if let Some(listener) = &self.listener {
            listener(status);
        }
    }

    fn spawn_append(&self, query: &str) {
        let memory = Arc::clone(&self.memory);
        let logging = Arc::clone(&self.logging);
        let content = query.to_string();

        logging.send_modify(|pending| *pending += 1);
        tokio::spawn(async move {
            match memory.append(&content, &Metadata::new()).await {
                Ok(_) => debug!("Logged query to memory store"),
                Err(e) => warn!(error = %e, "Memory logging failed"),
            }
            logging.send_modify(|pending| *pending = pending.saturating_sub(1));
        });
    }
}
