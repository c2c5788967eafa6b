//! Ask command: memory-grounded advice.
//!
//! Runs the full orchestrated workflow and shows its status while it is in
//! flight. The answer is printed as soon as the assistant replies; the
//! background memory logging gets a short grace period afterwards before
//! the command exits.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use colored::Colorize;
use fia_core::WorkflowResult;
use tracing::{debug, warn};

use super::spinner;
use crate::config::Config;

/// How long to wait for background memory logging after the answer is shown.
const LOGGING_GRACE: Duration = Duration::from_secs(5);

/// Execute ask command.
pub async fn execute(query: &str, json: bool, config: &Config) -> Result<()> {
    run(query, json, config, LOGGING_GRACE).await.map(|_| ())
}

async fn run(
    query: &str,
    json: bool,
    config: &Config,
    logging_grace: Duration,
) -> Result<WorkflowResult> {
    let pb = spinner(config.display.spinner && !json, "Searching history...");
    let status_pb = pb.clone();

    let orchestrator = fia_core::build_orchestrator(&config.assistant)
        .context("Failed to set up assistant")?
        .with_status_listener(move |status| status_pb.set_message(status.label()));

    let result = orchestrator.handle(query).await;
    pb.finish_and_clear();

    let shown = if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        Ok(())
    } else {
        render(&result)
    };

    if orchestrator.is_logging() {
        let pb = spinner(config.display.spinner && !json, "Logging memory...");
        let finished = tokio::time::timeout(logging_grace, orchestrator.wait_for_logging()).await;
        pb.finish_and_clear();
        if finished.is_err() {
            warn!(
                "Memory logging still pending after {:?}; the query may not be remembered",
                logging_grace
            );
        }
    }

    shown.map(|_| result)
}

fn render(result: &WorkflowResult) -> Result<()> {
    if result.is_skipped() {
        debug!("Empty query, nothing asked");
        println!("{}", "Nothing to ask. Try: fia ask \"What shirt size am I if I weigh 160 lbs?\"".dimmed());
        return Ok(());
    }

    match (&result.answer, &result.error_message) {
        (Some(answer), _) if result.succeeded => {
            println!("{}", "AI Response".bold().magenta());
            println!("{}", answer);
            Ok(())
        }
        (_, Some(message)) => bail!("{}", message),
        _ => bail!("Unknown error occurred while asking the assistant"),
    }
}
