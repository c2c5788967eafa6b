//! History command: the profile view's list of prior recommendations.

use anyhow::{Context, Result};
use colored::Colorize;
use fia_core::MemoryStore;

use super::{print_records, spinner};
use crate::config::Config;

/// Execute history command.
pub async fn execute(limit: Option<usize>, json: bool, config: &Config) -> Result<()> {
    let limit = limit.unwrap_or(config.assistant.history_limit);
    let (memory, _) = fia_core::build_collaborators(&config.assistant)
        .context("Failed to set up memory client")?;

    let pb = spinner(config.display.spinner && !json, "Loading history...");
    let records = memory.history(limit).await;
    pb.finish_and_clear();

    let records = records.with_context(|| {
        format!(
            "Failed to retrieve history. Check the service at {}",
            config.assistant.api_root
        )
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "History for".bold(),
        config.assistant.identity.user_id.cyan()
    );
    if records.is_empty() {
        println!("{}", "No history yet. Ask something with `fia ask` first.".dimmed());
        return Ok(());
    }

    print_records(&records, &config.display.time_format);
    println!("{}", format!("{} entries", records.len()).dimmed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_history_in_mock_mode() {
        let mut config = Config::default();
        config.assistant.mock_mode = true;
        config.display.spinner = false;

        tokio_test::assert_ok!(execute(None, false, &config).await);
        tokio_test::assert_ok!(execute(Some(1), true, &config).await);
    }
}
