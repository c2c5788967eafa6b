//! Direct memory-store commands.
//!
//! Unlike `ask`, failures here are reported: the user asked for the memory
//! operation itself.

use anyhow::{Context, Result, bail};
use colored::Colorize;
use fia_core::MemoryStore;
use fia_core::memory::Metadata;

use super::{print_records, spinner};
use crate::config::Config;

/// Search memories.
pub async fn search(query: &str, limit: usize, json: bool, config: &Config) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        bail!("Search query must not be empty");
    }

    let (memory, _) = fia_core::build_collaborators(&config.assistant)
        .context("Failed to set up memory client")?;

    let pb = spinner(config.display.spinner && !json, "Searching history...");
    let records = memory.search(query, limit).await;
    pb.finish_and_clear();
    let records = records.context("Memory search failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("{}", "No matching memories.".dimmed());
        return Ok(());
    }

    println!("{} {}", "Memories for".bold(), format!("\"{}\"", query).cyan());
    print_records(&records, &config.display.time_format);
    Ok(())
}

/// Store content as a new memory episode.
pub async fn remember(content: &str, config: &Config) -> Result<()> {
    let content = content.trim();
    if content.is_empty() {
        bail!("Nothing to remember");
    }

    let (memory, _) = fia_core::build_collaborators(&config.assistant)
        .context("Failed to set up memory client")?;

    let pb = spinner(config.display.spinner, "Logging memory...");
    let ack = memory.append(content, &Metadata::new()).await;
    pb.finish_and_clear();
    ack.context("Failed to store memory")?;

    println!(
        "{} Stored as {} for {}",
        "✓".green(),
        config.assistant.identity.episode_type.cyan(),
        config.assistant.identity.user_id
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_config() -> Config {
        let mut config = Config::default();
        config.assistant.mock_mode = true;
        config.display.spinner = false;
        config
    }

    #[tokio::test]
    async fn test_search_in_mock_mode() {
        tokio_test::assert_ok!(search("sweater", 5, true, &mock_config()).await);
    }

    #[tokio::test]
    async fn test_empty_search_is_rejected() {
        tokio_test::assert_err!(search("   ", 5, false, &mock_config()).await);
    }

    #[tokio::test]
    async fn test_remember_in_mock_mode() {
        tokio_test::assert_ok!(remember("size 9 shoes", &mock_config()).await);
        tokio_test::assert_err!(remember("", &mock_config()).await);
    }
}
