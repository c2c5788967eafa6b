//! Outfit command: one complete outfit for an event, weather and mood.
//!
//! Uses the outfit API's structured endpoint, or the built-in rule-based
//! stylist with `--offline` (also used in mock mode).

use anyhow::{Context, Result};
use colored::Colorize;
use fia_core::assistant::{HttpAssistant, RuleBasedStylist};
use fia_core::types::OutfitRequest;

use super::spinner;
use crate::cli::OutfitCommand;
use crate::config::Config;

/// Execute outfit command.
pub async fn execute(cmd: OutfitCommand, config: &Config) -> Result<()> {
    let request = OutfitRequest {
        event: cmd.event,
        weather: cmd.weather,
        mood: cmd.mood,
    };

    let suggestion = if cmd.offline || config.assistant.mock_mode {
        let stylist = match cmd.seed {
            Some(seed) => RuleBasedStylist::seeded(seed),
            None => RuleBasedStylist::default(),
        };
        stylist.suggest(&request)
    } else {
        let assistant =
            HttpAssistant::new(&config.assistant).context("Failed to set up outfit client")?;
        let pb = spinner(config.display.spinner, "Styling your outfit...");
        let outfit = assistant.generate_outfit(&request).await;
        pb.finish_and_clear();
        outfit.context("Outfit generation failed")?
    };

    println!("{}", "Outfit Suggestion".bold().magenta());
    println!("{}", suggestion);
    Ok(())
}
