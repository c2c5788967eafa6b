//! Config commands.

use anyhow::Result;
use colored::Colorize;

use crate::cli::{ConfigAction, ConfigCommand};
use crate::config::Config;
use crate::error::FiaError;

/// Execute config command.
pub fn execute(cmd: ConfigCommand, config: &Config) -> Result<()> {
    match cmd.action {
        ConfigAction::Show => {
            print!("{}", toml::to_string_pretty(config)?);
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", Config::config_path().display());
            Ok(())
        }
        ConfigAction::Init { force } => init(&Config::config_path(), force),
    }
}

fn init(path: &std::path::Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(FiaError::ConfigExists(path.display().to_string()).into());
    }

    Config::default().save(path)?;
    println!("{} Wrote {}", "✓".green(), path.display());
    Ok(())
}
