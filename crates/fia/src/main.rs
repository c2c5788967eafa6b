//! fia - Fashion Icon Assistant CLI
//!
//! Memory-grounded style, fit and sizing advice from the terminal.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;
mod commands;
mod config;
mod error;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("fia=info".parse()?))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = config::Config::load_from(cli.config.as_deref(), cli.mock)?;

    // Execute command
    match cli.command {
        Commands::Ask { query, json } => commands::ask::execute(&query.join(" "), json, &config).await,
        Commands::Search { query, limit, json } => {
            commands::memory::search(&query.join(" "), limit, json, &config).await
        }
        Commands::Remember { content } => commands::memory::remember(&content.join(" "), &config).await,
        Commands::History { limit, json } => commands::history::execute(limit, json, &config).await,
        Commands::Outfit(cmd) => commands::outfit::execute(cmd, &config).await,
        Commands::Config(cmd) => commands::config::execute(cmd, &config),
        Commands::Version => {
            println!("fia {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
