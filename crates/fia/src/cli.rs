//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Fashion Icon Assistant
///
/// Style, fit and sizing advice grounded in your shopping history.
#[derive(Parser, Debug)]
#[command(name = "fia")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to $FIA_CONFIG or the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Use canned memory and assistant responses instead of the network
    #[arg(long, global = true)]
    pub mock: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask for advice grounded in your history (search → compose → ask)
    Ask {
        /// Question, e.g. "What shirt size am I if I weigh 160 lbs?"
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,

        /// Output the workflow result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Search the memory store directly
    Search {
        /// Search text
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,

        /// Maximum records to return
        #[arg(short, long, default_value = "5")]
        limit: usize,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Store a note in the memory store
    Remember {
        /// Content to store
        #[arg(required = true, trailing_var_arg = true)]
        content: Vec<String>,
    },

    /// List prior outfit recommendations and queries
    History {
        /// Maximum records to list (defaults to the configured history limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Generate a complete outfit for an event, weather and mood
    Outfit(OutfitCommand),

    /// Configuration management
    Config(ConfigCommand),

    /// Show version
    Version,
}

// ─────────────────────────────────────────────────────────────────────────────
// Outfit Commands
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Args, Debug)]
pub struct OutfitCommand {
    /// Event, e.g. "dinner with friends"
    #[arg(short, long)]
    pub event: String,

    /// Weather, e.g. "70°F"
    #[arg(short, long)]
    pub weather: String,

    /// Mood or style, e.g. "casual"
    #[arg(short, long)]
    pub mood: String,

    /// Use the built-in rule-based stylist instead of the outfit API
    #[arg(long)]
    pub offline: bool,

    /// Seed for reproducible offline suggestions
    #[arg(long, requires = "offline")]
    pub seed: Option<u64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
