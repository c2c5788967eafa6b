//! Error types for fia.

use thiserror::Error;

/// Main error type for fia's own operations.
#[derive(Error, Debug)]
pub enum FiaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file already exists: {0}")]
    ConfigExists(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for FiaError {
    fn from(e: toml::de::Error) -> Self {
        FiaError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for FiaError {
    fn from(e: toml::ser::Error) -> Self {
        FiaError::Serialization(e.to_string())
    }
}

impl From<fia_core::Error> for FiaError {
    fn from(e: fia_core::Error) -> Self {
        FiaError::Config(e.to_string())
    }
}

/// Result type alias for fia operations.
pub type FiaResult<T> = Result<T, FiaError>;
