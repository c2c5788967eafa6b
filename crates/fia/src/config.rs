//! Configuration management for fia.
//!
//! Configuration is loaded from multiple sources with precedence:
//! 1. Command-line flags (`--config`, `--mock`)
//! 2. Environment variables (FIA_*)
//! 3. Config file (platform config dir, e.g. ~/.config/fia/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use fia_core::AssistantConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FiaError, FiaResult};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoints, mock mode and identity handed to fia-core
    pub assistant: AssistantConfig,

    /// Terminal output settings
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show a spinner while a request is in flight
    pub spinner: bool,

    /// strftime format for history entries older than a week
    pub time_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            spinner: true,
            time_format: "%Y-%m-%d %H:%M".to_string(),
        }
    }
}

fn default_config_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("dev", "fashion-icon", "fia") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fia")
    }
}

impl Config {
    /// Load configuration from `path` (or the default location) and the environment.
    ///
    /// `force_mock` comes from the `--mock` flag and wins over every other source.
    pub fn load_from(path: Option<&Path>, force_mock: bool) -> FiaResult<Self> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        let mut config = Self::read_file(&config_path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        if force_mock {
            config.assistant.mock_mode = true;
        }
        config.assistant.validate()?;

        Ok(config)
    }

    /// Read a config file, falling back to defaults when it does not exist.
    pub fn read_file(path: &Path) -> FiaResult<Self> {
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply FIA_* overrides using `lookup` to read variables.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> FiaResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("FIA_API_ROOT") {
            self.assistant.api_root = url;
        }
        if let Some(url) = lookup("FIA_MEMORY_API_BASE") {
            self.assistant.memory_api_base = url;
        }
        if let Some(path) = lookup("FIA_PROMPT_PATH") {
            self.assistant.prompt_path = path;
        }
        if let Some(flag) = lookup("FIA_MOCK_MODE") {
            self.assistant.mock_mode = parse_flag(&flag).ok_or_else(|| {
                FiaError::Config(format!("FIA_MOCK_MODE must be true or false, got {:?}", flag))
            })?;
        }
        if let Some(user) = lookup("FIA_USER_ID") {
            self.assistant.identity.user_id = user;
        }
        Ok(())
    }

    /// Save configuration to `path`.
    pub fn save(&self, path: &Path) -> FiaResult<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the config file path.
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("FIA_CONFIG") {
            PathBuf::from(path)
        } else {
            default_config_dir().join("config.toml")
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.assistant.api_root, "http://localhost:8000");
        assert_eq!(config.assistant.memory_api_base, "http://0.0.0.0:8080");
        assert!(!config.assistant.mock_mode);
        assert!(config.display.spinner);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = tempdir().expect("Failed to create temp dir");
        let config = Config::read_file(&temp.path().join("nope.toml")).expect("defaults");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = tempdir().expect("Failed to create temp dir");
        let path = temp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.assistant.api_root = "http://stylist.local:9000".into();
        config.assistant.mock_mode = true;
        config.display.spinner = false;

        config.save(&path).expect("Failed to save config");
        assert!(path.exists());

        let loaded = Config::read_file(&path).expect("Failed to load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = tempdir().expect("Failed to create temp dir");
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "[assistant]\nmemory_api_base = \"http://memmachine:8080\"\n\n[assistant.identity]\nuser_id = \"shopper_42\"\n",
        )
        .unwrap();

        let config = Config::read_file(&path).expect("Failed to load config");
        assert_eq!(config.assistant.memory_api_base, "http://memmachine:8080");
        assert_eq!(config.assistant.identity.user_id, "shopper_42");
        assert_eq!(config.assistant.identity.group_id, "fashion-group-01");
        assert_eq!(config.assistant.api_root, "http://localhost:8000");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp = tempdir().expect("Failed to create temp dir");
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "assistant = [not valid").unwrap();

        let err = Config::read_file(&path).unwrap_err();
        assert!(matches!(err, FiaError::Config(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[
                ("FIA_API_ROOT", "http://api:8000"),
                ("FIA_MEMORY_API_BASE", "http://mem:8080"),
                ("FIA_PROMPT_PATH", "/ask"),
                ("FIA_MOCK_MODE", "yes"),
                ("FIA_USER_ID", "shopper_7"),
            ]))
            .unwrap();

        assert_eq!(config.assistant.api_root, "http://api:8000");
        assert_eq!(config.assistant.memory_api_base, "http://mem:8080");
        assert_eq!(config.assistant.prompt_path, "/ask");
        assert!(config.assistant.mock_mode);
        assert_eq!(config.assistant.identity.user_id, "shopper_7");
    }

    #[test]
    fn test_force_mock_skips_url_validation() {
        let temp = tempdir().expect("Failed to create temp dir");
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[assistant]\napi_root = \"not a url\"\n").unwrap();

        assert!(Config::load_from(Some(&path), false).is_err());
        let config = Config::load_from(Some(&path), true).expect("mock config");
        assert!(config.assistant.mock_mode);
    }

    #[test]
    fn test_bad_mock_flag_is_rejected() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(env(&[("FIA_MOCK_MODE", "sometimes")]))
            .unwrap_err();
        assert!(err.to_string().contains("FIA_MOCK_MODE"));
    }
}
