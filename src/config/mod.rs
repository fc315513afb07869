//! Configuration module for fcmdr
//!
//! Manages application configuration including the interpreter model and
//! the movies root. Configuration is stored in the user's config directory.

mod setup;

pub use setup::first_time_setup;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Interpreter model used when the configuration does not name one
pub const DEFAULT_MODEL: &str = "openrouter/deepseek/deepseek-r1";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FcmdrConfig {
    /// OpenRouter model used to interpret commands
    #[serde(default = "default_model")]
    pub model: String,

    /// Root of the media tree searched by play commands
    /// (defaults to `<home>/Movies` when unset)
    #[serde(default)]
    pub movies_dir: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for FcmdrConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            movies_dir: None,
            quiet: false,
        }
    }
}

impl FcmdrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        let fcmdr_config_dir = config_dir.join("fcmdr");
        Ok(fcmdr_config_dir.join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FcmdrConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.movies_dir.is_none());
        assert!(!config.quiet);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: FcmdrConfig = toml::from_str("").unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.movies_dir.is_none());
    }

    #[test]
    fn test_deserialize_explicit_values() {
        let config: FcmdrConfig = toml::from_str(
            "model = \"openrouter/meta/llama-3\"\nmovies_dir = \"/srv/media\"\nquiet = true\n",
        )
        .unwrap();

        assert_eq!(config.model, "openrouter/meta/llama-3");
        assert_eq!(config.movies_dir, Some(PathBuf::from("/srv/media")));
        assert!(config.quiet);
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = FcmdrConfig {
            model: "openrouter/test/model".into(),
            movies_dir: Some(PathBuf::from("/data/movies")),
            quiet: true,
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let restored: FcmdrConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(restored.model, config.model);
        assert_eq!(restored.movies_dir, config.movies_dir);
        assert_eq!(restored.quiet, config.quiet);
    }
}
