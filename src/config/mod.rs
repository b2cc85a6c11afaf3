// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{Result, TranslateError};
use config::{Config, Environment, File};
use std::path::PathBuf;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Prefix for configuration overrides, e.g. `GEMINI_TRANSLATE__GEMINI__DEFAULT_MODEL`.
pub const ENV_PREFIX: &str = "GEMINI_TRANSLATE";

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest)
    /// 2. Config file
    /// 3. Defaults (lowest)
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_config_path())
    }

    /// Same as [`AppConfig::load`] with an explicit config file path.
    /// A missing file is not an error.
    pub fn load_from(path: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .map_err(|e| TranslateError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| TranslateError::Config(e.to_string()))
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gemini-translate")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}

/// Read the API key, treating an empty value the same as an unset one.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty())
}
