use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the configured API base URL.
pub const API_BASE_ENV: &str = "JARVIS_API_BASE";
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the JARVIS backend, without the `/api/chat` suffix.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Pinned session id. A fresh one is generated per run when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            session_id: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded base URL
        config.api_base = Self::expand(&config.api_base).unwrap_or(config.api_base);

        Ok(Some(config))
    }

    /// Effective configuration: the config file (or defaults), then the
    /// `JARVIS_API_BASE` override.
    pub fn resolve() -> Result<Self, ConfigError> {
        Self::resolve_from_path(Self::config_path())
    }

    pub fn resolve_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        let config = Self::load_from_path(config_path)?.unwrap_or_default();
        Ok(config.with_api_base_override(std::env::var(API_BASE_ENV).ok()))
    }

    /// Replaces `api_base` when `value` is present and non-blank.
    pub fn with_api_base_override(mut self, value: Option<String>) -> Self {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.api_base = value.trim().to_string();
        }
        self
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/jarvis-chat");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand(value: &str) -> Option<String> {
        shellexpand::full(value).ok().map(|expanded| expanded.into_owned())
    }
}
