//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `terrarium.toml` in the working directory unless a path is
//! given. Every field has a sensible default so the file is optional.
//! Environment variables take precedence over file values, and the
//! `--url` flag takes precedence over both.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use terrarium_adapter_http_reqwest::HttpConfig;
use terrarium_domain::view::Labels;

/// Config file read when `--config` is not given.
pub const DEFAULT_PATH: &str = "terrarium.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Controller connection settings.
    pub controller: HttpConfig,
    /// Poll loop settings.
    pub poll: PollConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Indicator texts.
    pub labels: Labels,
}

/// Poll loop configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Seconds between two scheduled refreshes.
    pub period_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (or `terrarium.toml`), apply
    /// environment-variable overrides, then the `base_url` override.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is malformed, if an explicitly given
    /// file cannot be read, or if the result fails validation.
    pub fn load(path: Option<&Path>, base_url: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::from_file(DEFAULT_PATH)?,
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        if let Some(url) = base_url {
            config.controller.base_url = url.to_string();
        }
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    // An explicit path must exist.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(ConfigError::Parse)
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("TERRARIUM_URL") {
            self.controller.base_url = val;
        }
        if let Some(val) = var("TERRARIUM_POLL_SECS")
            && let Ok(secs) = val.parse()
        {
            self.poll.period_secs = secs;
        }
        if let Some(val) = var("TERRARIUM_TIMEOUT_SECS")
            && let Ok(secs) = val.parse()
        {
            self.controller.timeout_secs = secs;
        }
        if let Some(val) = var("TERRARIUM_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.controller.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "controller base_url must not be empty".to_string(),
            ));
        }
        if self.controller.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "controller timeout_secs must be non-zero".to_string(),
            ));
        }
        if self.poll.period_secs == 0 {
            return Err(ConfigError::Validation(
                "poll period_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Period of the poll loop.
    #[must_use]
    pub fn poll_period(&self) -> Duration {
        Duration::from_secs(self.poll.period_secs)
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { period_secs: 10 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "terrarium_dash=info,terrarium=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
