//! Configuration management for dejournal
//!
//! This module handles loading, validating, and providing access to the
//! crate configuration. It supports loading configuration from TOML files,
//! environment variables, and programmatic overrides.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod validation;

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod validation_tests;

#[cfg(test)]
#[path = "tests/config_mod_tests.rs"]
mod config_mod_tests;

use std::{
    env,
    fs,
    path::{Path, PathBuf},
};
use directories::ProjectDirs;

use serde::{Deserialize, Serialize};

use crate::types::{HashBackendKind, LogLevel, Normalization};

/// Re-export the error type
pub use error::ConfigError;

/// The environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "DJ_";

/// The application name used for finding config directories
const APP_NAME: &str = "dejournal";

/// Main configuration structure for dejournal.
///
/// # Example
///
/// ```no_run
/// use dejournal::config::Config;
///
/// // A missing file falls back to defaults plus environment overrides.
/// let config = Config::load("dejournal.toml").unwrap();
/// assert!(config.feed.default_limit > 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Content hashing configuration
    pub hashing: HashingConfig,

    /// Wire codec limits
    pub codec: CodecConfig,

    /// Feed assembly configuration
    pub feed: FeedConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Content hashing configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct HashingConfig {
    /// Digest backend to select at startup
    pub backend: HashBackendKind,
    /// Unicode normalization applied before hashing
    pub normalization: Normalization,
}

/// Wire codec limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CodecConfig {
    /// Longest owner string, in bytes, accepted when decoding
    pub max_owner_len: u32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { max_owner_len: 128 }
    }
}

/// Feed assembly configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct FeedConfig {
    /// Page size used when a query does not name one
    pub default_limit: usize,
    /// Upper bound for any requested page size
    pub max_limit: usize,
    /// Whether the default query hides private entries
    pub public_only: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            default_limit: crate::query::types::DEFAULT_FEED_LIMIT,
            max_limit: 100,
            public_only: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,
    /// Whether to log to the console (stderr)
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            console: true,
        }
    }
}

impl Config {
    /// Loads the configuration from the specified path.
    ///
    /// A missing file is not an error: defaults are used instead. Environment
    /// overrides with the `DJ_` prefix are applied in both cases, then the
    /// result is validated.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, if an
    /// environment override cannot be parsed, or if validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let mut config = match fs::read_to_string(path) {
            Ok(config_str) => Self::from_toml_str(&config_str)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("Config file not found at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        config.apply_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a configuration from TOML text without applying overrides.
    pub fn from_toml_str(config_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(config_str)?)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Variables are prefixed with `DJ_` and use `_` as a separator, e.g.
    /// `DJ_LOGGING_LEVEL=debug` or `DJ_HASHING_BACKEND=sha2`.
    ///
    /// # Errors
    ///
    /// Returns an error if any recognised variable cannot be parsed.
    pub fn apply_env_vars(&mut self) -> Result<(), ConfigError> {
        for (key, value) in env::vars() {
            let Some(stripped) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            match stripped.to_lowercase().as_str() {
                "logging_level" => {
                    self.logging.level = value.parse().map_err(|_| {
                        ConfigError::invalid_value("logging.level", value, "Invalid log level")
                    })?;
                }
                "hashing_backend" => {
                    self.hashing.backend = value.parse().map_err(|_| {
                        ConfigError::invalid_value("hashing.backend", value, "Expected auto, sha2 or ring")
                    })?;
                }
                "hashing_normalization" => {
                    self.hashing.normalization = value.parse().map_err(|_| {
                        ConfigError::invalid_value("hashing.normalization", value, "Expected none or nfc")
                    })?;
                }
                "feed_default_limit" => {
                    self.feed.default_limit = value.parse().map_err(|_| {
                        ConfigError::invalid_value("feed.default_limit", value, "Expected a positive integer")
                    })?;
                }
                "feed_max_limit" => {
                    self.feed.max_limit = value.parse().map_err(|_| {
                        ConfigError::invalid_value("feed.max_limit", value, "Expected a positive integer")
                    })?;
                }
                other => log::debug!("Ignoring unrecognised variable {}{}", ENV_PREFIX, other.to_uppercase()),
            }
        }

        Ok(())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first failed check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }

    /// Returns the path to the directory where configuration files should be stored.
    ///
    /// This is OS-specific:
    /// - Linux: `$HOME/.config/dejournal`
    /// - macOS: `$HOME/Library/Application Support/org.dejournal.dejournal`
    /// - Windows: `%APPDATA%\\dejournal\\dejournal`
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("org", APP_NAME, APP_NAME)
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
    }

    /// Default location of the configuration file inside [`Config::config_dir`].
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }
}
