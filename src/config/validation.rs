//! Configuration validation for dejournal
//!
//! Checks that configured values are within acceptable ranges and
//! consistent with each other.

use super::error::ConfigError;
use super::{CodecConfig, Config, FeedConfig, LoggingConfig};
use crate::types::LogLevel;

/// Validates the whole configuration.
///
/// # Errors
///
/// Returns a `ConfigError` for the first check that fails.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    validate_codec_config(&config.codec)?;
    validate_feed_config(&config.feed)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validates the codec configuration.
fn validate_codec_config(config: &CodecConfig) -> Result<(), ConfigError> {
    if config.max_owner_len == 0 {
        return Err(ConfigError::invalid_value(
            "codec.max_owner_len",
            config.max_owner_len,
            "max_owner_len must be greater than 0",
        ));
    }
    Ok(())
}

/// Validates the feed configuration.
fn validate_feed_config(config: &FeedConfig) -> Result<(), ConfigError> {
    if config.default_limit == 0 {
        return Err(ConfigError::invalid_value(
            "feed.default_limit",
            config.default_limit,
            "default_limit must be greater than 0",
        ));
    }

    if config.max_limit < config.default_limit {
        return Err(ConfigError::invalid_value(
            "feed.max_limit",
            config.max_limit,
            format!("max_limit must be at least default_limit ({})", config.default_limit),
        ));
    }

    Ok(())
}

/// Validates the logging configuration.
fn validate_logging_config(config: &LoggingConfig) -> Result<(), ConfigError> {
    if !config.console && config.level != LogLevel::Off {
        log::warn!("Console logging disabled; level {} has no effect", config.level);
    }
    Ok(())
}
