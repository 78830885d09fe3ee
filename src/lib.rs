// src/lib.rs

//! Content addressing and wire-record encoding for decentralized journal entries.
//!
//! Text is hashed with SHA-256 into a [`ContentHash`]; a [`JournalEntry`]
//! carrying that hash is encoded into a fixed binary layout for submission
//! to a ledger or HTTP endpoint, and decoded back when reading a feed.

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod ffi;
pub mod query;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

use std::path::PathBuf;
use std::sync::OnceLock;

pub use crate::api::sync_api::{decode, encode, hash, Journal};
pub use crate::config::Config;
pub use crate::core::{ContentHash, ContentHasher, JournalAccount, JournalEntry, JournalInstruction};
pub use crate::error::{JournalError, Result};
pub use crate::types::{HashBackendKind, LogLevel, Normalization};

static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

/// Loads configuration and installs the logger.
///
/// With `config_path` of `None` the OS config directory is searched; a
/// missing file means defaults. The loaded configuration is kept for the
/// life of the process and returned. Only the first successful call takes
/// effect.
///
/// # Errors
///
/// Returns [`JournalError::Config`] if the configuration cannot be loaded and
/// [`JournalError::InvalidInput`] if the crate was already initialized or a
/// logger is already installed.
pub fn init(config_path: Option<&str>) -> Result<&'static Config> {
    let path = match config_path {
        Some(p) => PathBuf::from(p),
        None => Config::default_path().unwrap_or_else(|| PathBuf::from("dejournal.toml")),
    };
    let config = Config::load(&path)?;
    if GLOBAL_CONFIG.get().is_some() {
        return Err(already_initialized());
    }

    #[cfg(feature = "logging")]
    {
        if config.logging.console {
            env_logger::Builder::new()
                .filter_level(config.logging.level.as_level_filter())
                .try_init()
                .map_err(|e| JournalError::invalid_input(format!("Logger already initialized: {}", e)))?;
        }
    }

    GLOBAL_CONFIG.set(config).map_err(|_| already_initialized())?;
    log::info!("dejournal initialized from {}", path.display());
    global_config()
}

fn already_initialized() -> JournalError {
    JournalError::invalid_input("dejournal is already initialized")
}

/// The configuration stored by [`init`].
///
/// # Errors
///
/// Returns [`JournalError::NotInitialized`] before a successful [`init`].
pub fn global_config() -> Result<&'static Config> {
    GLOBAL_CONFIG
        .get()
        .ok_or_else(|| JournalError::NotInitialized("config".to_string()))
}
