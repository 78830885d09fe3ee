//! Error types for dejournal
//!
//! This module defines the error types used throughout the crate. The main
//! error type is `JournalError`, which covers hashing, record decoding and
//! the ambient configuration and I/O failures. Every variant is recoverable
//! at the call site.

use thiserror::Error;

/// Main error type for dejournal
#[derive(Error, Debug)]
pub enum JournalError {
    /// Content to hash was empty or whitespace only
    #[error("Empty input: content must not be empty")]
    EmptyInput,

    /// No usable cryptographic primitive in this execution environment
    #[error("Unsupported environment: {0}")]
    UnsupportedEnvironment(String),

    /// A byte sequence does not follow the record layout
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A counter would exceed its range
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error (JSON): {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// A background task failed before producing a result
    #[error("Async task error: {0}")]
    Async(String),

    /// Resource is not initialized
    #[error("Resource not initialized: {0}")]
    NotInitialized(String),
}

/// Result type alias for operations that can fail with a [JournalError]
pub type Result<T> = std::result::Result<T, JournalError>;

impl JournalError {
    /// Create a new malformed record error
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        JournalError::MalformedRecord(msg.into())
    }

    /// Create a new invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        JournalError::InvalidInput(msg.into())
    }

    /// Create a new unsupported environment error
    pub fn unsupported<S: Into<String>>(what: S) -> Self {
        JournalError::UnsupportedEnvironment(what.into())
    }

    /// Create a new overflow error
    pub fn overflow<S: Into<String>>(what: S) -> Self {
        JournalError::Overflow(what.into())
    }
}

impl From<std::string::FromUtf8Error> for JournalError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        JournalError::malformed(format!("UTF-8 conversion error: {}", err))
    }
}

#[cfg(feature = "async")]
impl From<tokio::task::JoinError> for JournalError {
    fn from(err: tokio::task::JoinError) -> Self {
        JournalError::Async(err.to_string())
    }
}
