//! Core type definitions for dejournal

mod hashing;
mod log_level;

pub use hashing::{HashBackendKind, Normalization};
pub use log_level::LogLevel;
