//! # Query Module
//!
//! Assembles a feed from stored ledger accounts:
//! - decoding raw account bytes and skipping records that do not parse
//! - filtering by visibility and owner
//! - newest-first ordering and `skip`/`limit` pagination

/// Feed assembly over decoded accounts.
pub mod engine;
pub mod types;

pub use engine::{assemble_feed, FeedEngine};
pub use types::{FeedItem, FeedQuery};
