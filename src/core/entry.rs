// src/core/entry.rs
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::core::hash::{ContentHash, ContentHasher};
use crate::error::Result;

/// Seed prefix the ledger uses when deriving an entry's storage address.
pub const ADDRESS_SEED_PREFIX: &[u8] = b"journal";

/// A single journal entry as submitted to the ledger.
///
/// Entries are immutable: fields are set once at construction and only
/// exposed through accessors. Resubmitting text creates a new entry with a
/// fresh timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    content_hash: ContentHash,
    is_public: bool,
    timestamp: u64,
    owner: String,
}

impl JournalEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(content_hash: ContentHash, is_public: bool, owner: impl Into<String>) -> Self {
        Self::with_timestamp(content_hash, is_public, current_timestamp(), owner)
    }

    /// Creates an entry with an explicit timestamp (seconds since the epoch).
    pub fn with_timestamp(
        content_hash: ContentHash,
        is_public: bool,
        timestamp: u64,
        owner: impl Into<String>,
    ) -> Self {
        JournalEntry {
            content_hash,
            is_public,
            timestamp,
            owner: owner.into(),
        }
    }

    /// Hashes `content` and builds an entry for it, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Propagates hashing errors, e.g. [`crate::JournalError::EmptyInput`].
    pub fn from_content(
        hasher: &ContentHasher,
        content: &str,
        is_public: bool,
        owner: impl Into<String>,
    ) -> Result<Self> {
        let content_hash = hasher.hash(content)?;
        Ok(Self::new(content_hash, is_public, owner))
    }

    /// Content-addressed identifier of the entry text.
    pub fn content_hash(&self) -> &ContentHash {
        &self.content_hash
    }

    /// Whether the entry appears in the public feed.
    pub fn is_public(&self) -> bool {
        self.is_public
    }

    /// Seconds since the Unix epoch.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Wallet address of the author, or empty if not yet known.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Seeds for the ledger's storage address of this entry:
    /// `"journal"`, the owner's raw key bytes, the hash as UTF-8.
    pub fn address_seeds(&self, owner_key: &[u8]) -> [Vec<u8>; 3] {
        [
            ADDRESS_SEED_PREFIX.to_vec(),
            owner_key.to_vec(),
            self.content_hash.as_str().as_bytes().to_vec(),
        ]
    }
}

/// Current time in whole seconds since the epoch. Clocks before 1970 read as 0.
pub fn current_timestamp() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or(0)
}
