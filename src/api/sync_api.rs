// src/api/sync_api.rs

use crate::config::Config;
use crate::core::codec::{self, EntryCodec};
use crate::core::entry::JournalEntry;
use crate::core::hash::{default_hasher, ContentHash, ContentHasher};
use crate::core::instruction::JournalInstruction;
use crate::error::Result;
use crate::query::{FeedEngine, FeedItem, FeedQuery};

/// Hashes `content` with the process-wide default hasher.
///
/// # Errors
///
/// [`crate::JournalError::EmptyInput`] for empty content,
/// [`crate::JournalError::UnsupportedEnvironment`] if no digest backend is available.
pub fn hash(content: &str) -> Result<ContentHash> {
    default_hasher()?.hash(content)
}

/// Serializes an entry to its wire bytes.
pub fn encode(entry: &JournalEntry) -> Vec<u8> {
    codec::encode(entry)
}

/// Parses wire bytes into an entry.
///
/// # Errors
///
/// [`crate::JournalError::MalformedRecord`] when the bytes do not follow the layout.
pub fn decode(bytes: &[u8]) -> Result<JournalEntry> {
    codec::decode(bytes)
}

/// Configured front door for a rendering surface.
///
/// Built once from a [`Config`]; the digest backend is detected at
/// construction and reused for every call.
#[derive(Debug, Clone)]
pub struct Journal {
    hasher: ContentHasher,
    codec: EntryCodec,
    feed: FeedEngine,
}

impl Journal {
    /// Creates a journal from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured hash backend is unavailable.
    pub fn new(config: &Config) -> Result<Self> {
        let hasher = ContentHasher::from_config(&config.hashing)?;
        log::info!(
            "Journal ready (hash backend {}, normalization {})",
            hasher.backend_name(),
            hasher.normalization()
        );
        Ok(Self {
            hasher,
            codec: EntryCodec::new(config.codec.clone()),
            feed: FeedEngine::new(config.feed.clone())
                .with_codec(EntryCodec::new(config.codec.clone())),
        })
    }

    /// The hasher selected at construction.
    pub fn hasher(&self) -> &ContentHasher {
        &self.hasher
    }

    /// Hashes `content`.
    pub fn hash(&self, content: &str) -> Result<ContentHash> {
        self.hasher.hash(content)
    }

    /// Builds a new entry for `content`, stamped with the current time.
    pub fn new_entry(&self, content: &str, is_public: bool, owner: &str) -> Result<JournalEntry> {
        JournalEntry::from_content(&self.hasher, content, is_public, owner)
    }

    /// Serializes an entry.
    pub fn encode(&self, entry: &JournalEntry) -> Vec<u8> {
        self.codec.encode(entry)
    }

    /// Parses an entry, applying the configured limits.
    pub fn decode(&self, bytes: &[u8]) -> Result<JournalEntry> {
        self.codec.decode(bytes)
    }

    /// Hashes `content` and returns the new entry with its submission
    /// instruction bytes.
    pub fn submit_instruction(
        &self,
        content: &str,
        is_public: bool,
        owner: &str,
    ) -> Result<(JournalEntry, Vec<u8>)> {
        let entry = self.new_entry(content, is_public, owner)?;
        let bytes = JournalInstruction::submit(entry.clone()).encode();
        log::debug!(
            "Built submit instruction for {} ({} bytes)",
            entry.content_hash(),
            bytes.len()
        );
        Ok((entry, bytes))
    }

    /// Vote instruction bytes.
    pub fn vote_instruction(&self, is_upvote: bool) -> Vec<u8> {
        JournalInstruction::vote(is_upvote).encode()
    }

    /// The configured default feed query.
    pub fn default_query(&self) -> FeedQuery {
        self.feed.default_query()
    }

    /// Assembles a feed page from stored account records.
    pub fn feed<I, A, B>(&self, records: I, query: &FeedQuery) -> Vec<FeedItem>
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: AsRef<[u8]>,
    {
        self.feed.assemble(records, query)
    }
}
