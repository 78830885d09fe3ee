// src/test_utils.rs

#![cfg(test)] // Ensure this module is only compiled for tests

use crate::core::entry::JournalEntry;
use crate::core::hash::ContentHash;

/// The entry used across unit tests: `"ab" * 32`, public, 1_700_000_000, `WALLET1`.
pub fn sample_entry() -> JournalEntry {
    JournalEntry::with_timestamp(sample_hash(), true, 1_700_000_000, "WALLET1")
}

/// A fixed, well-formed content hash.
pub fn sample_hash() -> ContentHash {
    ContentHash::parse(&"ab".repeat(32)).expect("valid hex")
}
