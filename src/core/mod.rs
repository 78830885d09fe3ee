// src/core/mod.rs

/// Content hashing: digest backends, `ContentHash` and `ContentHasher`.
pub mod hash;
/// Defines the immutable `JournalEntry` record.
pub mod entry;
/// Binary wire layout of entries.
pub mod codec;
/// Stored accounts with vote tallies and the ledger instruction envelope.
pub mod instruction;

pub use codec::{decode, encode, EntryCodec};
pub use entry::JournalEntry;
pub use hash::{ContentHash, ContentHasher, DigestBackend};
pub use instruction::{JournalAccount, JournalInstruction};
