// src/core/instruction.rs

//! Ledger-side records and the instructions that create and update them.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::core::codec::malformed;
use crate::core::entry::JournalEntry;
use crate::error::{JournalError, Result};

/// The record the ledger stores for a submitted entry: the entry followed
/// by its vote tallies.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct JournalAccount {
    entry: JournalEntry,
    upvotes: u64,
    downvotes: u64,
}

impl JournalAccount {
    /// A fresh account for a new submission, tallies at zero.
    pub fn from_entry(entry: JournalEntry) -> Self {
        JournalAccount {
            entry,
            upvotes: 0,
            downvotes: 0,
        }
    }

    /// Rebuilds an account with known tallies, e.g. from an API response.
    pub fn with_votes(entry: JournalEntry, upvotes: u64, downvotes: u64) -> Self {
        JournalAccount {
            entry,
            upvotes,
            downvotes,
        }
    }

    /// The submitted entry.
    pub fn entry(&self) -> &JournalEntry {
        &self.entry
    }

    /// Consumes the account, returning the entry.
    pub fn into_entry(self) -> JournalEntry {
        self.entry
    }

    /// Number of upvotes.
    pub fn upvotes(&self) -> u64 {
        self.upvotes
    }

    /// Number of downvotes.
    pub fn downvotes(&self) -> u64 {
        self.downvotes
    }

    /// Upvotes minus downvotes.
    pub fn score(&self) -> i128 {
        i128::from(self.upvotes) - i128::from(self.downvotes)
    }

    /// Records one vote.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Overflow`] if the tally is already at `u64::MAX`;
    /// the account is left unchanged.
    pub fn apply_vote(&mut self, is_upvote: bool) -> Result<()> {
        let (tally, name) = if is_upvote {
            (&mut self.upvotes, "upvotes")
        } else {
            (&mut self.downvotes, "downvotes")
        };
        *tally = tally
            .checked_add(1)
            .ok_or_else(|| JournalError::overflow(name))?;
        Ok(())
    }

    /// Serializes to the stored account layout.
    pub fn encode(&self) -> Vec<u8> {
        borsh::to_vec(self).expect("writing an account to a Vec cannot fail")
    }

    /// Parses the stored account layout.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::MalformedRecord`] on any layout violation.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        borsh::from_slice(bytes).map_err(malformed)
    }

    /// Parses an account as read from ledger storage.
    ///
    /// Accounts are allocated at a fixed size, so the record may be followed
    /// by zero padding. Any non-zero byte after the record is still rejected.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::MalformedRecord`] on a layout violation or
    /// non-zero trailing data.
    pub fn decode_stored(bytes: &[u8]) -> Result<Self> {
        let mut rest = bytes;
        let account = <Self as BorshDeserialize>::deserialize(&mut rest).map_err(malformed)?;
        if rest.iter().any(|&b| b != 0) {
            return Err(JournalError::malformed(format!(
                "{} bytes after account record are not zero padding",
                rest.len()
            )));
        }
        Ok(account)
    }
}

/// Tag byte of [`JournalInstruction::SubmitEntry`].
pub const SUBMIT_ENTRY_TAG: u8 = 0;

/// Tag byte of [`JournalInstruction::Vote`].
pub const VOTE_TAG: u8 = 1;

/// Instruction payloads understood by the journal ledger program.
///
/// Encoded as a one-byte tag followed by the variant's fields.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum JournalInstruction {
    /// Store a new entry. Tag 0.
    SubmitEntry(JournalAccount),
    /// Vote on an existing entry. Tag 1.
    Vote {
        /// `true` for an upvote, `false` for a downvote
        is_upvote: bool,
    },
}

impl JournalInstruction {
    /// Submission instruction for a new entry, tallies at zero.
    pub fn submit(entry: JournalEntry) -> Self {
        JournalInstruction::SubmitEntry(JournalAccount::from_entry(entry))
    }

    /// Vote instruction.
    pub fn vote(is_upvote: bool) -> Self {
        JournalInstruction::Vote { is_upvote }
    }

    /// The instruction's tag byte.
    pub fn tag(&self) -> u8 {
        match self {
            JournalInstruction::SubmitEntry(_) => SUBMIT_ENTRY_TAG,
            JournalInstruction::Vote { .. } => VOTE_TAG,
        }
    }

    /// Serializes the tagged payload.
    pub fn encode(&self) -> Vec<u8> {
        borsh::to_vec(self).expect("writing an instruction to a Vec cannot fail")
    }

    /// Parses a tagged payload.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::MalformedRecord`] for an empty buffer, an
    /// unknown tag, a malformed body or trailing bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        match bytes.first() {
            None => Err(JournalError::malformed("instruction is empty")),
            Some(&tag) if tag != SUBMIT_ENTRY_TAG && tag != VOTE_TAG => Err(
                JournalError::malformed(format!("unknown instruction tag {}", tag)),
            ),
            Some(_) => borsh::from_slice(bytes).map_err(malformed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::encode;
    use crate::core::hash::ContentHash;

    fn entry() -> JournalEntry {
        JournalEntry::with_timestamp(
            ContentHash::parse(&"cd".repeat(32)).unwrap(),
            false,
            42,
            "owner",
        )
    }

    #[test]
    fn test_account_layout_extends_entry() {
        let account = JournalAccount::with_votes(entry(), 3, 1);
        let bytes = account.encode();
        let entry_bytes = encode(&entry());
        assert_eq!(&bytes[..entry_bytes.len()], entry_bytes.as_slice());
        assert_eq!(&bytes[entry_bytes.len()..entry_bytes.len() + 8], &3u64.to_le_bytes());
        assert_eq!(&bytes[entry_bytes.len() + 8..], &1u64.to_le_bytes());
        assert_eq!(JournalAccount::decode(&bytes).unwrap(), account);
    }

    #[test]
    fn test_decode_stored_accepts_zero_padding() {
        let account = JournalAccount::with_votes(entry(), 2, 0);
        let mut bytes = account.encode();
        bytes.resize(bytes.len() + 32, 0);
        assert!(matches!(
            JournalAccount::decode(&bytes),
            Err(JournalError::MalformedRecord(_))
        ));
        assert_eq!(JournalAccount::decode_stored(&bytes).unwrap(), account);

        let last = bytes.len() - 1;
        bytes[last] = 9;
        assert!(matches!(
            JournalAccount::decode_stored(&bytes),
            Err(JournalError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_apply_vote() {
        let mut account = JournalAccount::from_entry(entry());
        account.apply_vote(true).unwrap();
        account.apply_vote(true).unwrap();
        account.apply_vote(false).unwrap();
        assert_eq!(account.upvotes(), 2);
        assert_eq!(account.downvotes(), 1);
        assert_eq!(account.score(), 1);
    }

    #[test]
    fn test_apply_vote_overflow() {
        let mut account = JournalAccount::with_votes(entry(), u64::MAX, 0);
        let err = account.apply_vote(true).unwrap_err();
        assert!(matches!(err, JournalError::Overflow(_)));
        assert_eq!(account.upvotes(), u64::MAX);
        account.apply_vote(false).unwrap();
        assert_eq!(account.downvotes(), 1);
    }

    #[test]
    fn test_instruction_tags() {
        let submit = JournalInstruction::submit(entry()).encode();
        assert_eq!(submit[0], SUBMIT_ENTRY_TAG);
        assert_eq!(JournalInstruction::vote(true).encode(), vec![VOTE_TAG, 1]);
        assert_eq!(JournalInstruction::vote(false).encode(), vec![VOTE_TAG, 0]);
    }

    #[test]
    fn test_instruction_decode_errors() {
        assert!(matches!(
            JournalInstruction::decode(&[]),
            Err(JournalError::MalformedRecord(_))
        ));
        assert!(matches!(
            JournalInstruction::decode(&[7]),
            Err(JournalError::MalformedRecord(_))
        ));
        assert!(matches!(
            JournalInstruction::decode(&[VOTE_TAG, 2]),
            Err(JournalError::MalformedRecord(_))
        ));
        assert!(matches!(
            JournalInstruction::decode(&[VOTE_TAG, 1, 0]),
            Err(JournalError::MalformedRecord(_))
        ));
    }
}
