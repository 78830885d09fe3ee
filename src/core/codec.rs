// src/core/codec.rs

//! Binary wire layout of a [`JournalEntry`].
//!
//! ```text
//! [len: u32 LE][content_hash: UTF-8][is_public: u8][timestamp: u64 LE][len: u32 LE][owner: UTF-8]
//! ```
//!
//! This is the Borsh layout of the record, so the same bytes are accepted by
//! any consumer that parses the entry with a Borsh schema. The field order
//! and widths are fixed; adding a field needs a new instruction tag rather
//! than a silent layout change.

use borsh::io::{Error as IoError, ErrorKind, Read, Write};
use borsh::{BorshDeserialize, BorshSerialize};

use crate::config::CodecConfig;
use crate::core::entry::JournalEntry;
use crate::core::hash::ContentHash;
use crate::core::instruction::JournalAccount;
use crate::error::{JournalError, Result};

/// Width of a string length prefix.
pub const LEN_PREFIX_LEN: usize = 4;

/// Smallest possible encoding: two empty strings, the flag and the timestamp.
pub const MIN_ENCODED_LEN: usize = LEN_PREFIX_LEN + 1 + 8 + LEN_PREFIX_LEN;

impl BorshSerialize for JournalEntry {
    fn serialize<W: Write>(&self, writer: &mut W) -> borsh::io::Result<()> {
        self.content_hash().as_str().serialize(writer)?;
        u8::from(self.is_public()).serialize(writer)?;
        self.timestamp().serialize(writer)?;
        self.owner().serialize(writer)
    }
}

impl BorshDeserialize for JournalEntry {
    fn deserialize_reader<R: Read>(reader: &mut R) -> borsh::io::Result<Self> {
        let raw_hash = String::deserialize_reader(reader)?;
        let content_hash = ContentHash::parse(&raw_hash)
            .map_err(|e| IoError::new(ErrorKind::InvalidData, e.to_string()))?;
        let is_public = match u8::deserialize_reader(reader)? {
            0 => false,
            1 => true,
            other => {
                return Err(IoError::new(
                    ErrorKind::InvalidData,
                    format!("is_public byte must be 0 or 1, got {}", other),
                ))
            }
        };
        let timestamp = u64::deserialize_reader(reader)?;
        let owner = String::deserialize_reader(reader)?;
        Ok(JournalEntry::with_timestamp(content_hash, is_public, timestamp, owner))
    }
}

impl JournalEntry {
    /// Exact size of [`encode`]'s output for this entry.
    pub fn encoded_len(&self) -> usize {
        LEN_PREFIX_LEN
            + self.content_hash().as_str().len()
            + 1
            + 8
            + LEN_PREFIX_LEN
            + self.owner().len()
    }
}

pub(crate) fn malformed(err: IoError) -> JournalError {
    JournalError::malformed(err.to_string())
}

/// Serializes an entry to its wire bytes. Field-wise equal entries always
/// produce identical bytes.
pub fn encode(entry: &JournalEntry) -> Vec<u8> {
    let mut buf = Vec::with_capacity(entry.encoded_len());
    entry
        .serialize(&mut buf)
        .expect("writing an entry to a Vec cannot fail");
    log::trace!("Encoded entry {} into {} bytes", entry.content_hash(), buf.len());
    buf
}

/// Parses wire bytes back into an entry.
///
/// # Errors
///
/// Returns [`JournalError::MalformedRecord`] when the buffer is shorter than
/// [`MIN_ENCODED_LEN`], a length prefix runs past the end, `is_public` is not
/// 0 or 1, a string is not UTF-8, the hash is not 64 lowercase hex
/// characters, or bytes remain after the record.
pub fn decode(bytes: &[u8]) -> Result<JournalEntry> {
    if bytes.len() < MIN_ENCODED_LEN {
        return Err(JournalError::malformed(format!(
            "record is {} bytes, shorter than the {} byte minimum",
            bytes.len(),
            MIN_ENCODED_LEN
        )));
    }
    borsh::from_slice(bytes).map_err(malformed)
}

/// Codec with the limits from the `[codec]` configuration section.
#[derive(Debug, Clone, Default)]
pub struct EntryCodec {
    config: CodecConfig,
}

impl EntryCodec {
    /// Creates a codec with the given limits.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Same as [`encode`]; encoding never fails.
    pub fn encode(&self, entry: &JournalEntry) -> Vec<u8> {
        encode(entry)
    }

    /// Same as [`decode`], additionally rejecting owners above `max_owner_len` bytes.
    pub fn decode(&self, bytes: &[u8]) -> Result<JournalEntry> {
        let entry = decode(bytes)?;
        self.check_owner(&entry)?;
        Ok(entry)
    }

    /// Parses a stored account with [`JournalAccount::decode_stored`] and
    /// applies the same owner limit as [`EntryCodec::decode`].
    pub fn decode_account(&self, bytes: &[u8]) -> Result<JournalAccount> {
        let account = JournalAccount::decode_stored(bytes)?;
        self.check_owner(account.entry())?;
        Ok(account)
    }

    fn check_owner(&self, entry: &JournalEntry) -> Result<()> {
        if entry.owner().len() > self.config.max_owner_len as usize {
            return Err(JournalError::malformed(format!(
                "owner is {} bytes, limit is {}",
                entry.owner().len(),
                self.config.max_owner_len
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_entry;

    #[test]
    fn test_layout_is_bit_exact() {
        let bytes = encode(&sample_entry());
        assert_eq!(&bytes[0..4], &64u32.to_le_bytes());
        assert_eq!(&bytes[4..68], "ab".repeat(32).as_bytes());
        assert_eq!(bytes[68], 1);
        assert_eq!(&bytes[69..77], &1_700_000_000u64.to_le_bytes());
        assert_eq!(&bytes[77..81], &7u32.to_le_bytes());
        assert_eq!(&bytes[81..], b"WALLET1");
        assert_eq!(bytes.len(), sample_entry().encoded_len());
    }

    #[test]
    fn test_round_trip() {
        let entry = sample_entry();
        let decoded = decode(&encode(&entry)).unwrap();
        assert_eq!(decoded, entry);
        assert!(decoded.is_public());
        assert_eq!(decoded.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        assert_eq!(encode(&sample_entry()), encode(&sample_entry()));
    }

    #[test]
    fn test_decode_short_buffer() {
        let err = decode(&[0u8; MIN_ENCODED_LEN - 1]).unwrap_err();
        assert!(matches!(err, JournalError::MalformedRecord(_)));
    }

    #[test]
    fn test_decode_rejects_bad_flag() {
        let mut bytes = encode(&sample_entry());
        bytes[68] = 2;
        let err = decode(&bytes).unwrap_err();
        match err {
            JournalError::MalformedRecord(msg) => assert!(msg.contains("is_public")),
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_length_prefix_past_end() {
        let mut bytes = encode(&sample_entry());
        let len = bytes.len();
        bytes[77..81].copy_from_slice(&1000u32.to_le_bytes());
        assert_eq!(bytes.len(), len);
        assert!(matches!(decode(&bytes), Err(JournalError::MalformedRecord(_))));
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let mut bytes = encode(&sample_entry());
        bytes.push(0);
        assert!(matches!(decode(&bytes), Err(JournalError::MalformedRecord(_))));
    }

    #[test]
    fn test_codec_owner_limit() {
        let codec = EntryCodec::new(CodecConfig { max_owner_len: 4 });
        let bytes = encode(&sample_entry());
        assert!(matches!(codec.decode(&bytes), Err(JournalError::MalformedRecord(_))));
        assert!(EntryCodec::default().decode(&bytes).is_ok());

        let account = JournalAccount::from_entry(sample_entry()).encode();
        assert!(matches!(
            codec.decode_account(&account),
            Err(JournalError::MalformedRecord(_))
        ));
        assert!(EntryCodec::default().decode_account(&account).is_ok());
    }
}
