// src/core/hash.rs

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use unicode_normalization::UnicodeNormalization;

use crate::config::HashingConfig;
use crate::error::{JournalError, Result};
use crate::types::{HashBackendKind, Normalization};

/// Length in bytes of a SHA-256 digest.
pub const DIGEST_LEN: usize = 32;

/// Length of a digest rendered as hex.
pub const HEX_DIGEST_LEN: usize = DIGEST_LEN * 2;

/// Computes the SHA256 hash of the given data with the pure-Rust backend.
pub fn sha256_hash(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// A SHA-256 implementation available in the current execution environment.
pub trait DigestBackend: Send + Sync + fmt::Debug {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Digest `data` in one shot.
    fn sha256(&self, data: &[u8]) -> [u8; DIGEST_LEN];
}

/// Backend built on the `sha2` crate. Compiles for every target, wasm included.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha2Backend;

impl DigestBackend for Sha2Backend {
    fn name(&self) -> &'static str {
        "sha2"
    }

    fn sha256(&self, data: &[u8]) -> [u8; DIGEST_LEN] {
        sha256_hash(data)
    }
}

/// Backend built on `ring`.
#[cfg(feature = "crypto")]
#[derive(Debug, Default, Clone, Copy)]
pub struct RingBackend;

#[cfg(feature = "crypto")]
impl DigestBackend for RingBackend {
    fn name(&self) -> &'static str {
        "ring"
    }

    fn sha256(&self, data: &[u8]) -> [u8; DIGEST_LEN] {
        let digest = ring::digest::digest(&ring::digest::SHA256, data);
        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(digest.as_ref());
        out
    }
}

/// Resolves a backend kind to a concrete implementation.
///
/// `Auto` prefers `ring` when the `crypto` feature is compiled in and falls
/// back to `sha2` otherwise.
///
/// # Errors
///
/// Returns [`JournalError::UnsupportedEnvironment`] when the requested backend
/// is not part of this build.
pub fn select_backend(kind: HashBackendKind) -> Result<Arc<dyn DigestBackend>> {
    match kind {
        HashBackendKind::Sha2 => Ok(Arc::new(Sha2Backend)),
        #[cfg(feature = "crypto")]
        HashBackendKind::Ring | HashBackendKind::Auto => Ok(Arc::new(RingBackend)),
        #[cfg(not(feature = "crypto"))]
        HashBackendKind::Ring => Err(JournalError::unsupported(
            "ring digest backend requested but the `crypto` feature is not enabled",
        )),
        #[cfg(not(feature = "crypto"))]
        HashBackendKind::Auto => Ok(Arc::new(Sha2Backend)),
    }
}

/// A content-addressed identifier: 64 lowercase hex characters.
///
/// Only the hasher and validated parsing can produce one, so an entry can
/// never carry a hand-edited hash of the wrong shape.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentHash(String);

impl ContentHash {
    /// Renders a raw digest.
    pub fn from_digest(digest: &[u8; DIGEST_LEN]) -> Self {
        ContentHash(hex::encode(digest))
    }

    /// Parses a hex digest, accepting only lowercase hex of the exact length.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::InvalidInput`] if `s` is not 64 lowercase hex characters.
    pub fn parse(s: &str) -> Result<Self> {
        if s.len() != HEX_DIGEST_LEN {
            return Err(JournalError::invalid_input(format!(
                "content hash must be {} hex characters, got {}",
                HEX_DIGEST_LEN,
                s.len()
            )));
        }
        if !s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(JournalError::invalid_input(
                "content hash must contain only lowercase hex characters",
            ));
        }
        Ok(ContentHash(s.to_string()))
    }

    /// The hex form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes back to the raw digest bytes.
    pub fn to_bytes(&self) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        // The constructor guarantees valid hex of the right length.
        if hex::decode_to_slice(&self.0, &mut out).is_err() {
            unreachable!("ContentHash holds validated hex");
        }
        out
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", self.0)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ContentHash {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self> {
        ContentHash::parse(s)
    }
}

impl TryFrom<String> for ContentHash {
    type Error = JournalError;

    fn try_from(s: String) -> Result<Self> {
        ContentHash::parse(&s)
    }
}

impl From<ContentHash> for String {
    fn from(hash: ContentHash) -> Self {
        hash.0
    }
}

/// Maps text to its content hash.
///
/// The digest backend and normalization rule are fixed when the hasher is
/// built; every call through the same hasher applies the same byte rule.
#[derive(Debug, Clone)]
pub struct ContentHasher {
    backend: Arc<dyn DigestBackend>,
    normalization: Normalization,
}

impl ContentHasher {
    /// Builds a hasher, detecting the requested backend.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::UnsupportedEnvironment`] if the backend is unavailable.
    pub fn new(kind: HashBackendKind, normalization: Normalization) -> Result<Self> {
        let backend = select_backend(kind)?;
        log::debug!(
            "Content hasher using {} backend, normalization {}",
            backend.name(),
            normalization
        );
        Ok(Self { backend, normalization })
    }

    /// Builds a hasher from the `[hashing]` configuration section.
    pub fn from_config(config: &HashingConfig) -> Result<Self> {
        Self::new(config.backend, config.normalization)
    }

    /// Wraps an explicit backend.
    pub fn with_backend(backend: Arc<dyn DigestBackend>, normalization: Normalization) -> Self {
        Self { backend, normalization }
    }

    /// Name of the selected digest backend.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Normalization rule applied before hashing.
    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    fn canonical<'a>(&self, content: &'a str) -> Cow<'a, str> {
        match self.normalization {
            Normalization::None => Cow::Borrowed(content),
            Normalization::Nfc => Cow::Owned(content.nfc().collect()),
        }
    }

    /// Hashes `content` to a 64-character lowercase hex digest.
    ///
    /// Whitespace-only content counts as empty. Non-empty content is hashed
    /// exactly as given, surrounding whitespace included.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::EmptyInput`] when there is nothing to hash.
    pub fn hash(&self, content: &str) -> Result<ContentHash> {
        if content.trim().is_empty() {
            return Err(JournalError::EmptyInput);
        }
        let canonical = self.canonical(content);
        let digest = self.backend.sha256(canonical.as_bytes());
        Ok(ContentHash::from_digest(&digest))
    }

    /// Checks that `expected` is the hash of `content` under this hasher.
    pub fn verify(&self, content: &str, expected: &ContentHash) -> Result<bool> {
        Ok(self.hash(content)? == *expected)
    }

    /// Hashes on the blocking pool and yields exactly one result.
    ///
    /// Dropping the returned future abandons the wait.
    #[cfg(feature = "async")]
    pub async fn hash_async(&self, content: String) -> Result<ContentHash> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&content)).await?
    }

    /// Hashes a batch concurrently, returning results in input order.
    #[cfg(feature = "async")]
    pub async fn hash_many(&self, contents: Vec<String>) -> Vec<Result<ContentHash>> {
        let tasks = contents.into_iter().map(|content| self.hash_async(content));
        futures::future::join_all(tasks).await
    }
}

static DEFAULT_HASHER: OnceLock<ContentHasher> = OnceLock::new();

/// The process-wide hasher: `auto` backend, no normalization.
///
/// Backend detection runs once; later calls reuse the same instance.
pub fn default_hasher() -> Result<&'static ContentHasher> {
    if let Some(hasher) = DEFAULT_HASHER.get() {
        return Ok(hasher);
    }
    let hasher = ContentHasher::new(HashBackendKind::Auto, Normalization::None)?;
    Ok(DEFAULT_HASHER.get_or_init(|| hasher))
}
