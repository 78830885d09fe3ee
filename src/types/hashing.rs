//! Configuration enums for content hashing

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// Which digest implementation a hasher should use.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq,
    Display, EnumString, VariantNames, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum HashBackendKind {
    /// Pick the best backend compiled into this build
    #[default]
    Auto,
    /// Pure-Rust `sha2` implementation, available everywhere
    Sha2,
    /// `ring` implementation, requires the `crypto` feature
    Ring,
}

/// Unicode normalization applied to text before it is encoded as UTF-8.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq,
    Display, EnumString, VariantNames, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// Hash the exact bytes the user typed
    #[default]
    None,
    /// Canonical composition (NFC)
    Nfc,
}
