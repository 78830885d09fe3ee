// src/api/mod.rs

/// Synchronous entry points: hashing, encoding, decoding and the `Journal` facade.
pub mod sync_api;

/// Asynchronous hashing entry points.
#[cfg(feature = "async")]
pub mod async_api;

/// JSON bodies exchanged with the submission endpoint.
pub mod requests;

pub use sync_api::{decode, encode, hash, Journal};
