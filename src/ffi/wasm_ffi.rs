// src/ffi/wasm_ffi.rs

//! WebAssembly bindings for browser callers.
//!
//! Build with `--no-default-features --features logging` for `wasm32`: the
//! tokio-backed `async` feature does not target the browser. Hashing here
//! always uses the `sha2` backend, which needs no host crypto API.

use wasm_bindgen::prelude::*;

use crate::core::codec;
use crate::core::entry::JournalEntry;
use crate::core::hash::ContentHash;

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Return the crate version as a convenience for JavaScript callers.
#[wasm_bindgen]
pub fn crate_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Hash text to a 64-character lowercase hex string.
#[wasm_bindgen]
pub fn hash_content(content: &str) -> Result<String, JsValue> {
    crate::api::sync_api::hash(content)
        .map(String::from)
        .map_err(to_js)
}

/// Promise-returning variant of [`hash_content`] for callers that await hashing.
#[wasm_bindgen]
pub async fn hash_content_async(content: String) -> Result<String, JsValue> {
    hash_content(&content)
}

/// Encode an entry to wire bytes. `timestamp` of `None` means now.
#[wasm_bindgen]
pub fn encode_entry(
    content_hash: &str,
    is_public: bool,
    timestamp: Option<u64>,
    owner: &str,
) -> Result<Vec<u8>, JsValue> {
    let content_hash = ContentHash::parse(content_hash).map_err(to_js)?;
    let entry = match timestamp {
        Some(ts) => JournalEntry::with_timestamp(content_hash, is_public, ts, owner),
        None => JournalEntry::new(content_hash, is_public, owner),
    };
    Ok(codec::encode(&entry))
}

/// Decode wire bytes to an entry, returned as a JSON string.
#[wasm_bindgen]
pub fn decode_entry(bytes: &[u8]) -> Result<String, JsValue> {
    let entry = codec::decode(bytes).map_err(to_js)?;
    serde_json::to_string(&entry).map_err(to_js)
}
