#![cfg(feature = "async")]

use dejournal::api::async_api;
use dejournal::{hash, HashBackendKind, ContentHasher, JournalError, Normalization};
use assert_matches::assert_matches;

#[tokio::test]
async fn test_async_hash_matches_sync() {
    let text = "The concert was lit! Can't wait for the next one.";
    assert_eq!(async_api::hash(text).await.unwrap(), hash(text).unwrap());
}

#[tokio::test]
async fn test_async_hash_empty_fails() {
    assert_matches!(async_api::hash("").await, Err(JournalError::EmptyInput));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_hash_many_keeps_order() {
    let inputs: Vec<String> = vec!["a".into(), "".into(), "c".into()];
    let results = async_api::hash_many(inputs).await.unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap(), &hash("a").unwrap());
    assert_matches!(results[1], Err(JournalError::EmptyInput));
    assert_eq!(results[2].as_ref().unwrap(), &hash("c").unwrap());
}

#[tokio::test]
async fn test_hasher_async_with_nfc() {
    let hasher = ContentHasher::new(HashBackendKind::Sha2, Normalization::Nfc).unwrap();
    let a = hasher.hash_async("cafe\u{301}".to_string()).await.unwrap();
    let b = hasher.hash_async("caf\u{e9}".to_string()).await.unwrap();
    assert_eq!(a, b);
}
