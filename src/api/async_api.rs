// src/api/async_api.rs

use crate::core::hash::{default_hasher, ContentHash};
use crate::error::Result;

/// Hashes `content` with the process-wide default hasher without blocking
/// the calling task.
///
/// Resolves to exactly one hash or one error. Dropping the future cancels
/// the wait; no retry happens here.
pub async fn hash(content: impl Into<String>) -> Result<ContentHash> {
    default_hasher()?.hash_async(content.into()).await
}

/// Hashes a batch concurrently. Results keep the input order.
pub async fn hash_many(contents: Vec<String>) -> Result<Vec<Result<ContentHash>>> {
    Ok(default_hasher()?.hash_many(contents).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JournalError;

    #[tokio::test]
    async fn test_async_hash_matches_sync() {
        let text = "Had an amazing time at the beach with friends!";
        let from_async = hash(text).await.unwrap();
        let from_sync = crate::api::sync_api::hash(text).unwrap();
        assert_eq!(from_async, from_sync);
    }

    #[tokio::test]
    async fn test_async_hash_empty() {
        assert!(matches!(hash("").await, Err(JournalError::EmptyInput)));
    }
}
