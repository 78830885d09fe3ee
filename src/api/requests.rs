// src/api/requests.rs

//! JSON request and response bodies of the submission endpoint.

use serde::{Deserialize, Serialize};

use crate::core::entry::JournalEntry;
use crate::query::FeedItem;

/// Body of `POST /submit_journal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitEntryRequest {
    /// Hex content hash
    pub content_hash: String,
    /// Visibility flag
    pub is_public: bool,
}

impl From<&JournalEntry> for SubmitEntryRequest {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            content_hash: entry.content_hash().to_string(),
            is_public: entry.is_public(),
        }
    }
}

/// Body of `POST /vote_journal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRequest {
    /// Storage address of the entry
    pub entry_id: String,
    /// `true` for an upvote
    pub is_upvote: bool,
}

/// Response to a submission or a vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// `"success"` when the transaction was sent
    pub status: String,
    /// Ledger transaction signature
    pub transaction_id: String,
    /// Human-readable outcome
    pub message: String,
}

impl SubmitResponse {
    /// Whether the endpoint reported success.
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// One row of `GET /journal_entries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryResponse {
    /// Hex content hash of the entry text
    pub content_hash: String,
    /// Whether the entry is in the public feed
    pub is_public: bool,
    /// Seconds since the epoch
    pub timestamp: u64,
    /// Author wallet address
    pub owner: String,
    /// Upvote tally
    pub upvotes: u64,
    /// Downvote tally
    pub downvotes: u64,
    /// Ledger address of the stored account
    pub address: String,
}

impl From<&FeedItem> for EntryResponse {
    fn from(item: &FeedItem) -> Self {
        let entry = item.account.entry();
        Self {
            content_hash: entry.content_hash().to_string(),
            is_public: entry.is_public(),
            timestamp: entry.timestamp(),
            owner: entry.owner().to_string(),
            upvotes: item.account.upvotes(),
            downvotes: item.account.downvotes(),
            address: item.address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submit_response_status() {
        let resp: SubmitResponse = serde_json::from_value(json!({
            "status": "success",
            "transaction_id": "5xyz",
            "message": "Journal entry submitted successfully"
        }))
        .unwrap();
        assert!(resp.is_success());
    }

    #[test]
    fn test_vote_request_shape() {
        let body = serde_json::to_value(VoteRequest {
            entry_id: "Addr1".into(),
            is_upvote: false,
        })
        .unwrap();
        assert_eq!(body, json!({"entry_id": "Addr1", "is_upvote": false}));
    }
}
