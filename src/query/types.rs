// src/query/types.rs
use serde::{Deserialize, Serialize};

use crate::core::instruction::JournalAccount;

/// Default page size when a query does not name one.
pub const DEFAULT_FEED_LIMIT: usize = 20;

/// Parameters of a feed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedQuery {
    /// Drop private entries
    pub public_only: bool,
    /// Only entries by this owner
    pub owner: Option<String>,
    /// Number of matching entries to skip
    pub skip: usize,
    /// Maximum number of entries to return
    pub limit: usize,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            public_only: true,
            owner: None,
            skip: 0,
            limit: DEFAULT_FEED_LIMIT,
        }
    }
}

impl FeedQuery {
    /// Query for a 1-based page of `per_page` entries. Page 0 reads as page 1.
    pub fn page(page: usize, per_page: usize) -> Self {
        Self {
            skip: page.max(1).saturating_sub(1).saturating_mul(per_page),
            limit: per_page,
            ..Self::default()
        }
    }

    /// Restricts the query to one owner.
    pub fn for_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Includes private entries.
    pub fn include_private(mut self) -> Self {
        self.public_only = false;
        self
    }

    /// Whether an account passes the visibility and owner filters.
    pub fn matches(&self, account: &JournalAccount) -> bool {
        let entry = account.entry();
        if self.public_only && !entry.is_public() {
            return false;
        }
        match &self.owner {
            Some(owner) => entry.owner() == owner,
            None => true,
        }
    }
}

/// One feed row: a decoded account and the address it was stored at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Storage address of the account
    pub address: String,
    /// Decoded account
    pub account: JournalAccount,
}
