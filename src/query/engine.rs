// src/query/engine.rs
use crate::config::FeedConfig;
use crate::core::codec::EntryCodec;
use crate::core::instruction::JournalAccount;
use crate::error::Result;
use crate::query::types::{FeedItem, FeedQuery};

/// Builds a feed page from `(address, account bytes)` pairs.
///
/// Account data may carry zero padding after the record. Records that fail
/// to decode are skipped with a warning. Matching records are ordered
/// newest first; ties keep their input order.
pub fn assemble_feed<I, A, B>(records: I, query: &FeedQuery) -> Vec<FeedItem>
where
    I: IntoIterator<Item = (A, B)>,
    A: Into<String>,
    B: AsRef<[u8]>,
{
    collect_feed(records, query, JournalAccount::decode_stored)
}

fn collect_feed<I, A, B, F>(records: I, query: &FeedQuery, decode: F) -> Vec<FeedItem>
where
    I: IntoIterator<Item = (A, B)>,
    A: Into<String>,
    B: AsRef<[u8]>,
    F: Fn(&[u8]) -> Result<JournalAccount>,
{
    let mut items: Vec<FeedItem> = records
        .into_iter()
        .filter_map(|(address, bytes)| {
            let address = address.into();
            match decode(bytes.as_ref()) {
                Ok(account) => Some(FeedItem { address, account }),
                Err(e) => {
                    log::warn!("Skipping account {}: {}", address, e);
                    None
                }
            }
        })
        .filter(|item| query.matches(&item.account))
        .collect();

    items.sort_by(|a, b| {
        b.account
            .entry()
            .timestamp()
            .cmp(&a.account.entry().timestamp())
    });

    items
        .into_iter()
        .skip(query.skip)
        .take(query.limit)
        .collect()
}

/// Feed assembly with the limits from the `[feed]` configuration section.
///
/// Records are decoded through an [`EntryCodec`], so the `[codec]` limits
/// apply to the feed as well.
#[derive(Debug, Clone, Default)]
pub struct FeedEngine {
    config: FeedConfig,
    codec: EntryCodec,
}

impl FeedEngine {
    pub fn new(config: FeedConfig) -> Self {
        Self {
            config,
            codec: EntryCodec::default(),
        }
    }

    /// Decodes records with `codec` instead of the default limits.
    pub fn with_codec(mut self, codec: EntryCodec) -> Self {
        self.codec = codec;
        self
    }

    /// The default query: configured visibility and page size.
    pub fn default_query(&self) -> FeedQuery {
        FeedQuery {
            public_only: self.config.public_only,
            limit: self.config.default_limit,
            ..FeedQuery::default()
        }
    }

    /// Clamps the query's limit to `max_limit`, then assembles.
    pub fn assemble<I, A, B>(&self, records: I, query: &FeedQuery) -> Vec<FeedItem>
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: AsRef<[u8]>,
    {
        let mut query = query.clone();
        if query.limit > self.config.max_limit {
            log::debug!(
                "Clamping feed limit {} to {}",
                query.limit,
                self.config.max_limit
            );
            query.limit = self.config.max_limit;
        }
        collect_feed(records, &query, |bytes| self.codec.decode_account(bytes))
    }
}
