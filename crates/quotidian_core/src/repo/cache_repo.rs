//! Per-date cache of generated quotes.
//!
//! # Responsibility
//! - Persist one resolved `QuoteRecord` per `DateKey` under its own store
//!   key.
//!
//! # Invariants
//! - Entries are only written on successful generation and never expire;
//!   a forced refresh overwrites, nothing deletes.
//! - The fixed dataset is consulted before this cache, so a fixed date can
//!   never be shadowed by a stale entry.

use crate::model::date_key::DateKey;
use crate::model::quote::QuoteRecord;
use crate::repo::{RepoError, RepoResult};
use crate::store::KeyValueStore;

const CACHE_KEY_PREFIX: &str = "quote_cache:";

fn cache_key(key: DateKey) -> String {
    format!("{CACHE_KEY_PREFIX}{key}")
}

/// Cache repository over any key-value backend.
pub struct QuoteCacheRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> QuoteCacheRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the cached quote for a date key, if one was ever generated.
    pub fn get(&self, key: DateKey) -> RepoResult<Option<QuoteRecord>> {
        let Some(raw) = self.store.get(&cache_key(key))? else {
            return Ok(None);
        };
        let record = serde_json::from_str(&raw).map_err(|err| {
            RepoError::InvalidData(format!("cache entry for `{key}` is not a quote: {err}"))
        })?;
        Ok(Some(record))
    }

    /// Upserts the cached quote for a date key.
    pub fn put(&self, key: DateKey, record: &QuoteRecord) -> RepoResult<()> {
        let encoded = serde_json::to_string(record)
            .map_err(|err| RepoError::InvalidData(format!("cache entry failed to encode: {err}")))?;
        self.store.set(&cache_key(key), &encoded)?;
        Ok(())
    }
}
