//! Last-read bookmark for book-style browsing.
//!
//! # Responsibility
//! - Persist the single `DateKey` the reader last visited sequentially.
//!
//! # Invariants
//! - At most one bookmark exists; writes replace it.

use crate::model::date_key::DateKey;
use crate::repo::{RepoError, RepoResult};
use crate::store::KeyValueStore;

const BOOKMARK_KEY: &str = "last_read";

/// Bookmark repository over any key-value backend.
pub struct BookmarkRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> BookmarkRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the last-read date key, if one was ever saved.
    pub fn get(&self) -> RepoResult<Option<DateKey>> {
        let Some(raw) = self.store.get(BOOKMARK_KEY)? else {
            return Ok(None);
        };
        let key = raw
            .parse()
            .map_err(|err| RepoError::InvalidData(format!("bookmark failed to decode: {err}")))?;
        Ok(Some(key))
    }

    /// Replaces the last-read date key.
    pub fn set(&self, key: DateKey) -> RepoResult<()> {
        self.store.set(BOOKMARK_KEY, &key.to_string())?;
        Ok(())
    }
}
