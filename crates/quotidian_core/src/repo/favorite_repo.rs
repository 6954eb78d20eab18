//! Favorites list persistence.
//!
//! # Responsibility
//! - Keep the saved-quote list under one store key, in insertion order.
//! - Enforce text-keyed uniqueness on insert.
//!
//! # Invariants
//! - Identity is `quote.text`; two favorites with identical text are the
//!   same entry even when saved for different dates.
//! - The list has no cap and is never reordered.

use crate::model::quote::{FavoriteEntry, QuoteRecord};
use crate::repo::{RepoError, RepoResult};
use crate::store::KeyValueStore;
use chrono::{NaiveDate, Utc};

const FAVORITES_KEY: &str = "favorites";

/// Favorites repository over any key-value backend.
pub struct FavoriteRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> FavoriteRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns all favorites in insertion order.
    pub fn list(&self) -> RepoResult<Vec<FavoriteEntry>> {
        let Some(raw) = self.store.get(FAVORITES_KEY)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw)
            .map_err(|err| RepoError::InvalidData(format!("favorites list failed to decode: {err}")))
    }

    /// Appends a favorite for the date it was shown on.
    ///
    /// Returns `false` without writing when an entry with identical quote
    /// text already exists.
    pub fn add(&self, quote: &QuoteRecord, shown_on: NaiveDate) -> RepoResult<bool> {
        let mut entries = self.list()?;
        if entries.iter().any(|entry| entry.quote.text == quote.text) {
            return Ok(false);
        }

        entries.push(FavoriteEntry {
            quote: quote.clone(),
            iso_date: shown_on.format("%Y-%m-%d").to_string(),
            saved_at_ms: Utc::now().timestamp_millis(),
        });
        self.persist(&entries)?;
        Ok(true)
    }

    /// Removes the favorite whose quote text matches exactly.
    ///
    /// Returns `false` when no such entry exists.
    pub fn remove(&self, quote_text: &str) -> RepoResult<bool> {
        let mut entries = self.list()?;
        let before = entries.len();
        entries.retain(|entry| entry.quote.text != quote_text);
        if entries.len() == before {
            return Ok(false);
        }
        self.persist(&entries)?;
        Ok(true)
    }

    pub fn contains(&self, quote_text: &str) -> RepoResult<bool> {
        Ok(self
            .list()?
            .iter()
            .any(|entry| entry.quote.text == quote_text))
    }

    fn persist(&self, entries: &[FavoriteEntry]) -> RepoResult<()> {
        let encoded = serde_json::to_string(entries)
            .map_err(|err| RepoError::InvalidData(format!("favorites failed to encode: {err}")))?;
        self.store.set(FAVORITES_KEY, &encoded)?;
        Ok(())
    }
}
