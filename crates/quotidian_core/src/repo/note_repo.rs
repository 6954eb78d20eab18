//! Per-date note persistence.
//!
//! # Responsibility
//! - Keep the `YYYY-MM-DD` → note-text map under one store key.
//!
//! # Invariants
//! - The map is rewritten wholesale on every change; there is no partial
//!   update of individual entries at the store level.
//! - Stored text is opaque here; signature handling lives in the service
//!   layer.

use crate::repo::{RepoError, RepoResult};
use crate::store::KeyValueStore;
use chrono::NaiveDate;
use std::collections::BTreeMap;

const NOTES_KEY: &str = "notes";

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Notes repository over any key-value backend.
pub struct NoteRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> NoteRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the full notes map keyed by ISO date.
    pub fn load_map(&self) -> RepoResult<BTreeMap<String, String>> {
        let Some(raw) = self.store.get(NOTES_KEY)? else {
            return Ok(BTreeMap::new());
        };
        serde_json::from_str(&raw)
            .map_err(|err| RepoError::InvalidData(format!("notes map failed to decode: {err}")))
    }

    /// Returns the stored note text for one date, if any.
    pub fn get(&self, date: NaiveDate) -> RepoResult<Option<String>> {
        Ok(self.load_map()?.remove(&iso(date)))
    }

    /// Inserts or replaces the note for one date.
    pub fn upsert(&self, date: NaiveDate, text: &str) -> RepoResult<()> {
        let mut map = self.load_map()?;
        map.insert(iso(date), text.to_string());
        self.persist(&map)
    }

    /// Deletes the note for one date. Returns `false` when none existed.
    pub fn remove(&self, date: NaiveDate) -> RepoResult<bool> {
        let mut map = self.load_map()?;
        if map.remove(&iso(date)).is_none() {
            return Ok(false);
        }
        self.persist(&map)?;
        Ok(true)
    }

    fn persist(&self, map: &BTreeMap<String, String>) -> RepoResult<()> {
        let encoded = serde_json::to_string(map)
            .map_err(|err| RepoError::InvalidData(format!("notes map failed to encode: {err}")))?;
        self.store.set(NOTES_KEY, &encoded)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NoteRepository;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).expect("valid test date")
    }

    #[test]
    fn upsert_and_get_round_trip() {
        let store = MemoryStore::new();
        let repo = NoteRepository::new(&store);

        repo.upsert(day(6, 1), "first draft").unwrap();
        repo.upsert(day(6, 1), "second draft").unwrap();
        assert_eq!(repo.get(day(6, 1)).unwrap().as_deref(), Some("second draft"));
        assert_eq!(repo.get(day(6, 2)).unwrap(), None);
    }

    #[test]
    fn remove_reports_whether_a_note_existed() {
        let store = MemoryStore::new();
        let repo = NoteRepository::new(&store);
        repo.upsert(day(6, 1), "gone soon").unwrap();

        assert!(repo.remove(day(6, 1)).unwrap());
        assert!(!repo.remove(day(6, 1)).unwrap());
        assert!(repo.load_map().unwrap().is_empty());
    }
}
