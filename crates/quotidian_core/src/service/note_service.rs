//! Per-date note lifecycle service.
//!
//! # Responsibility
//! - Apply the save policy: trim, delete-on-empty, re-sign with the current
//!   date.
//! - Keep the signature codec between the editor and stored text.
//!
//! # Invariants
//! - Stored text carries exactly one signature; the candidate is stripped
//!   before a fresh signature is appended, so repeated saves never
//!   compound suffixes.
//! - A whitespace-only save deletes the entry instead of storing a
//!   signature-only string.

use crate::repo::note_repo::NoteRepository;
use crate::repo::RepoResult;
use crate::signature::{append_signature, extract_signature, strip_signature};
use crate::store::KeyValueStore;
use chrono::NaiveDate;
use log::debug;

/// What a save request did to the stored entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteSaveOutcome {
    /// Trimmed content was signed and stored.
    Saved,
    /// Empty content removed an existing note.
    Deleted,
    /// Empty content and nothing stored; no write happened.
    Unchanged,
}

/// Note lifecycle facade over any key-value backend.
pub struct NoteService<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> NoteService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn repo(&self) -> NoteRepository<&S> {
        NoteRepository::new(&self.store)
    }

    /// Saves the editor's candidate text for a date.
    ///
    /// Any trailing signature in the candidate is discarded and a fresh one
    /// for `now` is appended, so edits of previously stored notes re-sign
    /// rather than stack. Empty trimmed content deletes the entry.
    pub fn save(
        &self,
        date: NaiveDate,
        candidate: &str,
        now: NaiveDate,
    ) -> RepoResult<NoteSaveOutcome> {
        let body = strip_signature(candidate.trim_end()).trim();
        if body.is_empty() {
            let removed = self.repo().remove(date)?;
            let outcome = if removed {
                NoteSaveOutcome::Deleted
            } else {
                NoteSaveOutcome::Unchanged
            };
            debug!("event=note_save module=service status=ok outcome={outcome:?}");
            return Ok(outcome);
        }

        let signed = append_signature(body, now);
        self.repo().upsert(date, &signed)?;
        debug!("event=note_save module=service status=ok outcome=Saved");
        Ok(NoteSaveOutcome::Saved)
    }

    /// Returns the note body with its signature stripped, for editing.
    pub fn load_for_edit(&self, date: NaiveDate) -> RepoResult<Option<String>> {
        Ok(self
            .repo()
            .get(date)?
            .map(|stored| strip_signature(&stored).to_string()))
    }

    /// Returns the stored text verbatim, signature included, for display.
    pub fn load_stored(&self, date: NaiveDate) -> RepoResult<Option<String>> {
        self.repo().get(date)
    }

    /// Returns the stored note's signature suffix, if the note exists and
    /// carries one.
    pub fn signature(&self, date: NaiveDate) -> RepoResult<Option<String>> {
        Ok(self
            .repo()
            .get(date)?
            .and_then(|stored| extract_signature(&stored).map(str::to_string)))
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteSaveOutcome, NoteService};
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn save_signs_trimmed_content() {
        let store = MemoryStore::new();
        let service = NoteService::new(&store);
        let date = day(2024, 3, 5);

        let outcome = service.save(date, "  went for a walk  ", date).unwrap();
        assert_eq!(outcome, NoteSaveOutcome::Saved);
        assert_eq!(
            service.load_stored(date).unwrap().as_deref(),
            Some("went for a walk\n\n — 2024. 3. 5.")
        );
        assert_eq!(
            service.load_for_edit(date).unwrap().as_deref(),
            Some("went for a walk")
        );
    }

    #[test]
    fn whitespace_only_save_deletes_existing_note() {
        let store = MemoryStore::new();
        let service = NoteService::new(&store);
        let date = day(2024, 3, 5);
        service.save(date, "something", date).unwrap();

        let outcome = service.save(date, "   ", date).unwrap();
        assert_eq!(outcome, NoteSaveOutcome::Deleted);
        assert_eq!(service.load_stored(date).unwrap(), None);

        let again = service.save(date, "", date).unwrap();
        assert_eq!(again, NoteSaveOutcome::Unchanged);
    }

    #[test]
    fn resave_replaces_signature_instead_of_stacking() {
        let store = MemoryStore::new();
        let service = NoteService::new(&store);
        let date = day(2024, 3, 5);

        service.save(date, "first thought", day(2024, 3, 5)).unwrap();
        let edited = service.load_for_edit(date).unwrap().unwrap();
        service
            .save(date, &format!("{edited} and more"), day(2024, 3, 6))
            .unwrap();

        let stored = service.load_stored(date).unwrap().unwrap();
        assert_eq!(stored, "first thought and more\n\n — 2024. 3. 6.");
        assert_eq!(stored.matches(" — ").count(), 1);
    }

    #[test]
    fn signature_is_exposed_for_display() {
        let store = MemoryStore::new();
        let service = NoteService::new(&store);
        let date = day(2025, 1, 2);
        service.save(date, "quiet morning", date).unwrap();

        assert_eq!(
            service.signature(date).unwrap().as_deref(),
            Some("\n\n — 2025. 1. 2.")
        );
        assert_eq!(service.signature(day(2025, 1, 3)).unwrap(), None);
    }
}
