use chrono::NaiveDate;
use quotidian_core::{MemoryStore, NoteSaveOutcome, NoteService, SqliteStore};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

#[test]
fn edit_cycle_never_compounds_signatures() {
    let store = MemoryStore::new();
    let service = NoteService::new(&store);
    let entry_date = date(2024, 5, 20);

    service
        .save(entry_date, "rainy day", date(2024, 5, 20))
        .unwrap();

    // A sloppy caller saves the stored text (signature included) verbatim.
    let stored = service.load_stored(entry_date).unwrap().unwrap();
    service.save(entry_date, &stored, date(2024, 5, 21)).unwrap();

    let restored = service.load_stored(entry_date).unwrap().unwrap();
    assert_eq!(restored, "rainy day\n\n — 2024. 5. 21.");
    assert_eq!(restored.matches("\n\n — ").count(), 1);
}

#[test]
fn sequential_saves_of_distinct_content_keep_one_signature() {
    let store = MemoryStore::new();
    let service = NoteService::new(&store);
    let entry_date = date(2024, 8, 1);

    service.save(entry_date, "draft one", entry_date).unwrap();
    service.save(entry_date, "draft two", entry_date).unwrap();

    let stored = service.load_stored(entry_date).unwrap().unwrap();
    assert_eq!(stored, "draft two\n\n — 2024. 8. 1.");
}

#[test]
fn whitespace_save_deletes_and_is_idempotent() {
    let store = MemoryStore::new();
    let service = NoteService::new(&store);
    let entry_date = date(2024, 8, 1);
    service.save(entry_date, "to be removed", entry_date).unwrap();

    assert_eq!(
        service.save(entry_date, "   ", entry_date).unwrap(),
        NoteSaveOutcome::Deleted
    );
    assert_eq!(
        service.save(entry_date, "", entry_date).unwrap(),
        NoteSaveOutcome::Unchanged
    );
    assert_eq!(service.load_stored(entry_date).unwrap(), None);
}

#[test]
fn signature_only_candidate_deletes_the_entry() {
    let store = MemoryStore::new();
    let service = NoteService::new(&store);
    let entry_date = date(2024, 9, 9);
    service.save(entry_date, "short lived", entry_date).unwrap();

    // Editing everything away but the signature counts as an empty note.
    let outcome = service
        .save(entry_date, "\n\n — 2024. 9. 9.", entry_date)
        .unwrap();
    assert_eq!(outcome, NoteSaveOutcome::Deleted);
}

#[test]
fn notes_for_different_dates_are_independent() {
    let store = SqliteStore::open_in_memory().unwrap();
    let service = NoteService::new(&store);

    service
        .save(date(2024, 1, 1), "new year", date(2024, 1, 1))
        .unwrap();
    service
        .save(date(2024, 1, 2), "second day", date(2024, 1, 2))
        .unwrap();
    service.save(date(2024, 1, 1), " ", date(2024, 1, 3)).unwrap();

    assert_eq!(service.load_stored(date(2024, 1, 1)).unwrap(), None);
    assert_eq!(
        service.load_for_edit(date(2024, 1, 2)).unwrap().as_deref(),
        Some("second day")
    );
}
