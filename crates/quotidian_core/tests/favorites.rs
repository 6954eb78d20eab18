use chrono::NaiveDate;
use quotidian_core::{FavoriteRepository, MemoryStore, QuoteRecord};

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, m, d).expect("valid test date")
}

#[test]
fn favorites_keep_insertion_order_without_cap() {
    let store = MemoryStore::new();
    let repo = FavoriteRepository::new(&store);

    for idx in 0..120 {
        assert!(repo
            .add(&QuoteRecord::plain(format!("quote number {idx}")), date(1, 1))
            .unwrap());
    }

    let listed = repo.list().unwrap();
    assert_eq!(listed.len(), 120);
    assert_eq!(listed[0].quote.text, "quote number 0");
    assert_eq!(listed[119].quote.text, "quote number 119");
}

#[test]
fn identical_text_from_two_dates_collides_as_one_favorite() {
    let store = MemoryStore::new();
    let repo = FavoriteRepository::new(&store);
    let quote = QuoteRecord::plain("the same sentence twice");

    assert!(repo.add(&quote, date(3, 14)).unwrap());
    assert!(!repo.add(&quote, date(10, 2)).unwrap());

    let listed = repo.list().unwrap();
    assert_eq!(listed.len(), 1);
    // The first save wins; the later date never lands.
    assert_eq!(listed[0].iso_date, "2024-03-14");
}

#[test]
fn remove_then_readd_moves_the_entry_to_the_end() {
    let store = MemoryStore::new();
    let repo = FavoriteRepository::new(&store);
    repo.add(&QuoteRecord::plain("alpha"), date(1, 1)).unwrap();
    repo.add(&QuoteRecord::plain("beta"), date(1, 2)).unwrap();

    assert!(repo.remove("alpha").unwrap());
    assert!(repo.add(&QuoteRecord::plain("alpha"), date(1, 3)).unwrap());

    let listed = repo.list().unwrap();
    assert_eq!(listed[0].quote.text, "beta");
    assert_eq!(listed[1].quote.text, "alpha");
    assert_eq!(listed[1].iso_date, "2024-01-03");
}
