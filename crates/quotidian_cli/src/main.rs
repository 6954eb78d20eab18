//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quotidian_core` linkage.
//! - Keep output deterministic apart from the current calendar day.

use chrono::Local;
use quotidian_core::{DateKey, FixedDataset};

fn main() {
    let dataset = FixedDataset::builtin();
    let today = DateKey::from_date(Local::now().date_naive());

    println!("quotidian_core version={}", quotidian_core::core_version());
    println!("curated days={}", dataset.len());
    match dataset.get(today) {
        Some(text) => println!("today {today}: {text}"),
        None => println!("today {today}: not curated (resolver would generate)"),
    }
}
