//! Domain model for daily-quote resolution and note keeping.
//!
//! # Responsibility
//! - Define the canonical records shared by dataset, cache and favorites.
//! - Keep calendar-key semantics (`M/D`, year-independent) in one place.
//!
//! # Invariants
//! - `DateKey` is the only index type for the fixed dataset and quote cache.
//! - Quote records are immutable once resolved; there is no update path.

pub mod date_key;
pub mod quote;
