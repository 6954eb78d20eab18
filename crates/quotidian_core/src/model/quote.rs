//! Quote and favorite records.
//!
//! # Responsibility
//! - Define the resolved-quote shape shared by dataset, cache, generation
//!   and favorites.
//! - Keep the favorites wire format stable for the persisted list.
//!
//! # Invariants
//! - Fixed and AI-sourced quotes carry empty `author`/`meaning`/`tags`
//!   (display-only fields retained for schema compatibility).
//! - Favorite identity is `quote.text`, not the date it was resolved for.

use serde::{Deserialize, Serialize};

/// One resolved quote, regardless of which source produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// The quote body shown to the reader.
    pub text: String,
    /// Attribution line; empty under the current content policy.
    #[serde(default)]
    pub author: String,
    /// Short interpretation paragraph; empty under the current policy.
    #[serde(default)]
    pub meaning: String,
    /// Topic tags in presentation order; empty under the current policy.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl QuoteRecord {
    /// Builds a text-only record with all display-only fields emptied.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: String::new(),
            meaning: String::new(),
            tags: Vec::new(),
        }
    }
}

/// One saved favorite, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub quote: QuoteRecord,
    /// Calendar date the quote was shown for, as `YYYY-MM-DD`.
    pub iso_date: String,
    /// Wall-clock save instant in unix epoch milliseconds.
    pub saved_at_ms: i64,
}

#[cfg(test)]
mod tests {
    use super::QuoteRecord;

    #[test]
    fn plain_empties_display_fields() {
        let record = QuoteRecord::plain("fall seven times, stand up eight");
        assert_eq!(record.text, "fall seven times, stand up eight");
        assert!(record.author.is_empty());
        assert!(record.meaning.is_empty());
        assert!(record.tags.is_empty());
    }

    #[test]
    fn record_tolerates_missing_optional_wire_fields() {
        let record: QuoteRecord = serde_json::from_str(r#"{"text":"onward"}"#).unwrap();
        assert_eq!(record.text, "onward");
        assert!(record.tags.is_empty());
    }
}
