//! Note date-signature codec.
//!
//! # Responsibility
//! - Strip, append and extract the trailing `"\n\n — YYYY. M. D."` suffix
//!   stored with every saved note.
//!
//! # Invariants
//! - Pure and synchronous; no persistence access.
//! - Stored text carries at most one signature; repeated strip/append
//!   cycles never compound suffixes.
//! - Month and day are written unpadded, matching the key wire form.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static SIGNATURE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\n — \d{4}\. \d{1,2}\. \d{1,2}\.$").expect("valid signature regex"));

/// Removes one trailing signature if present; otherwise returns the input
/// unchanged. Used when loading a note into an editable form.
pub fn strip_signature(text: &str) -> &str {
    match SIGNATURE_RE.find(text) {
        Some(found) => &text[..found.start()],
        None => text,
    }
}

/// Appends a fresh signature for `now` to already-trimmed user text.
///
/// Callers must strip any prior signature first; this function does not
/// guard against compounding.
pub fn append_signature(text: &str, now: NaiveDate) -> String {
    format!(
        "{text}\n\n — {}. {}. {}.",
        now.year(),
        now.month(),
        now.day()
    )
}

/// Returns the trailing signature verbatim, for display alongside the body.
pub fn extract_signature(text: &str) -> Option<&str> {
    SIGNATURE_RE.find(text).map(|found| found.as_str())
}
