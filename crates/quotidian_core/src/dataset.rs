//! Fixed curated-quote dataset.
//!
//! # Responsibility
//! - Load the embedded `M/D` → quote-text table once at process start.
//! - Answer lookups and uniform random key picks over the curated keys.
//!
//! # Invariants
//! - The dataset is read-only after load.
//! - A dataset entry always shadows any cached or generated quote for the
//!   same key.

use crate::model::date_key::{DateKey, DateKeyError};
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

const EMBEDDED_QUOTES: &str = include_str!("../data/daily_quotes.json");

static BUILTIN: Lazy<FixedDataset> =
    Lazy::new(|| FixedDataset::from_json(EMBEDDED_QUOTES).expect("embedded dataset is valid"));

/// Load failure for a dataset source.
#[derive(Debug)]
pub enum DatasetError {
    Parse(serde_json::Error),
    InvalidKey { key: String, cause: DateKeyError },
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "dataset is not a string map: {err}"),
            Self::InvalidKey { key, cause } => {
                write!(f, "dataset key `{key}` is not a date key: {cause}")
            }
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::InvalidKey { cause, .. } => Some(cause),
        }
    }
}

/// Immutable curated-quote table keyed by calendar day.
#[derive(Debug)]
pub struct FixedDataset {
    entries: HashMap<DateKey, String>,
    /// Sorted key list kept alongside the map for deterministic sampling.
    keys: Vec<DateKey>,
}

impl FixedDataset {
    /// Parses a JSON object of `"M/D"` keys to quote text.
    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let parsed: HashMap<String, String> =
            serde_json::from_str(raw).map_err(DatasetError::Parse)?;

        let mut entries = HashMap::with_capacity(parsed.len());
        for (key_text, text) in parsed {
            let key = key_text
                .parse::<DateKey>()
                .map_err(|cause| DatasetError::InvalidKey {
                    key: key_text.clone(),
                    cause,
                })?;
            entries.insert(key, text);
        }

        let mut keys: Vec<DateKey> = entries.keys().copied().collect();
        keys.sort();
        Ok(Self { entries, keys })
    }

    /// The dataset compiled into the binary.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Returns the curated text for a key, if that day is curated.
    pub fn get(&self, key: DateKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: DateKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Picks a curated key uniformly at random.
    ///
    /// Fails closed to `1/1` when the dataset is empty, so random browsing
    /// always lands on a resolvable key.
    pub fn pick_random_key(&self) -> DateKey {
        let mut rng = rand::thread_rng();
        self.keys
            .choose(&mut rng)
            .copied()
            .unwrap_or(DateKey::JAN_FIRST)
    }
}

#[cfg(test)]
mod tests {
    use super::{DatasetError, FixedDataset};
    use crate::model::date_key::DateKey;

    #[test]
    fn builtin_dataset_loads_and_has_january_first() {
        let dataset = FixedDataset::builtin();
        assert!(!dataset.is_empty());
        assert!(dataset.contains(DateKey::new(1, 1).unwrap()));
    }

    #[test]
    fn lookup_misses_for_uncurated_day() {
        let dataset = FixedDataset::from_json(r#"{"3/1": "step by step"}"#).unwrap();
        assert_eq!(dataset.get(DateKey::new(3, 1).unwrap()), Some("step by step"));
        assert_eq!(dataset.get(DateKey::new(3, 2).unwrap()), None);
    }

    #[test]
    fn invalid_key_is_rejected_at_load() {
        let err = FixedDataset::from_json(r#"{"13/1": "never"}"#).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidKey { .. }));
    }

    #[test]
    fn random_key_is_always_a_curated_key() {
        let dataset = FixedDataset::builtin();
        for _ in 0..64 {
            assert!(dataset.contains(dataset.pick_random_key()));
        }
    }

    #[test]
    fn empty_dataset_falls_back_to_january_first() {
        let dataset = FixedDataset::from_json("{}").unwrap();
        assert_eq!(dataset.pick_random_key(), DateKey::new(1, 1).unwrap());
    }
}
