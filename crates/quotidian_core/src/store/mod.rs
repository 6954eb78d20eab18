//! Opaque string key-value persistence boundary.
//!
//! # Responsibility
//! - Define the get/set contract every persisted record crosses.
//! - Isolate core logic from the concrete storage medium.
//!
//! # Invariants
//! - Every write is an independent, immediately-durable upsert; there are
//!   no transactions spanning keys.
//! - Values are opaque strings; encoding/decoding lives in the repo layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Backend failure raised by a key-value store implementation.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    /// A shared in-process store was poisoned by a panicking writer.
    LockPoisoned,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::LockPoisoned => write!(f, "store mutex poisoned"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::LockPoisoned => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// String key-value store with upsert semantics.
///
/// Mirrors browser local-storage: `get` returns the stored value or nothing,
/// `set` overwrites unconditionally. Deletion of higher-level records is
/// expressed by rewriting the containing value, never by key removal.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}
