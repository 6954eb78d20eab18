//! Record repositories over the key-value store boundary.
//!
//! # Responsibility
//! - Serialize each persisted record family to its store key(s).
//! - Surface corrupt persisted state as semantic errors instead of masking
//!   it.
//!
//! # Invariants
//! - Repositories never repair or migrate malformed values; a value that
//!   fails to decode is reported as `RepoError::InvalidData`.
//! - Each record family owns a distinct key namespace.

use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod bookmark_repo;
pub mod cache_repo;
pub mod favorite_repo;
pub mod note_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence failure for any record repository.
#[derive(Debug)]
pub enum RepoError {
    /// Backend transport failure.
    Store(StoreError),
    /// A stored value failed to decode.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
