//! Core domain logic for Quotidian, a one-quote-a-day reader.
//! This crate is the single source of truth for resolution ordering,
//! note-signature handling and the persisted record formats.

pub mod dataset;
pub mod generate;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod signature;
pub mod store;

pub use dataset::{DatasetError, FixedDataset};
pub use generate::{GenerationError, GenerationPayload, QuoteGenerator};
pub use logging::{default_log_level, init_logging};
pub use model::date_key::{advance, DateKey, DateKeyError, Direction};
pub use model::quote::{FavoriteEntry, QuoteRecord};
pub use repo::bookmark_repo::BookmarkRepository;
pub use repo::cache_repo::QuoteCacheRepository;
pub use repo::favorite_repo::FavoriteRepository;
pub use repo::note_repo::NoteRepository;
pub use repo::{RepoError, RepoResult};
pub use service::note_service::{NoteSaveOutcome, NoteService};
pub use service::quote_service::{
    fallback_quote, QuoteService, QuoteServiceError, Resolved, ResolutionSource,
};
pub use signature::{append_signature, extract_signature, strip_signature};
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
