//! Date-to-quote resolution service.
//!
//! # Responsibility
//! - Apply the fixed-priority fallback chain: fixed dataset → cache →
//!   generation → hardcoded fallback.
//! - Own cache population and last-read bookkeeping for book browsing.
//!
//! # Invariants
//! - A fixed-dataset entry is returned unconditionally; neither cache state
//!   nor `force_refresh` can shadow it.
//! - Generation failure never reaches the caller as an error; the fallback
//!   quote is substituted and the cache is left empty so a later resolve
//!   retries.
//! - Concurrent resolutions for one key are not serialized; last cache
//!   write wins and both results are equivalent quotes for that date.

use crate::dataset::FixedDataset;
use crate::generate::{GenerationError, QuoteGenerator};
use crate::model::date_key::{advance, DateKey, Direction};
use crate::model::quote::QuoteRecord;
use crate::repo::bookmark_repo::BookmarkRepository;
use crate::repo::cache_repo::QuoteCacheRepository;
use crate::repo::{RepoError, RepoResult};
use crate::store::KeyValueStore;
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

const FALLBACK_QUOTE_TEXT: &str =
    "Every day may not be good, but there is something good in every day.";

/// The quote substituted when generation fails.
pub fn fallback_quote() -> QuoteRecord {
    QuoteRecord::plain(FALLBACK_QUOTE_TEXT)
}

/// Which attempt in the fallback chain produced the quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Curated dataset entry for the calendar day.
    Fixed,
    /// Previously generated quote replayed from the cache.
    Cached,
    /// Freshly generated quote, now cached.
    Generated,
    /// Generation failed; the hardcoded fallback was substituted.
    FallbackUsed,
}

/// Resolution result with its source tag, so callers and tests can assert
/// which branch fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub quote: QuoteRecord,
    pub source: ResolutionSource,
}

/// Quote resolution and book-browsing facade.
///
/// Holds the curated dataset, a key-value backend and the generation
/// collaborator. Repositories are constructed per call over a shared
/// reference to the backend.
pub struct QuoteService<'d, S, G> {
    dataset: &'d FixedDataset,
    store: S,
    generator: G,
}

impl<'d, S, G> QuoteService<'d, S, G>
where
    S: KeyValueStore,
    G: QuoteGenerator,
{
    pub fn new(dataset: &'d FixedDataset, store: S, generator: G) -> Self {
        Self {
            dataset,
            store,
            generator,
        }
    }

    /// Resolves a calendar date to quote content.
    ///
    /// The attempt order is fixed: dataset, then cache (unless
    /// `force_refresh`), then generation, then the hardcoded fallback.
    /// Only persisted-state failures surface as errors.
    pub async fn resolve(
        &self,
        date: NaiveDate,
        force_refresh: bool,
    ) -> Result<Resolved, QuoteServiceError> {
        let key = DateKey::from_date(date);

        if let Some(text) = self.dataset.get(key) {
            debug!("event=quote_resolve module=service status=ok key={key} source=fixed");
            return Ok(Resolved {
                quote: QuoteRecord::plain(text),
                source: ResolutionSource::Fixed,
            });
        }

        let cache = QuoteCacheRepository::new(&self.store);
        if !force_refresh {
            if let Some(record) = cache.get(key)? {
                debug!("event=quote_resolve module=service status=ok key={key} source=cached");
                return Ok(Resolved {
                    quote: record,
                    source: ResolutionSource::Cached,
                });
            }
        }

        let outcome = match self.generator.generate(date).await {
            Ok(record) if record.text.trim().is_empty() => Err(GenerationError::EmptyPayload),
            other => other,
        };

        match outcome {
            Ok(record) => {
                cache.put(key, &record)?;
                info!("event=quote_resolve module=service status=ok key={key} source=generated");
                Ok(Resolved {
                    quote: record,
                    source: ResolutionSource::Generated,
                })
            }
            Err(err) => {
                // Cache stays empty so a future resolve retries generation.
                warn!(
                    "event=quote_generate module=service status=error key={key} error={err}"
                );
                Ok(Resolved {
                    quote: fallback_quote(),
                    source: ResolutionSource::FallbackUsed,
                })
            }
        }
    }

    /// Picks a curated date key uniformly at random.
    pub fn random_key(&self) -> DateKey {
        self.dataset.pick_random_key()
    }

    /// Steps one calendar day and persists the landing key as the bookmark.
    ///
    /// The bookmark is written before the caller re-resolves, so an
    /// interrupted session reopens on the page being turned to.
    pub fn turn_page(
        &self,
        date: NaiveDate,
        direction: Direction,
    ) -> Result<NaiveDate, QuoteServiceError> {
        let landed = advance(date, direction);
        BookmarkRepository::new(&self.store).set(DateKey::from_date(landed))?;
        debug!(
            "event=page_turn module=service status=ok key={}",
            DateKey::from_date(landed)
        );
        Ok(landed)
    }

    /// Returns the last-read bookmark, if any page turn was ever persisted.
    pub fn bookmark(&self) -> RepoResult<Option<DateKey>> {
        BookmarkRepository::new(&self.store).get()
    }
}

/// Service error for quote resolution use-cases.
#[derive(Debug)]
pub enum QuoteServiceError {
    /// Persisted state could not be read or written.
    Repo(RepoError),
}

impl Display for QuoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for QuoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for QuoteServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
