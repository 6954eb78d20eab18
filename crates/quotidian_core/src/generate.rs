//! Generated-quote collaborator seam.
//!
//! # Responsibility
//! - Define the async contract an external content generator must satisfy.
//! - Define the failure taxonomy the resolver recovers from.
//!
//! # Invariants
//! - Generation failure is always recoverable; the resolver substitutes a
//!   hardcoded fallback and never surfaces `GenerationError` to callers.
//! - The concrete client (AI backend, HTTP transport) lives outside core.

use crate::model::quote::QuoteRecord;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure raised by a generation collaborator.
#[derive(Debug)]
pub enum GenerationError {
    /// Network or backend transport failure.
    Transport(String),
    /// Response arrived but did not match the expected schema.
    MalformedPayload(String),
    /// Response parsed but carried no usable quote text.
    EmptyPayload,
}

impl Display for GenerationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "generation transport failed: {message}"),
            Self::MalformedPayload(message) => {
                write!(f, "generation payload malformed: {message}")
            }
            Self::EmptyPayload => write!(f, "generation payload carried no quote text"),
        }
    }
}

impl Error for GenerationError {}

/// Wire schema expected from a generation backend.
///
/// Provided so implementors of [`QuoteGenerator`] share one decode shape;
/// core itself never performs the transport.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationPayload {
    pub quote: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl GenerationPayload {
    /// Converts the payload into a record, rejecting blank quote text.
    ///
    /// Display-only fields are forced empty under the current content
    /// policy, matching fixed-dataset quotes.
    pub fn into_record(self) -> Result<QuoteRecord, GenerationError> {
        if self.quote.trim().is_empty() {
            return Err(GenerationError::EmptyPayload);
        }
        Ok(QuoteRecord::plain(self.quote))
    }
}

/// Async collaborator producing one quote for a calendar date.
#[async_trait]
pub trait QuoteGenerator {
    async fn generate(&self, date: NaiveDate) -> Result<QuoteRecord, GenerationError>;
}
