//! Use-case services orchestrating dataset, cache, generation and notes.
//!
//! # Responsibility
//! - Keep resolution ordering and note save policy out of the repo layer.
//! - Remain storage-agnostic behind the `KeyValueStore` seam.

pub mod note_service;
pub mod quote_service;
