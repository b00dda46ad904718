//! Error types for concept-cards-core.
//!
//! Parsing, segmentation and highlighting never fail. The only fallible
//! operation is decoding the embedded fallback payload.

use thiserror::Error;

/// Result type alias using CorpusError.
pub type Result<T> = std::result::Result<T, CorpusError>;

/// Errors that can occur while decoding an embedded card payload.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("invalid embedded cards: {0}")]
    InvalidEmbedded(#[from] serde_json::Error),

    #[error("embedded payload contains no cards")]
    EmptyEmbedded,
}
