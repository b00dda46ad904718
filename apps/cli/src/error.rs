//! Error handling for the command-line front end

use concept_cards_core::CorpusError;
use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("Card {index} out of range (deck has {total} cards)")]
    CardOutOfRange { index: usize, total: usize },
}

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, AppError>;
