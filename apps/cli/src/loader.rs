//! Card acquisition: corpus file first, then the embedded JSON payload.

use std::fmt;
use std::path::{Path, PathBuf};

use concept_cards_core::{parse_cards, parse_embedded, Card};

use crate::config::Config;
use crate::error::Result;

/// Where the loaded cards came from.
#[derive(Debug, Clone, PartialEq)]
pub enum CardSource {
    Corpus(PathBuf),
    Embedded(PathBuf),
    Empty,
}

impl fmt::Display for CardSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corpus(path) => write!(f, "corpus {}", path.display()),
            Self::Embedded(path) => write!(f, "embedded cards {}", path.display()),
            Self::Empty => f.write_str("no source"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Deck {
    pub cards: Vec<Card>,
    pub source: CardSource,
}

impl Deck {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
}

/// Load cards, falling back to the embedded payload and finally to an
/// empty deck. Never fails; every fallback is logged.
pub async fn load_cards(config: &Config) -> Deck {
    match load_corpus(&config.corpus_path).await {
        Ok(cards) if !cards.is_empty() => {
            tracing::info!(path = %config.corpus_path.display(), cards = cards.len(), "loaded corpus");
            return Deck {
                cards,
                source: CardSource::Corpus(config.corpus_path.clone()),
            };
        }
        Ok(_) => {
            tracing::warn!(path = %config.corpus_path.display(), "corpus has no cards");
        }
        Err(e) => {
            tracing::warn!(path = %config.corpus_path.display(), error = %e, "failed to read corpus");
        }
    }

    if let Some(path) = &config.embedded_path {
        match load_embedded(path).await {
            Ok(cards) => {
                tracing::info!(path = %path.display(), cards = cards.len(), "loaded embedded cards");
                return Deck {
                    cards,
                    source: CardSource::Embedded(path.clone()),
                };
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "embedded cards unavailable");
            }
        }
    }

    Deck {
        cards: Vec::new(),
        source: CardSource::Empty,
    }
}

async fn load_corpus(path: &Path) -> Result<Vec<Card>> {
    let raw = tokio::fs::read_to_string(path).await?;
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);
    Ok(parse_cards(raw))
}

async fn load_embedded(path: &Path) -> Result<Vec<Card>> {
    let json = tokio::fs::read_to_string(path).await?;
    Ok(parse_embedded(&json)?)
}
