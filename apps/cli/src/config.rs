//! Environment-driven configuration.
//!
//! Values come from the process environment (after `.env` is loaded) and can
//! be overridden by command-line flags.

use std::path::PathBuf;

pub const CORPUS_VAR: &str = "CONCEPT_CARDS_CORPUS";
pub const EMBEDDED_VAR: &str = "CONCEPT_CARDS_EMBEDDED";
pub const PROGRESS_VAR: &str = "CONCEPT_CARDS_PROGRESS";
pub const LOG_VAR: &str = "RUST_LOG";

const DEFAULT_CORPUS: &str = "conteudo.txt";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Plain-text corpus with `Copiar`-delimited cards.
    pub corpus_path: PathBuf,
    /// JSON card array used when the corpus yields nothing.
    pub embedded_path: Option<PathBuf>,
    pub progress_path: PathBuf,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            corpus_path: get(CORPUS_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CORPUS)),
            embedded_path: get(EMBEDDED_VAR).map(PathBuf::from),
            progress_path: get(PROGRESS_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(default_progress_path),
            log_filter: get(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        corpus: Option<PathBuf>,
        embedded: Option<PathBuf>,
        progress: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = corpus {
            self.corpus_path = path;
        }
        if embedded.is_some() {
            self.embedded_path = embedded;
        }
        if let Some(path) = progress {
            self.progress_path = path;
        }
        self
    }
}

fn default_progress_path() -> PathBuf {
    // Use the local data directory, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("concept-cards")
        .join("progress.json")
}
