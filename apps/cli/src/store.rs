//! JSON persistence for study progress.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use concept_cards_core::Progress;

use crate::error::Result;

/// Progress file on disk.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read saved progress. A missing or malformed file yields fresh progress.
    pub async fn load(&self) -> Progress {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Progress::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read progress");
                return Progress::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(progress) => progress,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring malformed progress");
                Progress::default()
            }
        }
    }

    pub async fn save(&self, progress: &Progress) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_string_pretty(progress)?;
        tokio::fs::write(&self.path, json).await?;
        tracing::debug!(path = %self.path.display(), "saved progress");
        Ok(())
    }
}
