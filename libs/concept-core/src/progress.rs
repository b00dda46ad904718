//! Study progress through a deck of cards.
//!
//! Indices refer to positions in the parsed card list. The struct is plain
//! data; persisting it is up to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Last viewed card and the cards studied so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub last_index: usize,
    pub studied: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Progress {
    /// Saved index clamped to a deck of `total` cards.
    pub fn clamped_index(&self, total: usize) -> usize {
        self.last_index.min(total.saturating_sub(1))
    }

    pub fn is_studied(&self, index: usize) -> bool {
        self.studied.contains(&index)
    }

    /// Record a card as studied. Out-of-range and repeated indices are ignored.
    pub fn mark_studied(&mut self, index: usize, total: usize) -> bool {
        if index >= total || self.is_studied(index) {
            return false;
        }
        self.studied.push(index);
        self.touch();
        true
    }

    /// Mark the current card studied and move to the next one, stopping at
    /// the last card. Returns the new current index.
    pub fn advance(&mut self, total: usize) -> usize {
        let current = self.clamped_index(total);
        self.mark_studied(current, total);
        self.last_index = (current + 1).min(total.saturating_sub(1));
        self.touch();
        self.last_index
    }

    /// Forget everything studied and go back to the first card.
    pub fn reset(&mut self) {
        self.studied.clear();
        self.last_index = 0;
        self.touch();
    }

    /// Studied cards that still exist in a deck of `total` cards.
    pub fn studied_count(&self, total: usize) -> usize {
        self.studied.iter().filter(|&&i| i < total).count()
    }

    pub fn summary(&self, total: usize) -> String {
        format!("{} / {} cards studied", self.studied_count(total), total)
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}
