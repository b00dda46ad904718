//! Command-line subcommands and the output they produce.

use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};
use concept_cards_core::{escape_html, render_content, Card, Progress};

use crate::error::{AppError, Result};

#[derive(Debug, Parser)]
#[command(name = "concept-cards", version, about = "Study concept cards from a plain-text corpus")]
pub struct Cli {
    /// Corpus file with `Copiar`-delimited cards
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,

    /// JSON card array used when the corpus has no cards
    #[arg(long, global = true)]
    pub embedded: Option<PathBuf>,

    /// Progress file
    #[arg(long, global = true)]
    pub progress: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Highlight a code file, or stdin when no file is given
    Highlight { file: Option<PathBuf> },
    #[command(flatten)]
    Deck(DeckCommand),
}

/// Subcommands that work on the loaded deck.
#[derive(Debug, Subcommand)]
pub enum DeckCommand {
    /// List every card with its studied marker
    List,
    /// Show a card (defaults to the saved position)
    Show { index: Option<usize> },
    /// Mark the current card studied and show the next one
    Next,
    /// Forget all progress
    Reset,
    /// Write every card into a standalone HTML page
    Export { out: Option<PathBuf> },
}

pub const EMPTY_STATE: &str = "No cards found. Check the corpus path or the embedded payload.";

/// One line per card: index, studied marker, concept.
pub fn list_cards(cards: &[Card], progress: &Progress) -> String {
    let current = progress.clamped_index(cards.len());
    let mut out = String::new();
    for (index, card) in cards.iter().enumerate() {
        let marker = if progress.is_studied(index) { 'x' } else { ' ' };
        let pointer = if index == current { '>' } else { ' ' };
        out.push_str(&format!("{pointer} [{marker}] {index:>3}  {}\n", card.concept));
    }
    out.push_str(&status_line(cards.len(), progress));
    out
}

/// Concept heading followed by the rendered content fragment.
pub fn show_card(cards: &[Card], index: usize) -> Result<String> {
    let card = cards.get(index).ok_or(AppError::CardOutOfRange {
        index,
        total: cards.len(),
    })?;
    Ok(format!(
        "#{index} {}\n{}\n",
        card.concept,
        render_content(&card.content)
    ))
}

pub fn status_line(total: usize, progress: &Progress) -> String {
    match progress.updated_at {
        Some(at) => format!(
            "{} (last update {})\n",
            progress.summary(total),
            at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        ),
        None => format!("{}\n", progress.summary(total)),
    }
}

const PAGE_STYLE: &str = "\
body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
article{border:1px solid #ddd;border-radius:8px;padding:1rem;margin-bottom:1rem}\
code.hl-block{display:block;white-space:pre;background:#1e1e1e;color:#d4d4d4;padding:.75rem;border-radius:6px}\
.hl-kw{color:#c586c0}.hl-id{color:#9cdcfe}.hl-str{color:#ce9178}\
.hl-num{color:#b5cea8}.hl-com{color:#6a9955}.hl-op{color:#d4d4d4}";

/// Standalone HTML page with every card rendered.
pub fn export_page(cards: &[Card]) -> String {
    let mut body = String::new();
    for card in cards {
        body.push_str("<article><h2>");
        body.push_str(&escape_html(&card.concept));
        body.push_str("</h2>");
        body.push_str(&render_content(&card.content));
        body.push_str("</article>\n");
    }
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>Concept cards</title>\
         <style>{PAGE_STYLE}</style></head>\n<body>\n{body}</body></html>\n"
    )
}
