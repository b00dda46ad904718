//! Core library for concept cards, shared by every front end.
//!
//! Provides:
//! - Corpus parser splitting `Copiar`-delimited text into cards
//! - Segmentation of card content into paragraphs and code blocks
//! - Character-level tokenizer and HTML highlighter for code
//! - Study progress bookkeeping
//!
//! Nothing here performs I/O and nothing except [`parse_embedded`] can fail.

pub mod error;
pub mod highlight;
pub mod parser;
pub mod progress;
pub mod render;
pub mod segment;
pub mod types;

pub use error::{CorpusError, Result};
pub use highlight::{is_keyword, tokenize, KEYWORDS};
pub use parser::{parse_cards, parse_embedded, CARD_DELIMITER};
pub use progress::Progress;
pub use render::{escape_html, highlight, render_content};
pub use segment::{looks_like_code_continuation, looks_like_code_start, segment};
pub use types::{Card, Segment, Token, TokenClass};
