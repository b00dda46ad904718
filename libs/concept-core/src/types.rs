//! Core types for concept cards.

use serde::{Deserialize, Serialize};

/// One concept/content study unit parsed from a corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub concept: String,
    #[serde(default)]
    pub content: String,
}

impl Card {
    pub fn new(concept: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            concept: concept.into(),
            content: content.into(),
        }
    }
}

/// Rendering unit derived from a card's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A single line of prose, already trimmed.
    Paragraph { text: String },
    /// Contiguous raw lines that look like code.
    CodeBlock { lines: Vec<String> },
}

impl Segment {
    /// Text of the segment as it will be fed to the renderer.
    pub fn source(&self) -> String {
        match self {
            Self::Paragraph { text } => text.clone(),
            Self::CodeBlock { lines } => lines.join("\n"),
        }
    }
}

/// Classification of a highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenClass {
    Keyword,
    Identifier,
    String,
    Number,
    Comment,
    Operator,
    Whitespace,
}

impl TokenClass {
    /// Style class used in rendered markup. Whitespace is never styled.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Keyword => Some("hl-kw"),
            Self::Identifier => Some("hl-id"),
            Self::String => Some("hl-str"),
            Self::Number => Some("hl-num"),
            Self::Comment => Some("hl-com"),
            Self::Operator => Some("hl-op"),
            Self::Whitespace => None,
        }
    }
}

/// A classified span of code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub class: TokenClass,
    pub text: String,
}

impl Token {
    pub fn new(class: TokenClass, text: impl Into<String>) -> Self {
        Self {
            class,
            text: text.into(),
        }
    }
}
