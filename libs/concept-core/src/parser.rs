//! Corpus parser for concept cards.
//!
//! # Format
//! ```text
//! Closures
//! A closure captures variables from its scope.
//! const add = (a) => (b) => a + b;
//! Copiar
//! Hoisting
//! Declarations are moved to the top of their scope.
//! Copiar
//! ```
//!
//! Blocks are separated by a line containing only `Copiar`. The first
//! non-blank line of a block is the concept, the remaining non-blank lines
//! are the content.

use crate::error::{CorpusError, Result};
use crate::types::Card;
use serde_json::Value;

/// Separator between card blocks, newlines included.
pub const CARD_DELIMITER: &str = "\nCopiar\n";

/// Parse a raw corpus into cards, in order of appearance.
pub fn parse_cards(raw: &str) -> Vec<Card> {
    if raw.is_empty() {
        return vec![];
    }

    let normalized = raw.replace("\r\n", "\n");
    let mut blocks = 0usize;
    let cards: Vec<Card> = normalized
        .split(CARD_DELIMITER)
        .inspect(|_| blocks += 1)
        .filter_map(parse_block)
        .collect();

    tracing::debug!(
        blocks,
        cards = cards.len(),
        dropped = blocks - cards.len(),
        "parsed corpus"
    );
    cards
}

fn parse_block(block: &str) -> Option<Card> {
    let mut lines = block
        .trim()
        .split('\n')
        .filter(|line| !line.trim().is_empty());

    let concept = lines.next()?.trim().to_string();
    let content = lines
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    Some(Card { concept, content })
}

/// Decode an embedded JSON payload of cards (`[{"concept": .., "content": ..}]`).
///
/// Entries with a blank concept are skipped. An empty result is an error so
/// the caller can fall through to its empty state.
pub fn parse_embedded(json: &str) -> Result<Vec<Card>> {
    let items = match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => items,
        _ => return Err(CorpusError::EmptyEmbedded),
    };

    let cards: Vec<Card> = serde_json::from_value::<Vec<Card>>(Value::Array(items))?
        .into_iter()
        .filter(|card| !card.concept.trim().is_empty())
        .collect();

    if cards.is_empty() {
        return Err(CorpusError::EmptyEmbedded);
    }

    tracing::debug!(cards = cards.len(), "decoded embedded cards");
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_two_blocks() {
        let input = "Concept One\nLine A\nLine B\nCopiar\nConcept Two\nCopiar\n";
        let cards = parse_cards(input);
        assert_eq!(
            cards,
            vec![
                Card::new("Concept One", "Line A\nLine B"),
                Card::new("Concept Two", ""),
            ]
        );
    }

    #[test]
    fn drop_blank_block() {
        let cards = parse_cards("   \n\nCopiar\nReal\nStuff\n");
        assert_eq!(cards, vec![Card::new("Real", "Stuff")]);
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse_cards("").is_empty());
        assert!(parse_cards("\n\n  \n").is_empty());
    }

    #[test]
    fn normalize_crlf() {
        let cards = parse_cards("First\r\nbody\r\nCopiar\r\nSecond\r\nmore\r\n");
        assert_eq!(
            cards,
            vec![Card::new("First", "body"), Card::new("Second", "more")]
        );
    }

    #[test]
    fn trims_and_skips_blank_lines() {
        let cards = parse_cards("\n   Concept  \n\n  first line  \n\n\tsecond\t\n");
        assert_eq!(cards, vec![Card::new("Concept", "first line\nsecond")]);
    }

    #[test]
    fn copiar_inside_a_line_is_not_a_delimiter() {
        let cards = parse_cards("Title\nCopiar isto\nnot Copiar\n");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].content, "Copiar isto\nnot Copiar");
    }

    #[test]
    fn leading_delimiter_without_newline_stays_in_block() {
        // The marker must be preceded by a newline to split.
        let cards = parse_cards("Copiar\nOnly\n");
        assert_eq!(cards, vec![Card::new("Copiar", "Only")]);
    }

    #[test]
    fn never_more_cards_than_blocks() {
        let input = "a\nCopiar\n\nCopiar\nb\nCopiar\n \n";
        let blocks = input.split(CARD_DELIMITER).count();
        let cards = parse_cards(input);
        assert!(cards.len() <= blocks);
        assert_eq!(cards.len(), 2);
    }

    #[test]
    fn embedded_cards_decode() {
        let json = r#"[{"concept":"Scope","content":"let is block scoped"},{"concept":"  ","content":"x"}]"#;
        let cards = parse_embedded(json).unwrap();
        assert_eq!(cards, vec![Card::new("Scope", "let is block scoped")]);
    }

    #[test]
    fn embedded_rejects_invalid_json() {
        let result = parse_embedded("[{");
        assert!(matches!(result, Err(CorpusError::InvalidEmbedded(_))));
    }

    #[test]
    fn embedded_rejects_empty_or_non_array() {
        assert!(matches!(parse_embedded("[]"), Err(CorpusError::EmptyEmbedded)));
        assert!(matches!(
            parse_embedded(r#"{"concept":"x"}"#),
            Err(CorpusError::EmptyEmbedded)
        ));
    }
}
