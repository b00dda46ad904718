//! End-to-end tests over a small corpus: parse, segment and render.

use concept_cards_core::{
    highlight, parse_cards, render_content, segment, tokenize, Card, Segment, TokenClass,
};
use pretty_assertions::assert_eq;

const CORPUS: &str = "Arrow functions\r\n\
Shorter syntax for function expressions.\r\n\
const add = (a, b) => a + b;\r\n\
Copiar\r\n\
Template literals\r\n\
Strings with embedded expressions:\r\n\
const msg = `Hi ${user.name}!`;\r\n\
console.log(msg); // greet\r\n\
Copiar\r\n\
\r\n\
   \r\n\
Copiar\r\n\
Closing braces\r\n\
if (ready) {\r\n\
  start();\r\n\
}\r\n\
That is all!\r\n";

#[test]
fn corpus_parses_in_order() {
    let cards = parse_cards(CORPUS);
    let concepts: Vec<&str> = cards.iter().map(|c| c.concept.as_str()).collect();
    assert_eq!(
        concepts,
        vec!["Arrow functions", "Template literals", "Closing braces"]
    );
    assert!(cards.iter().all(|c| !c.concept.is_empty()));
    assert!(cards.iter().all(|c| !c.content.contains('\r')));
}

#[test]
fn card_content_segments() {
    let cards = parse_cards(CORPUS);
    assert_eq!(
        segment(&cards[2].content),
        vec![
            Segment::CodeBlock {
                lines: vec!["if (ready) {".into(), "start();".into(), "}".into()],
            },
            Segment::Paragraph {
                text: "That is all!".into(),
            },
        ]
    );
}

#[test]
fn rendered_card_has_only_expected_elements() {
    for card in parse_cards(CORPUS) {
        let html = render_content(&card.content);
        let stripped = html
            .replace("<p>", "")
            .replace("</p>", "")
            .replace("<code class=\"hl-block\">", "")
            .replace("</code>", "")
            .replace("</span>", "");
        let stripped = ["kw", "id", "str", "num", "com", "op"]
            .iter()
            .fold(stripped, |acc, class| {
                acc.replace(&format!("<span class=\"hl-{class}\">"), "")
            });
        assert!(!stripped.contains('<'), "unexpected markup in {html}");
        assert!(!stripped.contains('>'), "unexpected markup in {html}");
    }
}

#[test]
fn template_literal_card_is_one_string_token() {
    let cards = parse_cards(CORPUS);
    let tokens = tokenize("const msg = `Hi ${user.name}!`;");
    let strings: Vec<&str> = tokens
        .iter()
        .filter(|t| t.class == TokenClass::String)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(strings, vec!["`Hi ${user.name}!`"]);
    assert!(cards[1].content.contains("`Hi ${user.name}!`"));
}

#[test]
fn highlight_never_double_escapes() {
    let html = highlight("if (a & b) { return '<ok>'; }");
    assert!(html.contains("&amp;"));
    assert!(!html.contains("&amp;amp;"));
    assert!(html.contains("&#39;&lt;ok&gt;&#39;"));
}

#[test]
fn malformed_input_degrades_quietly() {
    for input in ["\"open", "`${", "/* never closed", "'\\", "-", ".", "\u{0}"] {
        let tokens = tokenize(input);
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, input);
        let _ = render_content(input);
    }
    assert_eq!(parse_cards("Copiar"), vec![Card::new("Copiar", "")]);
}
