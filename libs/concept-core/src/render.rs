//! HTML rendering of card content.
//!
//! Output only ever contains `<p>`, `<code class="hl-block">` and
//! `<span class="hl-*">` elements, and every piece of literal text inside
//! them is escaped exactly once.

use crate::highlight::tokenize;
use crate::segment::segment;
use crate::types::Segment;

/// Class of the element wrapping a highlighted code block.
pub const CODE_BLOCK_CLASS: &str = "hl-block";

/// Escape `&`, `<`, `>`, `"` and `'` for use in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Highlight a code fragment into styled spans.
pub fn highlight(code: &str) -> String {
    let mut out = String::with_capacity(code.len() * 2);
    for token in tokenize(code) {
        let text = escape_html(&token.text);
        match token.class.css_class() {
            Some(class) => {
                out.push_str("<span class=\"");
                out.push_str(class);
                out.push_str("\">");
                out.push_str(&text);
                out.push_str("</span>");
            }
            None => out.push_str(&text),
        }
    }
    out
}

/// Render a card's content into paragraphs and highlighted code blocks.
pub fn render_content(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }

    segment(content)
        .iter()
        .map(render_segment)
        .collect::<Vec<_>>()
        .join("")
}

fn render_segment(segment: &Segment) -> String {
    match segment {
        Segment::Paragraph { text } => format!("<p>{}</p>", escape_html(text)),
        Segment::CodeBlock { .. } => format!(
            "<code class=\"{}\">{}</code>",
            CODE_BLOCK_CLASS,
            highlight(&segment.source())
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escape_covers_five_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain é text"), "plain é text");
    }

    #[test]
    fn highlight_declaration() {
        assert_eq!(
            highlight("const x = 1;"),
            concat!(
                r#"<span class="hl-kw">const</span> "#,
                r#"<span class="hl-id">x</span> "#,
                r#"<span class="hl-op">=</span> "#,
                r#"<span class="hl-num">1</span>"#,
                r#"<span class="hl-op">;</span>"#,
            )
        );
    }

    #[test]
    fn highlight_escapes_once() {
        let out = highlight("a && b < c");
        assert!(out.contains(r#"<span class="hl-op">&amp;</span>"#));
        assert!(out.contains(r#"<span class="hl-op">&lt;</span>"#));
        assert!(!out.contains("&amp;amp;"));
    }

    #[test]
    fn highlight_escapes_strings_and_comments() {
        assert_eq!(
            highlight("'<b>' // \"q\""),
            concat!(
                r#"<span class="hl-str">&#39;&lt;b&gt;&#39;</span> "#,
                r#"<span class="hl-com">// &quot;q&quot;</span>"#,
            )
        );
    }

    #[test]
    fn highlight_empty() {
        assert_eq!(highlight(""), "");
    }

    #[test]
    fn render_mixed_content() {
        let content = "Use <strong> & friends:\nlet a = 1;";
        assert_eq!(
            render_content(content),
            concat!(
                "<p>Use &lt;strong&gt; &amp; friends:</p>",
                r#"<code class="hl-block"><span class="hl-kw">let</span> "#,
                r#"<span class="hl-id">a</span> <span class="hl-op">=</span> "#,
                r#"<span class="hl-num">1</span><span class="hl-op">;</span></code>"#,
            )
        );
    }

    #[test]
    fn render_code_block_keeps_newlines() {
        let out = render_content("if (a) {\n}");
        assert_eq!(
            out,
            concat!(
                r#"<code class="hl-block"><span class="hl-kw">if</span> "#,
                r#"<span class="hl-op">(</span><span class="hl-id">a</span>"#,
                r#"<span class="hl-op">)</span> <span class="hl-op">{</span>"#,
                "\n",
                r#"<span class="hl-op">}</span></code>"#,
            )
        );
    }

    #[test]
    fn render_empty_content() {
        assert_eq!(render_content(""), "");
        assert_eq!(render_content("\n\n"), "");
    }
}
