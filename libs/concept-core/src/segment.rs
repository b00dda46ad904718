//! Line-level segmentation of card content into prose and code.
//!
//! There is no grammar here. Each line is tested against a small set of
//! heuristics; a run of lines that look like code becomes one code block and
//! every other non-blank line becomes its own paragraph. The rules are
//! approximate on purpose and prose containing `{`, `}` or `=` can be taken
//! for code. Existing corpora depend on this exact behaviour.

use crate::types::Segment;

/// Line prefixes that open a code block. Matched as plain prefixes, so
/// `variable` or `format` also qualify.
pub const CODE_START_PREFIXES: &[&str] = &[
    "var", "let", "const", "function", "if", "else", "for", "while", "switch", "case", "return",
    "console.",
];

/// Leading characters that open a code block.
pub const CODE_START_CHARS: &[char] = &['{', '}', '(', ')', ';'];

/// Punctuation allowed in a continuation line, besides ASCII letters and digits.
pub const CODE_CHARS: &str = "_.'\",={}()[];:<>/- \t";

/// Split content into paragraphs and code blocks, in source order.
pub fn segment(content: &str) -> Vec<Segment> {
    let mut segmenter = Segmenter::new();
    for line in content.split('\n') {
        segmenter.process_line(line);
    }
    let segments = segmenter.finalize();
    tracing::trace!(segments = segments.len(), "segmented content");
    segments
}

/// Whether a trimmed line can open a code block on its own.
pub fn looks_like_code_start(trimmed: &str) -> bool {
    if trimmed.is_empty() {
        return false;
    }

    CODE_START_PREFIXES.iter().any(|prefix| trimmed.starts_with(prefix))
        || trimmed.starts_with(CODE_START_CHARS)
        || trimmed.starts_with("//")
        || (trimmed.contains('=') && (trimmed.contains(['{', '}', ';']) || trimmed.contains("//")))
        || trimmed == "}"
        || trimmed == "};"
        || trimmed.contains("()")
}

/// Whether a trimmed line keeps an already open code block going.
pub fn looks_like_code_continuation(trimmed: &str) -> bool {
    trimmed.is_empty()
        || trimmed.starts_with("//")
        || trimmed.starts_with('*')
        || trimmed.starts_with("/*")
        || trimmed.chars().all(is_code_char)
}

/// Member of the code-ish character set used by continuation lines.
pub fn is_code_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || CODE_CHARS.contains(c)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Closed,
    Open,
}

struct Segmenter {
    state: State,
    buffer: Vec<String>,
    segments: Vec<Segment>,
}

impl Segmenter {
    fn new() -> Self {
        Self {
            state: State::Closed,
            buffer: Vec::new(),
            segments: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str) {
        let trimmed = line.trim();
        let continues = self.state == State::Open && looks_like_code_continuation(trimmed);

        if looks_like_code_start(trimmed) || continues {
            self.buffer.push(line.to_string());
            self.state = State::Open;
            return;
        }

        self.flush_code();
        if !trimmed.is_empty() {
            self.segments.push(Segment::Paragraph {
                text: trimmed.to_string(),
            });
        }
    }

    fn flush_code(&mut self) {
        self.state = State::Closed;
        if self.buffer.is_empty() {
            return;
        }
        let lines = std::mem::take(&mut self.buffer);
        self.segments.push(Segment::CodeBlock { lines });
    }

    fn finalize(mut self) -> Vec<Segment> {
        self.flush_code();
        self.segments
    }
}
