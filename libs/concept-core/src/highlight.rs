//! Character-level tokenizer for code fragments.
//!
//! A single left-to-right pass with no backtracking. Every character of the
//! input ends up in exactly one token, so joining the token texts gives back
//! the input. Unterminated strings and comments run to the end of input.

use crate::types::{Token, TokenClass};

/// Words classified as [`TokenClass::Keyword`].
pub const KEYWORDS: &[&str] = &[
    "var", "let", "const", "function", "return", "if", "else", "for", "while", "do", "switch",
    "case", "break", "default", "true", "false", "null", "undefined", "new", "this", "typeof",
    "in", "of", "continue", "try", "catch", "finally", "throw", "class", "extends", "super",
    "import", "export", "from", "async", "await",
];

/// Split code into classified tokens.
pub fn tokenize(code: &str) -> Vec<Token> {
    Scanner::new(code).collect()
}

/// Whether a word is in the reserved set.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Cursor over one input, owned by a single `tokenize` call.
struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(code: &str) -> Self {
        Self {
            chars: code.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    fn digit_at(&self, offset: usize) -> bool {
        self.peek_at(offset).is_some_and(|c| c.is_ascii_digit())
    }

    fn text_from(&self, start: usize) -> String {
        self.chars[start..self.pos].iter().collect()
    }

    fn starts_number(&self, c: char) -> bool {
        c.is_ascii_digit() || ((c == '.' || c == '-') && self.digit_at(1))
    }

    fn scan_token(&mut self) -> Option<Token> {
        let c = self.peek()?;
        let start = self.pos;

        let class = match c {
            '"' | '\'' => {
                self.scan_quoted(c);
                TokenClass::String
            }
            '`' => {
                self.scan_template();
                TokenClass::String
            }
            '/' if self.peek_at(1) == Some('/') => {
                self.scan_line_comment();
                TokenClass::Comment
            }
            '/' if self.peek_at(1) == Some('*') => {
                self.scan_block_comment();
                TokenClass::Comment
            }
            _ if self.starts_number(c) => {
                self.scan_number();
                TokenClass::Number
            }
            _ if is_word_char(c) => {
                self.eat_while(is_word_char);
                TokenClass::Identifier
            }
            '\n' | ' ' | '\t' => {
                self.bump();
                TokenClass::Whitespace
            }
            _ => {
                self.bump();
                TokenClass::Operator
            }
        };

        let text = self.text_from(start);
        let class = match class {
            TokenClass::Identifier if is_keyword(&text) => TokenClass::Keyword,
            other => other,
        };
        Some(Token::new(class, text))
    }

    fn scan_quoted(&mut self, quote: char) {
        self.bump();
        while let Some(c) = self.bump() {
            match c {
                '\\' => {
                    self.bump();
                }
                c if c == quote => break,
                _ => {}
            }
        }
    }

    fn scan_template(&mut self) {
        self.bump();
        while let Some(c) = self.bump() {
            match c {
                '\\' => {
                    self.bump();
                }
                '`' => break,
                '$' if self.peek() == Some('{') => {
                    self.bump();
                    self.scan_interpolation();
                }
                _ => {}
            }
        }
    }

    // Braces are only counted, nothing inside is tokenized.
    fn scan_interpolation(&mut self) {
        let mut depth = 1usize;
        while depth > 0 {
            match self.bump() {
                Some('{') => depth += 1,
                Some('}') => depth -= 1,
                Some(_) => {}
                None => break,
            }
        }
    }

    fn scan_line_comment(&mut self) {
        while let Some(c) = self.bump() {
            if c == '\n' {
                break;
            }
        }
    }

    fn scan_block_comment(&mut self) {
        self.pos += 2;
        while let Some(c) = self.bump() {
            if c == '*' && self.peek() == Some('/') {
                self.bump();
                break;
            }
        }
    }

    fn scan_number(&mut self) {
        if self.peek() == Some('-') {
            self.bump();
        }
        if self.peek() == Some('.') {
            self.bump();
        }
        self.eat_while(|c| c.is_ascii_digit());

        if self.peek() == Some('.') {
            self.bump();
            self.eat_while(|c| c.is_ascii_digit());
        }

        // The marker is taken even without digits after it.
        if matches!(self.peek(), Some('e' | 'E')) {
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            self.eat_while(|c| c.is_ascii_digit());
        }
    }
}

impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.scan_token()
    }
}
