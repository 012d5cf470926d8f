//! License expression lexer for error-tolerant tokenization
//!
//! Splits expressions like `(MIT OR Apache-2.0) AND GPL-2.0 WITH Classpath-exception-2.0`
//! into positioned tokens. Like every piece of the completion pipeline it never
//! rejects input: unbalanced parentheses and misplaced operators are tokenized
//! structurally and judged later by the completion FSM.
//!
//! # Design Principles
//!
//! - **Never panic** - always return a valid token list
//! - **Two token kinds** - parentheses and everything else
//! - **Keywords are identifiers** - `AND`/`OR`/`WITH` are classified later
//! - **Stable offsets** - spans point into the original, untrimmed input

use std::ops::Range;

use serde::Serialize;

/// Token kinds for license expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExprTokenKind {
    /// Maximal run of non-whitespace, non-parenthesis characters
    Identifier,
    /// `(` or `)`
    Paren,
}

/// Token with position information
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExprToken {
    pub kind: ExprTokenKind,
    /// Exact text matched, equal to `input[span]`
    pub value: String,
    /// Byte range in the original input
    pub span: Range<usize>,
}

impl ExprToken {
    /// Create a new token
    pub fn new(kind: ExprTokenKind, value: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
        }
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == ExprTokenKind::Identifier
    }

    pub fn is_open_paren(&self) -> bool {
        self.kind == ExprTokenKind::Paren && self.value == "("
    }

    pub fn is_close_paren(&self) -> bool {
        self.kind == ExprTokenKind::Paren && self.value == ")"
    }
}

/// License expression lexer
pub struct ExpressionLexer<'a> {
    input: &'a str,
    /// Byte position of the next unread character
    pos: usize,
}

impl<'a> ExpressionLexer<'a> {
    /// Create a new lexer from input string
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenize the entire input
    ///
    /// Empty and all-whitespace input yields an empty list.
    pub fn tokenize(input: &str) -> Vec<ExprToken> {
        let mut lexer = ExpressionLexer::new(input);
        let mut tokens = Vec::new();

        while let Some(token) = lexer.next_token() {
            tokens.push(token);
        }

        tokens
    }

    /// Get the next token, or `None` at end of input
    fn next_token(&mut self) -> Option<ExprToken> {
        self.skip_whitespace();

        let start = self.pos;
        let ch = self.current_char()?;

        if is_paren(ch) {
            self.advance(ch);
            return Some(ExprToken::new(
                ExprTokenKind::Paren,
                &self.input[start..self.pos],
                start..self.pos,
            ));
        }

        Some(self.scan_identifier(start))
    }

    /// Scan a maximal run of identifier characters
    fn scan_identifier(&mut self, start: usize) -> ExprToken {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() || is_paren(ch) {
                break;
            }
            self.advance(ch);
        }

        ExprToken::new(
            ExprTokenKind::Identifier,
            &self.input[start..self.pos],
            start..self.pos,
        )
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if !ch.is_whitespace() {
                break;
            }
            self.advance(ch);
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self, ch: char) {
        self.pos += ch.len_utf8();
    }
}

fn is_paren(ch: char) -> bool {
    ch == '(' || ch == ')'
}

/// Tokenize a license expression
pub fn tokenize(input: &str) -> Vec<ExprToken> {
    ExpressionLexer::tokenize(input)
}
