//! Token stream with awareness of the token being typed
//!
//! Completion always looks at the end of the text. The last token is either
//! complete (whitespace or a parenthesis follows it) or still in progress, in
//! which case it is a filter and not yet a grammatical unit.

use crate::catalog::fold_case;
use crate::parser::{ExprToken, tokenize};

/// Tokenized expression split into completed tokens and an optional partial one
#[derive(Debug, Clone)]
pub struct TokenStream {
    /// All tokens, including the partial one
    pub tokens: Vec<ExprToken>,
    /// Length of the tokenized input in bytes
    pub input_len: usize,
    /// Whether the last token is still being typed
    partial: bool,
}

impl TokenStream {
    /// Tokenize `input` and detect a trailing partial token
    ///
    /// Only identifiers can be partial: a parenthesis is complete the moment it
    /// is typed.
    pub fn new(input: &str) -> Self {
        let tokens = tokenize(input);
        let partial = tokens
            .last()
            .is_some_and(|last| last.is_identifier() && last.end() == input.len());

        Self {
            tokens,
            input_len: input.len(),
            partial,
        }
    }

    /// Tokens that drive the FSM (everything except the partial token)
    pub fn completed_tokens(&self) -> &[ExprToken] {
        if self.partial {
            &self.tokens[..self.tokens.len() - 1]
        } else {
            &self.tokens
        }
    }

    /// The token still being typed, if any
    pub fn partial_token(&self) -> Option<&ExprToken> {
        if self.partial { self.tokens.last() } else { None }
    }

    /// Partial token text exactly as typed
    pub fn raw_prefix(&self) -> &str {
        self.partial_token().map_or("", |token| token.value.as_str())
    }

    /// Normalized filter prefix for the partial token
    pub fn current_prefix(&self) -> String {
        normalize_prefix(self.raw_prefix())
    }

    /// Where an accepted completion should be inserted
    pub fn completion_start(&self) -> usize {
        self.partial_token()
            .map_or(self.input_len, |token| token.start())
    }

    /// Check if the input had no tokens at all
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Lower-case `text` and collapse whitespace runs into single hyphens
///
/// Lets "mit license" look like a key-style search term.
pub fn normalize_prefix(text: &str) -> String {
    fold_case(&text.split_whitespace().collect::<Vec<_>>().join("-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_identifier() {
        let stream = TokenStream::new("Apache-2.0 OR Com");
        assert_eq!(stream.tokens.len(), 3);
        assert_eq!(stream.completed_tokens().len(), 2);
        assert_eq!(stream.raw_prefix(), "Com");
        assert_eq!(stream.current_prefix(), "com");
        assert_eq!(stream.completion_start(), 14);
    }

    #[test]
    fn test_trailing_whitespace_completes_token() {
        let stream = TokenStream::new("Apache-2.0 ");
        assert!(stream.partial_token().is_none());
        assert_eq!(stream.completed_tokens().len(), 1);
        assert_eq!(stream.current_prefix(), "");
        assert_eq!(stream.completion_start(), 11);
    }

    #[test]
    fn test_paren_is_never_partial() {
        let stream = TokenStream::new("(MIT OR (");
        assert!(stream.partial_token().is_none());
        assert_eq!(stream.completed_tokens().len(), 4);
        assert_eq!(stream.completion_start(), 9);
    }

    #[test]
    fn test_identifier_before_close_paren_is_complete() {
        let stream = TokenStream::new("(MIT)");
        assert!(stream.partial_token().is_none());
        assert_eq!(stream.completed_tokens().len(), 3);
    }

    #[test]
    fn test_empty_stream() {
        let stream = TokenStream::new("   ");
        assert!(stream.is_empty());
        assert!(stream.completed_tokens().is_empty());
        assert_eq!(stream.completion_start(), 3);
    }

    #[test]
    fn test_normalize_prefix() {
        assert_eq!(normalize_prefix("MIT"), "mit");
        assert_eq!(normalize_prefix("mit  license"), "mit-license");
        assert_eq!(normalize_prefix(" GNU\tGeneral "), "gnu-general");
        assert_eq!(normalize_prefix(""), "");
        assert_eq!(normalize_prefix("ΑΣ"), "ασ");
    }
}
