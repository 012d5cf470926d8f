//! Finite State Machine for completion context determination
//!
//! This module implements a small FSM that walks the completed tokens of a
//! license expression to determine what kind of token is valid next. The FSM is:
//! - Simple and predictable (three states plus a parenthesis counter)
//! - Error-tolerant (malformed prefixes still land in some state)
//! - Fast (O(n) single pass through tokens)

use super::context::CompletionContext;
use super::token_stream::TokenStream;
use crate::parser::{ExprToken, Operator};

/// FSM states representing positions in a license expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionState {
    /// Start of input, after `(`, or after `AND`/`OR` - a term is expected
    Start,
    /// After a license identifier or `)` - an operator is expected
    AfterTerm,
    /// After `WITH` - an exception identifier is expected
    AfterWith,
}

impl CompletionState {
    /// Perform state transition based on current state and token
    pub fn next(self, token: &ExprToken) -> Self {
        use CompletionState::*;

        if token.is_open_paren() {
            return Start;
        }
        if token.is_close_paren() {
            return AfterTerm;
        }

        match (self, Operator::from_token(token)) {
            // A leading AND/OR has nothing to join; still expect a term after it
            (_, Some(op)) if op.is_boolean() => Start,
            // WITH without a preceding license still expects an exception
            (_, Some(_)) => AfterWith,
            // Any other identifier is a term, known to the catalog or not
            (Start | AfterWith | AfterTerm, None) => AfterTerm,
        }
    }
}

/// FSM run result: the state plus the open parenthesis depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpressionFsm {
    pub state: CompletionState,
    pub depth: usize,
}

impl Default for ExpressionFsm {
    fn default() -> Self {
        Self {
            state: CompletionState::Start,
            depth: 0,
        }
    }
}

impl ExpressionFsm {
    /// Feed one token
    pub fn step(self, token: &ExprToken) -> Self {
        let depth = if token.is_open_paren() {
            self.depth + 1
        } else if token.is_close_paren() {
            self.depth.saturating_sub(1)
        } else {
            self.depth
        };

        Self {
            state: self.state.next(token),
            depth,
        }
    }

    /// Run the FSM on a sequence of tokens
    pub fn run(tokens: &[ExprToken]) -> Self {
        tokens
            .iter()
            .fold(ExpressionFsm::default(), |fsm, token| fsm.step(token))
    }

    /// Convert the final state to a completion context
    pub fn to_context(&self, stream: &TokenStream) -> CompletionContext {
        let prefix = stream.current_prefix();

        match self.state {
            CompletionState::Start => CompletionContext::term_start(prefix),
            CompletionState::AfterTerm => CompletionContext::operator_or_close(prefix, self.depth > 0),
            CompletionState::AfterWith => CompletionContext::exception_identifier(prefix),
        }
    }
}
