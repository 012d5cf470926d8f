//! License expression lexing
//!
//! The parser layer is deliberately shallow: it splits an expression into
//! positioned tokens and recognises operator keywords. Grammatical judgement
//! (what may follow what) lives in the completion FSM, which has to cope with
//! half-typed input anyway.
//!
//! # Examples
//!
//! ```
//! use spdx_complete::parser::{tokenize, Operator};
//!
//! let tokens = tokenize("(MIT OR Apache-2.0)");
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(Operator::from_token(&tokens[2]), Some(Operator::Or));
//! ```

mod keyword;
mod lexer;

pub use keyword::Operator;
pub use lexer::{ExprToken, ExprTokenKind, ExpressionLexer, tokenize};
