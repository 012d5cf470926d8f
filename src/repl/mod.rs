//! Interactive shell for license expressions
//!
//! This module provides an interactive shell built on reedline:
//! - Tab completion driven by the completion engine
//! - Inline hints for the token being typed, falling back to history
//! - Syntax highlighting of operators, known licenses and parentheses
//! - Multi-line input while parentheses are open
//! - Persistent command history

mod command;
mod completer;
mod engine;
mod highlighter;
mod hinter;
mod prompt;
mod validator;

pub use command::{ReplCommand, ReplSession};
pub use completer::LicenseCompleter;
pub use engine::ReplEngine;
pub use highlighter::LicenseHighlighter;
pub use hinter::LicenseHinter;
pub use prompt::LicensePrompt;
pub use validator::LicenseValidator;
