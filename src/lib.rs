//! SPDX license expression completion library
//!
//! This library tokenizes SPDX license expressions and suggests what may be
//! typed next: catalog licenses where a term is expected, operator keywords
//! where an operator is allowed. It backs the `spdx-complete` command and its
//! interactive shell, and can be embedded in any editor or form that needs
//! license-expression completion.
//!
//! # Modules
//!
//! - `catalog`: License catalog (built-in, JSON or TOML)
//! - `cli`: Command-line interface and argument parsing
//! - `completion`: Context analysis and suggestion engine
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `formatter`: Output formatting and display
//! - `parser`: Expression tokenizer and operator keywords
//! - `repl`: Interactive shell
//!
//! # Example
//!
//! ```
//! use spdx_complete::{catalog::Catalog, get_filtered_licenses, tokenize};
//!
//! let catalog = Catalog::builtin();
//!
//! let tokens = tokenize("(MIT OR Apa");
//! assert_eq!(tokens.len(), 4);
//!
//! let suggestions = get_filtered_licenses("(MIT OR Apa", catalog.entries());
//! assert!(suggestions.iter().any(|s| s.key == "Apache-2.0"));
//! ```

pub mod catalog;
pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod repl;

// Re-export commonly used types
pub use catalog::{Catalog, LicenseInfo, Suggestion};
pub use completion::{CompletionEngine, SuggestionOptions, get_filtered_licenses};
pub use config::Config;
pub use error::{LicenseShellError, Result};
pub use formatter::Formatter;
pub use parser::{ExprToken, ExprTokenKind, tokenize};
pub use repl::ReplEngine;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
