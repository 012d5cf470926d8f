//! Completion context definitions
//!
//! This module defines the completion context types that represent what kind of
//! token is grammatically expected at the trailing position of an expression.

/// What may come next, together with the filter prefix typed so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionContext {
    /// A license identifier or `(`: start of input, after `(`, after `AND`/`OR`
    TermStart {
        /// Normalized prefix to filter licenses
        prefix: String,
    },

    /// `AND`, `OR`, `WITH`, or `)` when a group is open
    OperatorOrClose {
        /// Normalized prefix to filter licenses and operators
        prefix: String,
        /// Whether a closing parenthesis would be valid (depth > 0)
        can_close: bool,
    },

    /// A license exception identifier, after `WITH`
    ExceptionIdentifier {
        /// Normalized prefix to filter licenses
        prefix: String,
    },
}

impl CompletionContext {
    /// Create a term-start context
    pub fn term_start(prefix: impl Into<String>) -> Self {
        Self::TermStart {
            prefix: prefix.into(),
        }
    }

    /// Create an operator-or-close context
    pub fn operator_or_close(prefix: impl Into<String>, can_close: bool) -> Self {
        Self::OperatorOrClose {
            prefix: prefix.into(),
            can_close,
        }
    }

    /// Create an exception-identifier context
    pub fn exception_identifier(prefix: impl Into<String>) -> Self {
        Self::ExceptionIdentifier {
            prefix: prefix.into(),
        }
    }

    /// Get the prefix for this context
    pub fn prefix(&self) -> &str {
        match self {
            Self::TermStart { prefix } => prefix,
            Self::OperatorOrClose { prefix, .. } => prefix,
            Self::ExceptionIdentifier { prefix } => prefix,
        }
    }

    /// Operator keywords are only offered after a complete term
    pub fn allows_operators(&self) -> bool {
        matches!(self, Self::OperatorOrClose { .. })
    }

    /// Whether `)` would be valid next
    pub fn can_close(&self) -> bool {
        matches!(self, Self::OperatorOrClose { can_close: true, .. })
    }

    /// Short label for display
    pub fn describe(&self) -> &'static str {
        match self {
            Self::TermStart { .. } => "expect license or '('",
            Self::OperatorOrClose {
                can_close: true, ..
            } => "expect operator or ')'",
            Self::OperatorOrClose { .. } => "expect operator",
            Self::ExceptionIdentifier { .. } => "expect exception",
        }
    }
}
