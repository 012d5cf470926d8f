//! Operator keywords of license expressions
//!
//! The lexer leaves `AND`, `OR` and `WITH` as plain identifiers; this module is
//! where they get recognised.

use super::lexer::ExprToken;

/// Boolean and exception operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
    With,
}

impl Operator {
    /// All operators in suggestion order
    pub const ALL: [Operator; 3] = [Operator::And, Operator::Or, Operator::With];

    /// Canonical upper-case keyword
    pub fn keyword(self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::With => "WITH",
        }
    }

    /// Short description shown next to the keyword
    pub fn description(self) -> &'static str {
        match self {
            Operator::And => "AND operator",
            Operator::Or => "OR operator",
            Operator::With => "WITH operator",
        }
    }

    /// Recognise a keyword, case-insensitively
    pub fn from_keyword(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.keyword().eq_ignore_ascii_case(text))
    }

    /// Recognise an identifier token as an operator
    pub fn from_token(token: &ExprToken) -> Option<Self> {
        if token.is_identifier() {
            Self::from_keyword(&token.value)
        } else {
            None
        }
    }

    /// `AND` and `OR` join two terms; `WITH` attaches an exception
    pub fn is_boolean(self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }

    /// Check whether the keyword starts with `prefix`, ignoring case
    pub fn matches_prefix(self, prefix: &str) -> bool {
        let keyword = self.keyword();
        keyword.len() >= prefix.len()
            && keyword.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
    }
}
