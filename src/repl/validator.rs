//! Validator for reedline - keeps reading while parentheses are open

use reedline::{ValidationResult, Validator};

use crate::completion::ExpressionFsm;
use crate::parser::tokenize;

/// Expression validator for reedline
///
/// A line with unclosed `(` continues on the next line. Stray `)` never
/// blocks submission; the highlighter marks them instead.
#[derive(Debug, Default)]
pub struct LicenseValidator;

impl LicenseValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Open parenthesis depth at the end of `line`
    fn depth(line: &str) -> usize {
        ExpressionFsm::run(&tokenize(line)).depth
    }
}

impl Validator for LicenseValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        if Self::depth(line) > 0 {
            ValidationResult::Incomplete
        } else {
            ValidationResult::Complete
        }
    }
}
