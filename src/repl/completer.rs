//! Completer for reedline - provides completion suggestions

use reedline::{Completer, Span, Suggestion};

use crate::completion::CompletionEngine;

/// License expression completer for reedline
pub struct LicenseCompleter {
    /// Completion engine for context-aware suggestions
    completion_engine: CompletionEngine,
}

impl LicenseCompleter {
    /// Create a new completer
    ///
    /// # Arguments
    /// * `completion_engine` - Engine configured with the shell's catalog and options
    pub fn new(completion_engine: CompletionEngine) -> Self {
        Self { completion_engine }
    }
}

impl Completer for LicenseCompleter {
    /// Complete the input at the given cursor position
    ///
    /// # Arguments
    /// * `line` - The input line
    /// * `pos` - Cursor position (byte index)
    ///
    /// # Returns
    /// * `Vec<Suggestion>` - List of completion suggestions
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let end = pos.min(line.len());
        let (start, candidates) = self.completion_engine.complete(line, end);

        candidates
            .into_iter()
            .map(|candidate| Suggestion {
                append_whitespace: candidate.is_operator(),
                value: candidate.key,
                description: Some(candidate.name),
                span: Span::new(start, end),
                ..Default::default()
            })
            .collect()
    }
}
