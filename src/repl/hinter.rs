//! Hinter for reedline - completes the token being typed inline
//!
//! The first suggestion that extends the partial token is shown greyed out
//! after the cursor. Without one, the most recent history entry sharing the
//! line as prefix is used instead.

use nu_ansi_term::{Color, Style};
use reedline::{Hinter, History};

use crate::completion::CompletionEngine;

/// Suggestion-driven hinter for reedline
pub struct LicenseHinter {
    /// Engine used to find the top suggestion
    engine: CompletionEngine,
    /// Style for hints
    style: Style,
    /// Current hint text
    current_hint: String,
}

impl LicenseHinter {
    /// Create a new hinter over a completion engine
    pub fn new(engine: CompletionEngine) -> Self {
        Self {
            engine,
            style: Style::new().italic().fg(Color::DarkGray),
            current_hint: String::new(),
        }
    }

    /// Remainder of the first suggestion that extends the partial token
    fn suggestion_hint(&self, line: &str) -> Option<String> {
        let analysis = self.engine.analyze(line);
        let partial = line.get(analysis.replace_from..)?;
        if partial.is_empty() {
            return None;
        }

        analysis.suggestions.iter().find_map(|suggestion| {
            let key = suggestion.key.as_str();
            let head = key.get(..partial.len())?;
            if key.len() > partial.len() && head.eq_ignore_ascii_case(partial) {
                key.get(partial.len()..).map(str::to_string)
            } else {
                None
            }
        })
    }

    /// Remainder of the latest history entry starting with `line`
    fn history_hint(line: &str, history: &dyn History) -> Option<String> {
        let item = history
            .search(reedline::SearchQuery::last_with_prefix(line.to_string(), None))
            .ok()?
            .into_iter()
            .next()?;

        let history_line = item.command_line.as_str();
        if history_line.len() > line.len() && history_line.starts_with(line) {
            Some(history_line[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Hinter for LicenseHinter {
    fn handle(
        &mut self,
        line: &str,
        pos: usize,
        history: &dyn History,
        use_ansi_coloring: bool,
        _cwd: &str,
    ) -> String {
        self.current_hint.clear();

        // Only hint when the cursor sits at the end of a non-empty line
        if pos != line.len() || line.trim().is_empty() {
            return String::new();
        }

        let Some(hint) = self
            .suggestion_hint(line)
            .or_else(|| Self::history_hint(line, history))
        else {
            return String::new();
        };

        self.current_hint = hint;
        if use_ansi_coloring {
            self.style.paint(&self.current_hint).to_string()
        } else {
            self.current_hint.clone()
        }
    }

    fn complete_hint(&self) -> String {
        self.current_hint.clone()
    }

    /// Hint text up to and including the next whitespace run
    fn next_hint_token(&self) -> String {
        let hint = self.current_hint.as_str();
        let word_end = hint
            .char_indices()
            .skip_while(|(_, c)| c.is_whitespace())
            .find(|(_, c)| c.is_whitespace())
            .map_or(hint.len(), |(i, _)| i);
        hint[..word_end].to_string()
    }
}
