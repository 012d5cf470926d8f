//! Completion engine - orchestrates the completion flow
//!
//! This module ties together all the completion components: lexing, the FSM,
//! context determination, and candidate fetching.

use std::sync::Arc;

use serde::Serialize;
use tracing::trace;

use super::context::CompletionContext;
use super::fsm::ExpressionFsm;
use super::provider::CandidateProvider;
use super::token_stream::TokenStream;
use crate::catalog::Suggestion;
use crate::parser::ExprToken;

/// Maximum number of suggestions returned by default
pub const DEFAULT_SUGGESTION_LIMIT: usize = 20;

/// Knobs for merging and capping suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuggestionOptions {
    /// Maximum number of suggestions
    pub limit: usize,
    /// Put operator keywords ahead of catalog matches
    pub operators_first: bool,
}

impl Default for SuggestionOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SUGGESTION_LIMIT,
            operators_first: false,
        }
    }
}

/// Everything the engine derived from one expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// All tokens of the expression
    pub tokens: Vec<ExprToken>,
    /// Expected token category and filter prefix
    #[serde(serialize_with = "serialize_context")]
    pub context: CompletionContext,
    /// Open parenthesis depth before the partial token
    pub depth: usize,
    /// Byte offset where an accepted suggestion replaces the text
    pub replace_from: usize,
    /// Ranked, capped suggestions
    pub suggestions: Vec<Suggestion>,
}

fn serialize_context<S: serde::Serializer>(
    context: &CompletionContext,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(context.describe())
}

/// Analyze `expression` against `provider`
///
/// This is the whole algorithm; [`CompletionEngine`] and
/// [`get_filtered_licenses`](super::get_filtered_licenses) are thin wrappers.
pub fn analyze_with(
    provider: &dyn CandidateProvider,
    expression: &str,
    options: SuggestionOptions,
) -> Analysis {
    // 1. Tokenize and split off the token being typed
    let stream = TokenStream::new(expression);

    // 2. Run FSM on completed tokens
    let fsm = ExpressionFsm::run(stream.completed_tokens());

    // 3. Convert state to completion context
    let context = fsm.to_context(&stream);

    // 4. Fetch and merge candidates
    let suggestions = if stream.is_empty() {
        provider
            .catalog()
            .iter()
            .take(options.limit)
            .cloned()
            .collect()
    } else {
        fetch_candidates(provider, &context, options)
    };

    trace!(
        state = ?fsm.state,
        depth = fsm.depth,
        prefix = context.prefix(),
        count = suggestions.len(),
        "completion"
    );

    Analysis {
        replace_from: stream.completion_start(),
        tokens: stream.tokens,
        context,
        depth: fsm.depth,
        suggestions,
    }
}

/// Filter licenses and operators for the context, then merge and cap
fn fetch_candidates(
    provider: &dyn CandidateProvider,
    context: &CompletionContext,
    options: SuggestionOptions,
) -> Vec<Suggestion> {
    let prefix = context.prefix();
    let licenses = provider.licenses(prefix);
    let operators = if context.allows_operators() {
        provider.operators(prefix)
    } else {
        Vec::new()
    };

    let (first, second) = if options.operators_first {
        (operators, licenses)
    } else {
        (licenses, operators)
    };

    first
        .into_iter()
        .chain(second)
        .take(options.limit)
        .collect()
}

/// Main completion engine
pub struct CompletionEngine {
    /// Candidate provider for fetching suggestions
    provider: Arc<dyn CandidateProvider>,
    /// Merge and cap settings
    options: SuggestionOptions,
}

impl CompletionEngine {
    /// Create a new completion engine
    ///
    /// # Arguments
    /// * `provider` - Candidate provider for fetching suggestions
    pub fn new(provider: Arc<dyn CandidateProvider>) -> Self {
        Self {
            provider,
            options: SuggestionOptions::default(),
        }
    }

    /// Replace the merge and cap settings
    pub fn with_options(mut self, options: SuggestionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> SuggestionOptions {
        self.options
    }

    /// Analyze a whole expression
    pub fn analyze(&self, expression: &str) -> Analysis {
        analyze_with(self.provider.as_ref(), expression, self.options)
    }

    /// Suggestions for a whole expression
    pub fn suggest(&self, expression: &str) -> Vec<Suggestion> {
        self.analyze(expression).suggestions
    }

    /// Complete the input at the given cursor position
    ///
    /// Only the text before the cursor is considered. A cursor inside a
    /// multi-byte character moves back to that character's start.
    ///
    /// # Arguments
    /// * `line` - The input line
    /// * `pos` - Cursor position (byte index)
    ///
    /// # Returns
    /// * `(usize, Vec<Suggestion>)` - Replacement start position and suggestions
    pub fn complete(&self, line: &str, pos: usize) -> (usize, Vec<Suggestion>) {
        let mut pos = pos.min(line.len());
        while !line.is_char_boundary(pos) {
            pos -= 1;
        }
        let before_cursor = &line[..pos];
        let analysis = self.analyze(before_cursor);
        (analysis.replace_from, analysis.suggestions)
    }
}
