//! Completion system for license expressions
//!
//! Given the text a user is typing, this module works out which kind of token
//! is grammatically valid next and returns a capped list of candidates: catalog
//! licenses, operator keywords, or both. The pipeline is error-tolerant and
//! works with incomplete input; it never fails.
//!
//! # Architecture
//!
//! - **TokenStream**: tokens plus detection of the token still being typed
//! - **FSM**: determines the completion context from the completed tokens
//! - **Context**: what to complete and the filter prefix
//! - **Provider**: fetches candidates (catalog entries, operators)
//! - **Engine**: orchestrates the flow, merges and caps the result
//!
//! # Examples
//!
//! ```
//! use spdx_complete::catalog::LicenseInfo;
//! use spdx_complete::completion::get_filtered_licenses;
//!
//! let catalog = vec![
//!     LicenseInfo::new("Apache-2.0", "Apache License 2.0", "permissive"),
//!     LicenseInfo::new("MIT", "MIT License", "permissive"),
//! ];
//!
//! let suggestions = get_filtered_licenses("MIT OR Apa", &catalog);
//! assert_eq!(suggestions[0].key, "Apache-2.0");
//! ```

mod context;
mod engine;
mod fsm;
mod provider;
mod token_stream;

#[cfg(test)]
mod property_tests;

pub use context::CompletionContext;
pub use engine::{
    Analysis, CompletionEngine, DEFAULT_SUGGESTION_LIMIT, SuggestionOptions, analyze_with,
};
pub use fsm::{CompletionState, ExpressionFsm};
pub use provider::{CandidateProvider, CatalogView};
pub use token_stream::{TokenStream, normalize_prefix};

use crate::catalog::{LicenseInfo, Suggestion};

/// Suggestions for `expression` against `catalog`, capped at 20
///
/// Catalog matches come first in catalog order, then operator keywords when
/// the position allows them.
pub fn get_filtered_licenses(expression: &str, catalog: &[LicenseInfo]) -> Vec<Suggestion> {
    analyze_with(&CatalogView(catalog), expression, SuggestionOptions::default()).suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<LicenseInfo> {
        vec![
            LicenseInfo::new("Apache-2.0", "Apache License 2.0", "permissive"),
            LicenseInfo::new("MIT", "MIT License", "permissive"),
            LicenseInfo::new("Commons-Clause", "Commons Clause", "proprietary"),
            LicenseInfo::new("GPL-3.0", "GNU General Public License v3.0", "copyleft"),
        ]
    }

    fn keys(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.key.as_str()).collect()
    }

    #[test]
    fn test_partial_first_term() {
        assert_eq!(keys(&get_filtered_licenses("Apa", &catalog())), vec!["Apache-2.0"]);
    }

    #[test]
    fn test_operators_after_complete_term() {
        let suggestions = get_filtered_licenses("Apache-2.0 ", &catalog());
        let keys = keys(&suggestions);
        assert!(keys.contains(&"AND"));
        assert!(keys.contains(&"OR"));
        assert!(keys.contains(&"WITH"));
        assert_eq!(keys.len(), 7);
    }

    #[test]
    fn test_licenses_after_boolean_operator() {
        let suggestions = get_filtered_licenses("Apache-2.0 OR ", &catalog());
        assert!(keys(&suggestions).contains(&"MIT"));
        assert!(!suggestions.iter().any(|s| s.is_operator()));
    }

    #[test]
    fn test_partial_second_term() {
        assert_eq!(
            keys(&get_filtered_licenses("Apache-2.0 OR Com", &catalog())),
            vec!["Commons-Clause"]
        );
    }

    #[test]
    fn test_nested_parens_do_not_affect_filtering() {
        assert_eq!(
            keys(&get_filtered_licenses("(MIT OR (Apache-2.0 AND Com", &catalog())),
            vec!["Commons-Clause"]
        );
    }

    #[test]
    fn test_empty_input_returns_catalog() {
        assert_eq!(get_filtered_licenses("", &catalog()), catalog());
        assert_eq!(get_filtered_licenses("   ", &catalog()), catalog());
    }

    #[test]
    fn test_empty_input_capped_at_twenty() {
        let big: Vec<LicenseInfo> = (0..30)
            .map(|i| LicenseInfo::new(format!("L-{i}"), format!("License {i}"), "permissive"))
            .collect();
        let suggestions = get_filtered_licenses("", &big);
        assert_eq!(suggestions.len(), 20);
        assert_eq!(suggestions[..], big[..20]);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(get_filtered_licenses("", &[]).is_empty());
        assert!(get_filtered_licenses("MI", &[]).is_empty());
        // operators do not depend on the catalog
        assert_eq!(keys(&get_filtered_licenses("MIT O", &[])), vec!["OR"]);
    }

    #[test]
    fn test_display_name_match() {
        assert_eq!(
            keys(&get_filtered_licenses("gnu", &catalog())),
            vec!["GPL-3.0"]
        );
    }

    #[test]
    fn test_case_insensitive_filter() {
        assert_eq!(keys(&get_filtered_licenses("mit", &catalog())), vec!["MIT"]);
        assert_eq!(
            keys(&get_filtered_licenses("MIT and apache", &catalog())),
            vec!["Apache-2.0"]
        );
    }

    #[test]
    fn test_term_glued_to_keyword_is_one_token() {
        // No whitespace: the whole run is one partial identifier at term start
        assert!(get_filtered_licenses("Apache-2.0W", &catalog()).is_empty());
    }

    #[test]
    fn test_close_paren_allows_operators() {
        let suggestions = get_filtered_licenses("(MIT OR GPL-3.0)", &catalog());
        assert_eq!(suggestions.iter().filter(|s| s.is_operator()).count(), 3);
    }
}
