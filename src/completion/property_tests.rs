//! Property-based tests for tokenizing and suggesting.
//!
//! 1. **Spans round-trip** - every token equals the input sliced at its span
//! 2. **Spans are ordered** - tokens never overlap and run left to right
//! 3. **Whitespace invariance** - trimming the input keeps the token values
//! 4. **Determinism** - the same call returns the same suggestions
//! 5. **Empty input** - returns the first `min(20, len)` catalog entries
//! 6. **Monotonic narrowing** - typing more of a token never adds candidates

use std::collections::HashSet;

use proptest::prelude::*;

use super::get_filtered_licenses;
use crate::catalog::LicenseInfo;
use crate::parser::tokenize;

// ============================================================================
// Generators
// ============================================================================

const EXPRESSION_PARTS: &[&str] = &[
    "MIT",
    "Apache-2.0",
    "GPL-2.0-only",
    "AND",
    "OR",
    "WITH",
    "and",
    "(",
    ")",
    "Classpath-exception-2.0",
    "LicenseRef-x",
];

/// Expressions assembled from realistic parts and arbitrary whitespace
fn expression() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (prop::sample::select(EXPRESSION_PARTS), "[ \t\n]{0,3}"),
        0..8,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(part, ws)| format!("{part}{ws}"))
            .collect()
    })
}

fn license() -> impl Strategy<Value = LicenseInfo> {
    ("[A-Za-z0-9.-]{1,12}", "[A-Za-z ]{0,20}")
        .prop_map(|(key, name)| LicenseInfo::new(key, name, "permissive"))
}

/// Small enough that licenses plus operators never hit the cap
fn small_catalog() -> impl Strategy<Value = Vec<LicenseInfo>> {
    prop::collection::vec(license(), 0..17)
}

fn any_catalog() -> impl Strategy<Value = Vec<LicenseInfo>> {
    prop::collection::vec(license(), 0..40)
}

// ============================================================================
// Tokenizer properties
// ============================================================================

proptest! {
    #[test]
    fn spans_round_trip(input in "\\PC{0,40}") {
        for token in tokenize(&input) {
            prop_assert_eq!(&input[token.span.clone()], token.value.as_str());
        }
    }

    #[test]
    fn spans_round_trip_expressions(input in expression()) {
        for token in tokenize(&input) {
            prop_assert_eq!(&input[token.span.clone()], token.value.as_str());
        }
    }

    #[test]
    fn spans_are_ordered(input in "\\PC{0,40}") {
        let tokens = tokenize(&input);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].end() <= pair[1].start());
        }
        for token in &tokens {
            prop_assert!(token.start() < token.end());
        }
    }

    #[test]
    fn trimming_keeps_token_values(input in "[ \t]{0,3}\\PC{0,30}[ \t]{0,3}") {
        let values = |s: &str| tokenize(s).into_iter().map(|t| t.value).collect::<Vec<_>>();
        prop_assert_eq!(values(&input), values(input.trim()));
    }
}

// ============================================================================
// Suggestion properties
// ============================================================================

proptest! {
    #[test]
    fn suggestions_are_deterministic(input in expression(), catalog in any_catalog()) {
        prop_assert_eq!(
            get_filtered_licenses(&input, &catalog),
            get_filtered_licenses(&input, &catalog)
        );
    }

    #[test]
    fn suggestions_never_exceed_cap(input in expression(), catalog in any_catalog()) {
        prop_assert!(get_filtered_licenses(&input, &catalog).len() <= 20);
    }

    #[test]
    fn empty_input_returns_catalog_head(catalog in any_catalog(), ws in "[ \t\n]{0,4}") {
        let suggestions = get_filtered_licenses(&ws, &catalog);
        let expected = catalog.len().min(20);
        prop_assert_eq!(suggestions.len(), expected);
        prop_assert_eq!(&suggestions[..], &catalog[..expected]);
    }

    #[test]
    fn typing_more_narrows_results(
        base in expression(),
        partial in "[A-Za-z0-9.-]{1,6}",
        more in "[A-Za-z0-9.-]{1,4}",
        catalog in small_catalog(),
    ) {
        let shorter = format!("{base} {partial}");
        let longer = format!("{shorter}{more}");

        let wide: HashSet<String> = get_filtered_licenses(&shorter, &catalog)
            .into_iter()
            .map(|s| s.key)
            .collect();
        let narrow = get_filtered_licenses(&longer, &catalog);

        for suggestion in narrow {
            prop_assert!(wide.contains(&suggestion.key), "{} not in {:?}", suggestion.key, wide);
        }
    }
}

#[test]
fn narrowing_holds_across_final_sigma() {
    let catalog = vec![LicenseInfo::new("ΑΣΑ-1.0", "Greek test license", "permissive")];

    for (shorter, longer) in [("ΑΣ", "ΑΣΑ"), ("MIT OR ΑΣ", "MIT OR ΑΣΑ")] {
        let wide: HashSet<String> = get_filtered_licenses(shorter, &catalog)
            .into_iter()
            .map(|s| s.key)
            .collect();
        let narrow = get_filtered_licenses(longer, &catalog);

        assert_eq!(narrow.len(), 1);
        for suggestion in narrow {
            assert!(wide.contains(&suggestion.key), "{} not in {:?}", suggestion.key, wide);
        }
    }
}
