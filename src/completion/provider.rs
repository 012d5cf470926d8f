//! Candidate provider for completion suggestions
//!
//! This module provides the trait and implementations for fetching completion
//! candidates: catalog licenses and operator keywords.

use crate::catalog::{Catalog, LicenseInfo, Suggestion};
use crate::parser::Operator;

/// Trait for providing completion candidates
pub trait CandidateProvider: Send + Sync {
    /// Catalog entries in catalog order
    fn catalog(&self) -> &[LicenseInfo];

    /// Get licenses whose key or name contains the prefix
    ///
    /// `prefix` is expected to be normalized (lower-case); an empty prefix
    /// returns the whole catalog.
    fn licenses(&self, prefix: &str) -> Vec<Suggestion> {
        self.catalog()
            .iter()
            .filter(|license| license.matches(prefix))
            .cloned()
            .collect()
    }

    /// Get operator keywords starting with the prefix
    fn operators(&self, prefix: &str) -> Vec<Suggestion> {
        Operator::ALL
            .into_iter()
            .filter(|op| op.matches_prefix(prefix))
            .map(LicenseInfo::operator)
            .collect()
    }
}

impl CandidateProvider for Catalog {
    fn catalog(&self) -> &[LicenseInfo] {
        self.entries()
    }
}

/// Borrowed catalog slice, for callers that own their entries
#[derive(Debug, Clone, Copy)]
pub struct CatalogView<'a>(pub &'a [LicenseInfo]);

impl CandidateProvider for CatalogView<'_> {
    fn catalog(&self) -> &[LicenseInfo] {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog() -> Vec<LicenseInfo> {
        vec![
            LicenseInfo::new("Apache-2.0", "Apache License 2.0", "permissive"),
            LicenseInfo::new("MIT", "MIT License", "permissive"),
            LicenseInfo::new("Commons-Clause", "Commons Clause", "proprietary"),
            LicenseInfo::new("GPL-3.0", "GNU General Public License v3.0", "copyleft"),
        ]
    }

    fn keys(items: &[Suggestion]) -> Vec<&str> {
        items.iter().map(|s| s.key.as_str()).collect()
    }

    #[test]
    fn test_licenses_all() {
        let catalog = test_catalog();
        let provider = CatalogView(&catalog);
        assert_eq!(provider.licenses("").len(), 4);
    }

    #[test]
    fn test_licenses_substring_match() {
        let catalog = test_catalog();
        let provider = CatalogView(&catalog);

        assert_eq!(keys(&provider.licenses("com")), vec!["Commons-Clause"]);
        // "license" appears in several display names
        assert_eq!(
            keys(&provider.licenses("license")),
            vec!["Apache-2.0", "MIT", "GPL-3.0"]
        );
        assert_eq!(keys(&provider.licenses("-2")), vec!["Apache-2.0"]);
    }

    #[test]
    fn test_licenses_keep_catalog_order() {
        let catalog = test_catalog();
        let provider = CatalogView(&catalog);
        assert_eq!(
            keys(&provider.licenses("a")),
            vec!["Apache-2.0", "Commons-Clause", "GPL-3.0"]
        );
    }

    #[test]
    fn test_licenses_no_match() {
        let catalog = test_catalog();
        let provider = CatalogView(&catalog);
        assert!(provider.licenses("zzz").is_empty());
    }

    #[test]
    fn test_operators_all() {
        let catalog = test_catalog();
        let provider = CatalogView(&catalog);
        assert_eq!(keys(&provider.operators("")), vec!["AND", "OR", "WITH"]);
        assert!(provider.operators("").iter().all(|s| s.is_operator()));
    }

    #[test]
    fn test_operators_filter() {
        let catalog = test_catalog();
        let provider = CatalogView(&catalog);
        assert_eq!(keys(&provider.operators("o")), vec!["OR"]);
        assert_eq!(keys(&provider.operators("wi")), vec!["WITH"]);
        assert!(provider.operators("x").is_empty());
    }

    #[test]
    fn test_catalog_provider() {
        let catalog = Catalog::new(test_catalog());
        assert_eq!(keys(&catalog.licenses("mit")), vec!["MIT"]);
    }
}
