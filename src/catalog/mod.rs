//! License catalog
//!
//! The catalog is the list of known license identifiers the suggestion engine
//! filters. It comes either from the built-in list or from a file:
//!
//! - JSON: an array of entries, or an SPDX-style document with a `licenses` array
//! - TOML: `[[license]]` tables
//!
//! Entries accept the SPDX list field names (`licenseId`, `licenseExceptionId`)
//! as aliases for `key`.

mod builtin;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};
use crate::parser::Operator;

/// Category reserved for synthetic operator suggestions
pub const OPERATOR_CATEGORY: &str = "operator";

/// Lower-case `text` one character at a time
///
/// Unlike `str::to_lowercase` this ignores word position (final sigma), so
/// folding a prefix always yields a prefix of the folded longer text.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LicenseInfo {
    /// Canonical license identifier, e.g. `Apache-2.0`
    #[serde(alias = "licenseId", alias = "licenseExceptionId", alias = "id")]
    pub key: String,

    /// Human-readable display name
    pub name: String,

    /// Free-form classification (permissive, copyleft, exception, ...)
    #[serde(default = "default_category")]
    pub category: String,
}

/// A suggestion has the same shape as a catalog entry.
///
/// Operator suggestions carry [`OPERATOR_CATEGORY`].
pub type Suggestion = LicenseInfo;

fn default_category() -> String {
    "uncategorized".to_string()
}

impl LicenseInfo {
    /// Create a new catalog entry
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            category: category.into(),
        }
    }

    /// Synthetic suggestion for an operator keyword
    pub fn operator(op: Operator) -> Self {
        Self::new(op.keyword(), op.description(), OPERATOR_CATEGORY)
    }

    /// Check if this is an operator suggestion
    pub fn is_operator(&self) -> bool {
        self.category == OPERATOR_CATEGORY
    }

    /// Case-insensitive substring match on key or name
    ///
    /// `needle` must already be folded with [`fold_case`].
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || fold_case(&self.key).contains(needle)
            || fold_case(&self.name).contains(needle)
    }
}

/// JSON catalog layouts
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    List(Vec<LicenseInfo>),
    Document { licenses: Vec<LicenseInfo> },
}

/// TOML catalog layout
#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(rename = "license", default)]
    licenses: Vec<LicenseInfo>,
}

/// Ordered collection of known licenses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    licenses: Vec<LicenseInfo>,
}

impl Catalog {
    /// Create a catalog from entries, keeping their order
    pub fn new(licenses: Vec<LicenseInfo>) -> Self {
        Self { licenses }
    }

    /// The embedded list of common SPDX licenses and exceptions
    pub fn builtin() -> Self {
        let licenses = builtin::BUILTIN_LICENSES
            .iter()
            .map(|(key, name, category)| LicenseInfo::new(*key, *name, *category))
            .collect();
        Self { licenses }
    }

    /// Load a catalog file, picking the format from its extension
    ///
    /// # Arguments
    /// * `path` - Path to a `.json` or `.toml` file
    ///
    /// # Returns
    /// * `Result<Catalog>` - Loaded catalog or error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        if !path.exists() {
            return Err(CatalogError::FileNotFound(shown).into());
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let content = std::fs::read_to_string(path)?;
        let catalog = match extension.as_deref() {
            Some("json") => Self::from_json(&content)?,
            Some("toml") => Self::from_toml(&content)?,
            _ => return Err(CatalogError::UnsupportedFormat(shown).into()),
        };

        debug!("Loaded {} catalog entries from {}", catalog.len(), shown);
        Ok(catalog)
    }

    /// Parse a JSON catalog
    pub fn from_json(content: &str) -> Result<Self> {
        let licenses = match serde_json::from_str::<JsonCatalog>(content)? {
            JsonCatalog::List(licenses) => licenses,
            JsonCatalog::Document { licenses } => licenses,
        };
        Self::checked(licenses)
    }

    /// Parse a TOML catalog
    pub fn from_toml(content: &str) -> Result<Self> {
        let parsed: TomlCatalog = toml::from_str(content)?;
        Self::checked(parsed.licenses)
    }

    /// Reject unusable entries and warn about duplicate keys
    fn checked(licenses: Vec<LicenseInfo>) -> Result<Self> {
        let mut seen = HashSet::new();

        for license in &licenses {
            if license.key.trim().is_empty() {
                return Err(CatalogError::InvalidEntry {
                    key: license.key.clone(),
                    reason: "key is empty".to_string(),
                }
                .into());
            }
            if license.key.contains(|c: char| c.is_whitespace() || c == '(' || c == ')') {
                return Err(CatalogError::InvalidEntry {
                    key: license.key.clone(),
                    reason: "key contains whitespace or parentheses".to_string(),
                }
                .into());
            }
            if license.is_operator() {
                return Err(CatalogError::InvalidEntry {
                    key: license.key.clone(),
                    reason: format!("category '{OPERATOR_CATEGORY}' is reserved"),
                }
                .into());
            }
            if !seen.insert(license.key.as_str()) {
                warn!("Duplicate catalog key: {}", license.key);
            }
        }

        Ok(Self { licenses })
    }

    /// Entries in catalog order
    pub fn entries(&self) -> &[LicenseInfo] {
        &self.licenses
    }

    /// Find an entry by key, ignoring case
    pub fn find(&self, key: &str) -> Option<&LicenseInfo> {
        let folded = fold_case(key);
        self.licenses
            .iter()
            .find(|license| fold_case(&license.key) == folded)
    }

    /// Check if a key is in the catalog, ignoring case
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Entries whose key or name contains `text`, ignoring case
    pub fn search(&self, text: &str) -> Vec<&LicenseInfo> {
        let needle = fold_case(text);
        self.licenses
            .iter()
            .filter(|license| license.matches(&needle))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.licenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
    }
}

impl From<Vec<LicenseInfo>> for Catalog {
    fn from(licenses: Vec<LicenseInfo>) -> Self {
        Self::new(licenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LicenseShellError;
    use std::io::Write;

    #[test]
    fn test_builtin_is_well_formed() {
        let catalog = Catalog::builtin();
        assert!(catalog.len() > 20);
        assert!(Catalog::checked(catalog.entries().to_vec()).is_ok());

        let keys: HashSet<&str> = catalog.entries().iter().map(|l| l.key.as_str()).collect();
        assert_eq!(keys.len(), catalog.len(), "builtin keys must be unique");
    }

    #[test]
    fn test_find_ignores_case() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find("apache-2.0").map(|l| l.key.as_str()), Some("Apache-2.0"));
        assert!(catalog.contains("mit"));
        assert!(!catalog.contains("AND"));
    }

    #[test]
    fn test_search_matches_key_and_name() {
        let catalog = Catalog::builtin();
        let by_key: Vec<&str> = catalog.search("bsd-2").iter().map(|l| l.key.as_str()).collect();
        assert_eq!(by_key, vec!["BSD-2-Clause"]);

        let by_name = catalog.search("boost");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].key, "BSL-1.0");
    }

    #[test]
    fn test_operator_suggestion() {
        let with = LicenseInfo::operator(Operator::With);
        assert_eq!(with.key, "WITH");
        assert_eq!(with.name, "WITH operator");
        assert!(with.is_operator());
        assert!(!LicenseInfo::new("MIT", "MIT License", "permissive").is_operator());
    }

    #[test]
    fn test_from_json_list() {
        let catalog = Catalog::from_json(
            r#"[
                {"key": "MIT", "name": "MIT License", "category": "permissive"},
                {"licenseId": "GPL-3.0", "name": "GNU GPL v3"}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[1].key, "GPL-3.0");
        assert_eq!(catalog.entries()[1].category, "uncategorized");
    }

    #[test]
    fn test_from_json_spdx_document() {
        let catalog = Catalog::from_json(
            r#"{"licenseListVersion": "3.24", "licenses": [
                {"licenseId": "0BSD", "name": "BSD Zero Clause License", "isOsiApproved": true}
            ]}"#,
        )
        .unwrap();

        assert_eq!(catalog.entries()[0].key, "0BSD");
    }

    #[test]
    fn test_from_toml() {
        let catalog = Catalog::from_toml(
            r#"
            [[license]]
            key = "Apache-2.0"
            name = "Apache License 2.0"
            category = "permissive"

            [[license]]
            key = "LLVM-exception"
            name = "LLVM Exception"
            category = "exception"
            "#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[1].category, "exception");
    }

    #[test]
    fn test_reserved_category_rejected() {
        let err = Catalog::from_json(r#"[{"key": "AND", "name": "x", "category": "operator"}]"#)
            .unwrap_err();
        assert!(matches!(
            err,
            LicenseShellError::Catalog(CatalogError::InvalidEntry { .. })
        ));
    }

    #[test]
    fn test_key_with_whitespace_rejected() {
        let err = Catalog::from_json(r#"[{"key": "MIT License", "name": "x"}]"#).unwrap_err();
        assert!(matches!(
            err,
            LicenseShellError::Catalog(CatalogError::InvalidEntry { .. })
        ));
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(LicenseShellError::Json(_))
        ));
    }

    #[test]
    fn test_load_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[{{"key": "MIT", "name": "MIT License"}}]"#).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.entries()[0].key, "MIT");
    }

    #[test]
    fn test_load_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        assert!(matches!(
            Catalog::load(file.path()),
            Err(LicenseShellError::Catalog(CatalogError::UnsupportedFormat(_)))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Catalog::load("/nonexistent/licenses.json"),
            Err(LicenseShellError::Catalog(CatalogError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_fold_case_ignores_word_position() {
        assert_eq!(fold_case("ΑΣ"), "ασ");
        assert!(fold_case("ΑΣΑ").starts_with(&fold_case("ΑΣ")));
        assert_eq!(fold_case("Apache-2.0"), "apache-2.0");
    }

    #[test]
    fn test_find_folds_like_search() {
        let catalog = Catalog::new(vec![LicenseInfo::new("ÉCOLE-1.0", "École License", "permissive")]);
        assert_eq!(catalog.search("école-1").len(), 1);
        assert!(catalog.contains("école-1.0"));
        assert_eq!(catalog.find("ÉcOlE-1.0").map(|l| l.key.as_str()), Some("ÉCOLE-1.0"));
    }
}
