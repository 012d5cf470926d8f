use std::{fmt, io};

/// Crate-wide `Result` type using [`LicenseShellError`] as the error.
///
/// The completion core never fails; this alias covers the layers around it
/// (catalog files, configuration, terminal I/O, output formatting).
pub type Result<T> = std::result::Result<T, LicenseShellError>;

/// Top-level error type for spdx-complete.
#[derive(Debug)]
pub enum LicenseShellError {
    /// Configuration errors.
    Config(ConfigError),

    /// License catalog errors.
    Catalog(CatalogError),

    /// I/O errors.
    Io(io::Error),

    /// JSON (de)serialization errors.
    Json(serde_json::Error),

    /// TOML deserialization errors.
    Toml(toml::de::Error),

    /// TOML serialization errors.
    TomlSerialize(toml::ser::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },

    /// Catch-all for configuration problems.
    Generic(String),
}

/// Catalog-specific errors.
#[derive(Debug)]
pub enum CatalogError {
    /// Catalog file not found.
    FileNotFound(String),

    /// File extension is neither `.json` nor `.toml`.
    UnsupportedFormat(String),

    /// An entry is unusable (empty key, reserved category, ...).
    InvalidEntry { key: String, reason: String },
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for LicenseShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LicenseShellError::Config(e) => write!(f, "Configuration error: {e}"),
            LicenseShellError::Catalog(e) => write!(f, "Catalog error: {e}"),
            LicenseShellError::Io(e) => write!(f, "I/O error: {e}"),
            LicenseShellError::Json(e) => write!(f, "JSON error: {e}"),
            LicenseShellError::Toml(e) => write!(f, "TOML error: {e}"),
            LicenseShellError::TomlSerialize(e) => write!(f, "TOML error: {e}"),
            LicenseShellError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
            ConfigError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::FileNotFound(path) => write!(f, "Catalog file not found: {path}"),
            CatalogError::UnsupportedFormat(path) => {
                write!(f, "Unsupported catalog format (expected .json or .toml): {path}")
            }
            CatalogError::InvalidEntry { key, reason } => {
                write!(f, "Invalid catalog entry '{key}': {reason}")
            }
        }
    }
}

impl std::error::Error for LicenseShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LicenseShellError::Io(e) => Some(e),
            LicenseShellError::Json(e) => Some(e),
            LicenseShellError::Toml(e) => Some(e),
            LicenseShellError::TomlSerialize(e) => Some(e),
            _ => None,
        }
    }
}
impl std::error::Error for ConfigError {}
impl std::error::Error for CatalogError {}

/* ========================= Conversions to LicenseShellError ========================= */

impl From<io::Error> for LicenseShellError {
    fn from(err: io::Error) -> Self {
        LicenseShellError::Io(err)
    }
}

impl From<serde_json::Error> for LicenseShellError {
    fn from(err: serde_json::Error) -> Self {
        LicenseShellError::Json(err)
    }
}

impl From<toml::de::Error> for LicenseShellError {
    fn from(err: toml::de::Error) -> Self {
        LicenseShellError::Toml(err)
    }
}

impl From<toml::ser::Error> for LicenseShellError {
    fn from(err: toml::ser::Error) -> Self {
        LicenseShellError::TomlSerialize(err)
    }
}

impl From<ConfigError> for LicenseShellError {
    fn from(err: ConfigError) -> Self {
        LicenseShellError::Config(err)
    }
}

impl From<CatalogError> for LicenseShellError {
    fn from(err: CatalogError) -> Self {
        LicenseShellError::Catalog(err)
    }
}

impl From<String> for LicenseShellError {
    fn from(msg: String) -> Self {
        LicenseShellError::Generic(msg)
    }
}

impl From<&str> for LicenseShellError {
    fn from(msg: &str) -> Self {
        LicenseShellError::Generic(msg.to_owned())
    }
}
