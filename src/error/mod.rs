//! Error handling for spdx-complete.
//!
//! The completion core is infallible by construction: half-typed expressions
//! are the normal case, not an error. Everything around it (reading catalog
//! and config files, terminal I/O, rendering output) reports failures through
//! [`LicenseShellError`].
//!
//! # Example
//!
//! ```rust,no_run
//! use spdx_complete::catalog::Catalog;
//! use spdx_complete::error::Result;
//!
//! fn load() -> Result<Catalog> {
//!     Catalog::load("licenses.json")
//! }
//! ```

pub mod kinds;

pub use kinds::{CatalogError, ConfigError, LicenseShellError, Result};
