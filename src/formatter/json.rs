//! JSON formatting for suggestions, tokens and analyses
//!
//! Compact output stays uncoloured so it can be piped; pretty output is
//! highlighted with `colored_json` when colours are enabled.

use colored_json::prelude::*;
use serde::Serialize;

use crate::error::Result;

/// JSON formatter with pretty printing support
pub struct JsonFormatter {
    /// Enable pretty printing
    pretty: bool,

    /// Enable colored output
    use_colors: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    ///
    /// # Arguments
    /// * `pretty` - Enable pretty printing
    /// * `use_colors` - Enable colored output
    pub fn new(pretty: bool, use_colors: bool) -> Self {
        Self { pretty, use_colors }
    }

    /// Serialize any value as JSON
    ///
    /// # Arguments
    /// * `value` - Value to format
    ///
    /// # Returns
    /// * `Result<String>` - JSON string or error
    pub fn format<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        if !self.pretty {
            return Ok(serde_json::to_string(value)?);
        }

        let json_str = serde_json::to_string_pretty(value)?;
        if self.use_colors {
            Ok(json_str.to_colored_json_auto().unwrap_or(json_str))
        } else {
            Ok(json_str)
        }
    }
}
