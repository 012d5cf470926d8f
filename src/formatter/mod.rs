//! Output formatting for spdx-complete
//!
//! This module renders suggestions, tokens and analyses for the CLI and the
//! interactive shell:
//! - Plain text, one item per line
//! - JSON formatting (compact and pretty-printed)
//! - Table formatting

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

use nu_ansi_term::{Color, Style};

use crate::catalog::LicenseInfo;
use crate::completion::Analysis;
use crate::config::{DisplayConfig, OutputFormat, TableStyle};
use crate::error::Result;
use crate::parser::{ExprToken, ExprTokenKind};

/// Main formatter for command output
pub struct Formatter {
    /// Output format type
    format_type: OutputFormat,

    /// Enable colored output
    use_colors: bool,

    /// Border style for table output
    table_style: TableStyle,
}

impl Formatter {
    /// Create a new formatter
    ///
    /// # Arguments
    /// * `format_type` - Output format type
    /// * `use_colors` - Enable colored output
    ///
    /// # Returns
    /// * `Self` - New formatter instance
    pub fn new(format_type: OutputFormat, use_colors: bool) -> Self {
        Self {
            format_type,
            use_colors,
            table_style: TableStyle::default(),
        }
    }

    /// Set the border style used for table output
    pub fn with_table_style(mut self, style: TableStyle) -> Self {
        self.table_style = style;
        self
    }

    /// Create a formatter from the display section of the configuration
    pub fn from_config(display: &DisplayConfig) -> Self {
        Self::new(display.format, display.color_output).with_table_style(display.table_style)
    }

    pub fn format_type(&self) -> OutputFormat {
        self.format_type
    }

    /// Format suggestions or catalog entries
    ///
    /// # Arguments
    /// * `licenses` - Entries to format, in order
    ///
    /// # Returns
    /// * `Result<String>` - Formatted output or error
    pub fn format_licenses(&self, licenses: &[LicenseInfo]) -> Result<String> {
        match self.format_type {
            OutputFormat::Plain => Ok(self.plain_licenses(licenses)),
            OutputFormat::Json => JsonFormatter::new(false, self.use_colors).format(licenses),
            OutputFormat::JsonPretty => JsonFormatter::new(true, self.use_colors).format(licenses),
            OutputFormat::Table => Ok(self.table().format_licenses(licenses)),
        }
    }

    /// Format tokens with their spans
    pub fn format_tokens(&self, tokens: &[ExprToken]) -> Result<String> {
        match self.format_type {
            OutputFormat::Plain => Ok(self.plain_tokens(tokens)),
            OutputFormat::Json => JsonFormatter::new(false, self.use_colors).format(tokens),
            OutputFormat::JsonPretty => JsonFormatter::new(true, self.use_colors).format(tokens),
            OutputFormat::Table => Ok(self.table().format_tokens(tokens)),
        }
    }

    /// Format a full analysis: tokens, context and suggestions
    pub fn format_analysis(&self, analysis: &Analysis) -> Result<String> {
        match self.format_type {
            OutputFormat::Json => JsonFormatter::new(false, self.use_colors).format(analysis),
            OutputFormat::JsonPretty => JsonFormatter::new(true, self.use_colors).format(analysis),
            OutputFormat::Plain | OutputFormat::Table => {
                let header = format!(
                    "context: {} (depth {})",
                    analysis.context.describe(),
                    analysis.depth
                );
                Ok(format!(
                    "{}\n{}\n{}",
                    self.paint(Style::new().bold(), &header),
                    self.format_tokens(&analysis.tokens)?,
                    self.format_licenses(&analysis.suggestions)?
                ))
            }
        }
    }

    /// Format an error message
    pub fn format_error(&self, message: &str) -> String {
        self.paint(Color::Red.normal(), &format!("Error: {}", message))
    }

    fn table(&self) -> TableFormatter {
        TableFormatter::new(self.use_colors).with_style(self.table_style)
    }

    fn plain_licenses(&self, licenses: &[LicenseInfo]) -> String {
        if licenses.is_empty() {
            return self.paint(Color::DarkGray.normal(), "(no suggestions)");
        }

        let width = licenses.iter().map(|l| l.key.len()).max().unwrap_or(0);
        licenses
            .iter()
            .map(|l| {
                let style = if l.is_operator() {
                    Color::Yellow.bold()
                } else {
                    Color::Green.normal()
                };
                let key = format!("{:<width$}", l.key);
                format!("{}  {}", self.paint(style, &key), l.name)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn plain_tokens(&self, tokens: &[ExprToken]) -> String {
        if tokens.is_empty() {
            return self.paint(Color::DarkGray.normal(), "(no tokens)");
        }

        tokens
            .iter()
            .map(|t| {
                let kind = match t.kind {
                    ExprTokenKind::Identifier => "identifier",
                    ExprTokenKind::Paren => "paren",
                };
                format!("{:<10} {:>3}..{:<3} {}", kind, t.start(), t.end(), t.value)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.use_colors {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(OutputFormat::Plain, false)
    }
}
