//! Table formatting for catalog entries and tokens using tabled
//!
//! Rows are assembled with the `Builder` so the same code serves suggestions,
//! catalog listings and token dumps.

use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Color, Modify, Style, object::Columns, object::Rows, width::Width},
};

use crate::catalog::LicenseInfo;
use crate::config::TableStyle;
use crate::parser::{ExprToken, ExprTokenKind};

/// Maximum width for a single column (characters)
const DEFAULT_MAX_COLUMN_WIDTH: usize = 48;

/// Table formatter for catalog entries and tokens
pub struct TableFormatter {
    /// Maximum column width
    max_column_width: usize,

    /// Table style
    style: TableStyle,

    /// Enable colored output
    use_colors: bool,
}

impl TableFormatter {
    /// Create a new table formatter
    ///
    /// # Arguments
    /// * `use_colors` - Enable colored output
    pub fn new(use_colors: bool) -> Self {
        Self {
            max_column_width: DEFAULT_MAX_COLUMN_WIDTH,
            style: TableStyle::Modern,
            use_colors,
        }
    }

    /// Set the table style
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Format catalog entries or suggestions, one row each
    ///
    /// # Arguments
    /// * `licenses` - Entries to format
    ///
    /// # Returns
    /// * `String` - Table string
    pub fn format_licenses(&self, licenses: &[LicenseInfo]) -> String {
        if licenses.is_empty() {
            return "(no suggestions)".to_string();
        }

        let rows = licenses
            .iter()
            .map(|l| vec![l.key.clone(), l.name.clone(), l.category.clone()]);
        self.build(&["Key", "Name", "Category"], rows)
    }

    /// Format tokens with their byte spans
    pub fn format_tokens(&self, tokens: &[ExprToken]) -> String {
        if tokens.is_empty() {
            return "(no tokens)".to_string();
        }

        let rows = tokens.iter().map(|t| {
            let kind = match t.kind {
                ExprTokenKind::Identifier => "identifier",
                ExprTokenKind::Paren => "paren",
            };
            vec![
                kind.to_string(),
                t.value.clone(),
                t.start().to_string(),
                t.end().to_string(),
            ]
        });
        self.build(&["Kind", "Value", "Start", "End"], rows)
    }

    fn build(&self, header: &[&str], rows: impl Iterator<Item = Vec<String>>) -> String {
        let mut builder = Builder::default();
        builder.push_record(header.iter().map(|h| h.to_string()));
        for row in rows {
            builder.push_record(row);
        }

        let mut table = builder.build();
        self.apply_style(&mut table);

        for i in 0..header.len() {
            table.with(Modify::new(Columns::new(i..=i)).with(Width::wrap(self.max_column_width)));
        }
        table.with(Modify::new(Rows::first()).with(Alignment::center()));

        if self.use_colors {
            table.modify(Rows::first(), Color::FG_CYAN | Color::BOLD);
        }

        table.to_string()
    }

    fn apply_style(&self, table: &mut Table) {
        match self.style {
            TableStyle::Modern => table.with(Style::modern()),
            TableStyle::Ascii => table.with(Style::ascii()),
            TableStyle::Markdown => table.with(Style::markdown()),
        };
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}
