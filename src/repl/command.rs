//! Line commands understood by the interactive shell
//!
//! Anything that is not a shell command is treated as an expression.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::completion::CompletionEngine;
use crate::error::Result;
use crate::formatter::Formatter;

/// One entered line, interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Blank line
    Empty,
    /// `exit` or `quit`
    Exit,
    /// `help`
    Help,
    /// `catalog [TEXT]`
    Catalog(Option<String>),
    /// Any other line: analyse it as an expression
    Analyze(String),
}

impl ReplCommand {
    /// Interpret a line entered at the prompt
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let mut words = trimmed.splitn(2, char::is_whitespace);

        match words.next().unwrap_or("") {
            "" => ReplCommand::Empty,
            "exit" | "quit" if trimmed.len() == 4 => ReplCommand::Exit,
            "help" if trimmed.len() == 4 => ReplCommand::Help,
            "catalog" => {
                let filter = words.next().map(str::trim).filter(|s| !s.is_empty());
                ReplCommand::Catalog(filter.map(str::to_string))
            }
            _ => ReplCommand::Analyze(line.to_string()),
        }
    }
}

const HELP_TEXT: &str = "\
Type a license expression to see its tokens, context and suggestions.
Press Tab to complete, right arrow to accept a hint.

Commands:
  catalog [TEXT]   list catalog entries, optionally filtered
  help             show this help
  exit, quit       leave the shell";

/// Everything a shell needs to answer a command, without the line editor
pub struct ReplSession {
    engine: CompletionEngine,
    catalog: Arc<Catalog>,
    formatter: Formatter,
}

impl ReplSession {
    /// Create a new session
    ///
    /// # Arguments
    /// * `engine` - Engine over `catalog`
    /// * `catalog` - Catalog listed by the `catalog` command
    /// * `formatter` - Output formatter
    pub fn new(engine: CompletionEngine, catalog: Arc<Catalog>, formatter: Formatter) -> Self {
        Self {
            engine,
            catalog,
            formatter,
        }
    }

    /// Produce the output for a command
    ///
    /// # Returns
    /// * `Result<Option<String>>` - Text to print, `None` when there is nothing to show
    pub fn execute(&self, command: &ReplCommand) -> Result<Option<String>> {
        match command {
            ReplCommand::Empty | ReplCommand::Exit => Ok(None),
            ReplCommand::Help => Ok(Some(HELP_TEXT.to_string())),
            ReplCommand::Catalog(filter) => {
                let entries: Vec<_> = match filter {
                    Some(text) => self.catalog.search(text).into_iter().cloned().collect(),
                    None => self.catalog.entries().to_vec(),
                };
                self.formatter.format_licenses(&entries).map(Some)
            }
            ReplCommand::Analyze(line) => {
                let analysis = self.engine.analyze(line);
                self.formatter.format_analysis(&analysis).map(Some)
            }
        }
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LicenseInfo;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse(""), ReplCommand::Empty);
        assert_eq!(ReplCommand::parse("  \t"), ReplCommand::Empty);
        assert_eq!(ReplCommand::parse("exit"), ReplCommand::Exit);
        assert_eq!(ReplCommand::parse(" quit "), ReplCommand::Exit);
        assert_eq!(ReplCommand::parse("help"), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("catalog"), ReplCommand::Catalog(None));
        assert_eq!(
            ReplCommand::parse("catalog  gnu general "),
            ReplCommand::Catalog(Some("gnu general".to_string()))
        );
    }

    #[test]
    fn test_parse_expressions() {
        assert_eq!(
            ReplCommand::parse("MIT OR "),
            ReplCommand::Analyze("MIT OR ".to_string())
        );
        // keywords only count on their own
        assert_eq!(
            ReplCommand::parse("exit OR MIT"),
            ReplCommand::Analyze("exit OR MIT".to_string())
        );
    }

    fn create_session() -> ReplSession {
        let catalog = Arc::new(Catalog::new(vec![
            LicenseInfo::new("Apache-2.0", "Apache License 2.0", "permissive"),
            LicenseInfo::new("MIT", "MIT License", "permissive"),
        ]));
        let engine = CompletionEngine::new(catalog.clone());
        ReplSession::new(engine, catalog, Formatter::new(OutputFormat::Plain, false))
    }

    #[test]
    fn test_execute_analyze() {
        let session = create_session();
        let output = session
            .execute(&ReplCommand::parse("MIT OR Apa"))
            .unwrap()
            .unwrap();

        assert!(output.starts_with("context: expect license or '('"));
        assert!(output.contains("Apache License 2.0"));
    }

    #[test]
    fn test_execute_catalog_filter() {
        let session = create_session();
        let output = session
            .execute(&ReplCommand::Catalog(Some("mit".to_string())))
            .unwrap()
            .unwrap();
        assert_eq!(output, "MIT  MIT License");
    }

    #[test]
    fn test_execute_silent_commands() {
        let session = create_session();
        assert_eq!(session.execute(&ReplCommand::Empty).unwrap(), None);
        assert_eq!(session.execute(&ReplCommand::Exit).unwrap(), None);
        assert!(session.execute(&ReplCommand::Help).unwrap().is_some());
    }
}
