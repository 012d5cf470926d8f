//! Syntax highlighter for license expressions
//!
//! Works on the same tokens as the completion engine, so what is coloured as
//! an operator is exactly what the engine treats as one.

use std::sync::Arc;

use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

use crate::catalog::Catalog;
use crate::parser::{ExprToken, Operator, tokenize};

/// Token classes the highlighter distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenClass {
    Operator,
    License,
    Exception,
    Unknown,
    Paren,
    UnmatchedParen,
}

impl TokenClass {
    fn style(self) -> Style {
        match self {
            TokenClass::Operator => Color::Magenta.bold(),
            TokenClass::License => Color::Green.normal(),
            TokenClass::Exception => Color::Cyan.normal(),
            TokenClass::Unknown => Color::Yellow.normal(),
            TokenClass::Paren => Color::Blue.normal(),
            TokenClass::UnmatchedParen => Color::Red.bold(),
        }
    }
}

/// Highlighter for license expressions
pub struct LicenseHighlighter {
    catalog: Arc<Catalog>,
    enabled: bool,
}

impl LicenseHighlighter {
    /// Create a new highlighter
    ///
    /// # Arguments
    /// * `catalog` - Catalog used to recognise known licenses
    /// * `enabled` - When false, lines are returned unstyled
    pub fn new(catalog: Arc<Catalog>, enabled: bool) -> Self {
        Self { catalog, enabled }
    }

    fn classify_identifier(&self, token: &ExprToken) -> TokenClass {
        if Operator::from_token(token).is_some() {
            return TokenClass::Operator;
        }

        match self.catalog.find(&token.value) {
            Some(entry) if entry.category == "exception" => TokenClass::Exception,
            Some(_) => TokenClass::License,
            None => TokenClass::Unknown,
        }
    }

    /// Class of each token, in order
    fn classify(&self, tokens: &[ExprToken]) -> Vec<TokenClass> {
        let mut depth = 0usize;
        tokens
            .iter()
            .map(|token| {
                if token.is_open_paren() {
                    depth += 1;
                    TokenClass::Paren
                } else if token.is_close_paren() {
                    if depth == 0 {
                        TokenClass::UnmatchedParen
                    } else {
                        depth -= 1;
                        TokenClass::Paren
                    }
                } else {
                    self.classify_identifier(token)
                }
            })
            .collect()
    }
}

impl Highlighter for LicenseHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();

        if !self.enabled {
            styled.push((Style::default(), line.to_string()));
            return styled;
        }

        let tokens = tokenize(line);
        let classes = self.classify(&tokens);

        // Whitespace between tokens is pushed unstyled so the text is unchanged
        let mut last = 0;
        for (token, class) in tokens.iter().zip(classes) {
            if token.start() > last {
                styled.push((Style::default(), line[last..token.start()].to_string()));
            }
            styled.push((class.style(), token.value.clone()));
            last = token.end();
        }
        if last < line.len() {
            styled.push((Style::default(), line[last..].to_string()));
        }

        styled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LicenseInfo;

    fn create_highlighter(enabled: bool) -> LicenseHighlighter {
        let catalog = Catalog::new(vec![
            LicenseInfo::new("MIT", "MIT License", "permissive"),
            LicenseInfo::new("GPL-2.0-only", "GNU General Public License v2.0 only", "copyleft"),
            LicenseInfo::new("Classpath-exception-2.0", "Classpath exception 2.0", "exception"),
        ]);
        LicenseHighlighter::new(Arc::new(catalog), enabled)
    }

    fn styles_of(highlighter: &LicenseHighlighter, line: &str) -> Vec<(Style, String)> {
        highlighter
            .highlight(line, line.len())
            .buffer
            .into_iter()
            .filter(|(_, text)| !text.trim().is_empty())
            .collect()
    }

    #[test]
    fn test_text_preserved() {
        let highlighter = create_highlighter(true);
        let line = "  (MIT  or\tFoo) WITH ";
        let text: String = highlighter
            .highlight(line, 0)
            .buffer
            .iter()
            .map(|(_, t)| t.as_str())
            .collect();
        assert_eq!(text, line);
    }

    #[test]
    fn test_disabled_highlighting() {
        let highlighter = create_highlighter(false);
        let styled = highlighter.highlight("MIT OR GPL-2.0-only", 0);
        assert_eq!(styled.buffer.len(), 1);
        assert_eq!(styled.render_simple(), "MIT OR GPL-2.0-only");
    }

    #[test]
    fn test_token_classes() {
        let highlighter = create_highlighter(true);
        let styles = styles_of(&highlighter, "GPL-2.0-only with Classpath-exception-2.0 OR Foo");

        assert_eq!(styles[0].0, TokenClass::License.style());
        assert_eq!(styles[1].0, TokenClass::Operator.style());
        assert_eq!(styles[2].0, TokenClass::Exception.style());
        assert_eq!(styles[3].0, TokenClass::Operator.style());
        assert_eq!(styles[4].0, TokenClass::Unknown.style());
    }

    #[test]
    fn test_known_license_case_insensitive() {
        let highlighter = create_highlighter(true);
        let styles = styles_of(&highlighter, "mit");
        assert_eq!(styles[0].0, TokenClass::License.style());
    }

    #[test]
    fn test_unmatched_close_paren() {
        let highlighter = create_highlighter(true);
        let styles = styles_of(&highlighter, "(MIT)) (");

        let parens: Vec<Style> = styles
            .iter()
            .filter(|(_, text)| text == "(" || text == ")")
            .map(|(style, _)| *style)
            .collect();
        assert_eq!(
            parens,
            vec![
                TokenClass::Paren.style(),
                TokenClass::Paren.style(),
                TokenClass::UnmatchedParen.style(),
                TokenClass::Paren.style(),
            ]
        );
    }
}
