//! Custom prompt implementation for the license shell

use std::borrow::Cow;

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

/// Prompt for the license shell
pub struct LicensePrompt {
    /// Text before the `> ` marker
    label: String,
}

impl LicensePrompt {
    /// Create a new prompt
    ///
    /// # Arguments
    /// * `label` - Text shown before `> `
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Default for LicensePrompt {
    fn default() -> Self {
        Self::new("spdx")
    }
}

impl Prompt for LicensePrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        format!("{}> ", self.label).into()
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        "".into()
    }

    /// The `> ` marker is part of the left prompt
    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        "".into()
    }

    /// Shown while parentheses are still open
    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        format!("({}reverse-search: {}) ", prefix, history_search.term).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompt() {
        let prompt = LicensePrompt::default();
        assert_eq!(prompt.render_prompt_left(), "spdx> ");
    }

    #[test]
    fn test_custom_label() {
        let prompt = LicensePrompt::new("licenses");
        assert_eq!(prompt.render_prompt_left(), "licenses> ");
    }

    #[test]
    fn test_right_prompt_and_indicator_empty() {
        let prompt = LicensePrompt::default();
        assert_eq!(prompt.render_prompt_right(), "");
        assert_eq!(prompt.render_prompt_indicator(PromptEditMode::Default), "");
    }

    #[test]
    fn test_multiline_indicator() {
        let prompt = LicensePrompt::default();
        assert_eq!(prompt.render_prompt_multiline_indicator(), "... ");
    }
}
