use std::sync::Arc;

use reedline::{
    ColumnarMenu, Emacs, FileBackedHistory, KeyCode, KeyModifiers, MenuBuilder, Reedline,
    ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};
use tracing::debug;

use crate::catalog::Catalog;
use crate::completion::{CompletionEngine, SuggestionOptions};
use crate::config::{DisplayConfig, HistoryConfig};
use crate::error::{LicenseShellError, Result};
use crate::formatter::Formatter;

use super::command::{ReplCommand, ReplSession};
use super::completer::LicenseCompleter;
use super::highlighter::LicenseHighlighter;
use super::hinter::LicenseHinter;
use super::prompt::LicensePrompt;
use super::validator::LicenseValidator;

const COMPLETION_MENU: &str = "completion_menu";

/// REPL engine for interactive expression editing
pub struct ReplEngine {
    /// Line editor for input
    editor: Reedline,

    /// Prompt rendered before each line
    prompt: LicensePrompt,

    /// Command interpreter
    session: ReplSession,

    /// Whether to continue running
    running: bool,
}

impl ReplEngine {
    /// Create a new REPL engine
    ///
    /// # Arguments
    /// * `catalog` - Catalog for completion and highlighting
    /// * `options` - Suggestion limit and ordering
    /// * `history_config` - History configuration
    /// * `display` - Display configuration
    ///
    /// # Returns
    /// * `Result<Self>` - New REPL engine or error
    pub fn new(
        catalog: Arc<Catalog>,
        options: SuggestionOptions,
        history_config: &HistoryConfig,
        display: &DisplayConfig,
    ) -> Result<Self> {
        let engine = || CompletionEngine::new(catalog.clone()).with_options(options);

        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );
        let completion_menu = ColumnarMenu::default().with_name(COMPLETION_MENU);

        let mut editor = Reedline::create()
            .with_completer(Box::new(LicenseCompleter::new(engine())))
            .with_menu(ReedlineMenu::EngineCompleter(Box::new(completion_menu)))
            .with_edit_mode(Box::new(Emacs::new(keybindings)))
            .with_highlighter(Box::new(LicenseHighlighter::new(
                catalog.clone(),
                display.syntax_highlighting && display.color_output,
            )))
            .with_hinter(Box::new(LicenseHinter::new(engine())))
            .with_validator(Box::new(LicenseValidator::new()));

        if history_config.persist {
            let history = FileBackedHistory::with_file(
                history_config.max_size,
                history_config.file_path.clone(),
            )
            .map_err(|e| LicenseShellError::Generic(format!("History error: {}", e)))?;
            debug!("History file: {}", history_config.file_path.display());
            editor = editor.with_history(Box::new(history));
        }

        Ok(Self {
            editor,
            prompt: LicensePrompt::default(),
            session: ReplSession::new(engine(), catalog.clone(), Formatter::from_config(display)),
            running: true,
        })
    }

    /// Read a single line of input
    ///
    /// # Returns
    /// * `Result<Option<String>>` - Input line, empty on Ctrl-C, `None` on Ctrl-D
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.read_line(&self.prompt) {
            Ok(Signal::Success(line)) => Ok(Some(line)),
            Ok(Signal::CtrlD) => Ok(None),
            // Ctrl-C drops the current line only
            Ok(_) => Ok(Some(String::new())),
            Err(err) => Err(LicenseShellError::Generic(format!("Read error: {}", err))),
        }
    }

    /// Interpret and run one line, printing its output
    pub fn process_input(&mut self, input: &str) {
        let command = ReplCommand::parse(input);
        if command == ReplCommand::Exit {
            self.running = false;
            return;
        }

        match self.session.execute(&command) {
            Ok(Some(output)) => println!("{}", output),
            Ok(None) => {}
            Err(e) => eprintln!("{}", self.session.formatter().format_error(&e.to_string())),
        }
    }

    /// Check if REPL is still running
    pub fn is_running(&self) -> bool {
        self.running
    }
}
