//! Command-line interface for spdx-complete
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and validation
//! - Catalog selection
//! - One-shot subcommands (suggest, tokenize, catalog, completion, config)

mod completion;

pub use completion::generate_completion;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::completion::CompletionEngine;
use crate::config::{Config, LogLevel, OutputFormat};
use crate::error::Result;
use crate::formatter::Formatter;
use crate::parser::tokenize;

/// SPDX license expression completion shell
#[derive(Parser, Debug)]
#[command(
    name = "spdx-complete",
    version,
    about = "Context-aware completion for SPDX license expressions",
    long_about = "Tokenizes SPDX license expressions and suggests the licenses or operators
that may come next. Run without a command to start the interactive shell."
)]
pub struct CliArgs {
    /// License catalog file (.json or .toml)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Output format (plain, json, json-pretty, table)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Maximum number of suggestions
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Quiet mode (minimal output)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for spdx-complete
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggest what may follow an expression
    ///
    /// Trailing whitespace is significant: "MIT" completes the term,
    /// "MIT " asks for an operator.
    Suggest {
        /// Expression typed so far
        #[arg(value_name = "EXPR", allow_hyphen_values = true)]
        expression: String,
    },

    /// Print the tokens of an expression with byte spans
    Tokenize {
        /// Expression to tokenize
        #[arg(value_name = "EXPR", allow_hyphen_values = true)]
        expression: String,
    },

    /// List catalog entries
    Catalog {
        /// Only entries whose key or name contains this text
        #[arg(long, value_name = "TEXT")]
        filter: Option<String>,

        /// Print license keys only, one per line
        #[arg(long)]
        keys: bool,
    },

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface from the process arguments
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Create a CLI interface from already parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Self::load_config(&args)?;
        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    fn load_config(args: &CliArgs) -> Result<Config> {
        let config_path = args.config_file.as_deref();
        let mut config = Config::load_from_file(config_path)?;

        // Logging is not up yet, so warnings go straight to stderr
        if let Err(e) = config.validate() {
            eprintln!("Warning: Configuration validation failed: {}", e);
            eprintln!("Using default configuration instead.");
            config = Config::default();
        }

        Self::apply_args_to_config(&mut config, args);

        Ok(config)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Apply CLI arguments to configuration
    ///
    /// Overrides configuration values with CLI arguments where provided
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        Self::apply_display_args(config, args);
        Self::apply_logging_args(config, args);
        Self::apply_completion_args(config, args);
    }

    /// Apply display-related CLI arguments to configuration
    fn apply_display_args(config: &mut Config, args: &CliArgs) {
        if let Some(format_str) = &args.format {
            config.display.format = Self::parse_output_format(format_str, config.display.format);
        }

        if args.no_color {
            config.display.color_output = false;
        }
    }

    /// Apply logging-related CLI arguments to configuration
    fn apply_logging_args(config: &mut Config, args: &CliArgs) {
        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Apply catalog and suggestion CLI arguments to configuration
    fn apply_completion_args(config: &mut Config, args: &CliArgs) {
        if let Some(path) = &args.catalog {
            config.catalog.path = Some(path.clone());
        }

        if let Some(limit) = args.limit {
            config.completion.max_suggestions = usize::try_from(limit).unwrap_or(usize::MAX);
        }
    }

    /// Parse output format string, keeping `fallback` for unknown names
    fn parse_output_format(format_str: &str, fallback: OutputFormat) -> OutputFormat {
        OutputFormat::parse(format_str).unwrap_or_else(|| {
            eprintln!("Warning: Unknown format '{}', using default", format_str);
            fallback
        })
    }

    /// Load the configured catalog, or the built-in one
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.config.catalog.path {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Build a completion engine over the configured catalog
    pub fn build_engine(&self) -> Result<CompletionEngine> {
        let catalog = self.load_catalog()?;
        Ok(CompletionEngine::new(Arc::new(catalog)).with_options(self.config.suggestion_options()))
    }

    fn formatter(&self) -> Formatter {
        Formatter::from_config(&self.config.display)
    }

    /// Handle subcommands
    ///
    /// # Returns
    /// * `Result<bool>` - True if subcommand was handled, false to continue
    pub fn handle_subcommand(&self) -> Result<bool> {
        let Some(command) = &self.args.command else {
            return Ok(false);
        };

        match command {
            Commands::Completion { shell } => generate_completion(shell)?,
            Commands::Config { show, validate } => self.handle_config_command(*show, *validate)?,
            other => println!("{}", self.render(other)?),
        }

        Ok(true)
    }

    /// Render the output of a one-shot command
    fn render(&self, command: &Commands) -> Result<String> {
        let formatter = self.formatter();
        match command {
            Commands::Suggest { expression } => {
                let engine = self.build_engine()?;
                formatter.format_licenses(&engine.suggest(expression))
            }
            Commands::Tokenize { expression } => formatter.format_tokens(&tokenize(expression)),
            Commands::Catalog { filter, keys } => {
                let catalog = self.load_catalog()?;
                let entries: Vec<_> = match filter {
                    Some(text) => catalog.search(text).into_iter().cloned().collect(),
                    None => catalog.entries().to_vec(),
                };

                if *keys {
                    Ok(entries
                        .iter()
                        .map(|entry| entry.key.as_str())
                        .collect::<Vec<_>>()
                        .join("\n"))
                } else {
                    formatter.format_licenses(&entries)
                }
            }
            Commands::Completion { .. } | Commands::Config { .. } => Ok(String::new()),
        }
    }

    /// Handle config subcommand
    ///
    /// # Arguments
    /// * `show` - Whether to show configuration
    /// * `validate` - Whether to validate configuration
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file();
        }

        if show || !validate {
            self.show_config()?;
        }

        Ok(())
    }

    /// Validate configuration file
    fn validate_config_file(&self) {
        let path = self.get_config_path();
        println!("Validating configuration file: {}", path.display());

        if !path.exists() {
            println!("Configuration file does not exist, defaults apply");
            return;
        }

        match Config::from_file(&path) {
            Ok(config) => match config.validate() {
                Ok(()) => println!("Configuration is valid"),
                Err(e) => println!("Configuration validation failed: {}", e),
            },
            Err(e) => println!("Failed to load configuration: {}", e),
        }
    }

    /// Show effective configuration
    fn show_config(&self) -> Result<()> {
        println!("Configuration file: {}", self.get_config_path().display());
        println!();
        println!("{}", self.config.to_toml()?);
        Ok(())
    }

    /// Get configuration file path (from args or default)
    fn get_config_path(&self) -> PathBuf {
        self.args
            .config_file
            .clone()
            .unwrap_or_else(Config::default_path)
    }

    /// Print banner with version and catalog size
    pub fn print_banner(&self, catalog_size: usize) {
        if !self.args.quiet {
            println!(
                "spdx-complete {} ({} catalog entries). Type 'help' for commands.",
                crate::VERSION,
                catalog_size
            );
        }
    }
}
