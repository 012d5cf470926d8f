//! spdx-complete
//!
//! Context-aware completion for SPDX license expressions, as one-shot
//! commands or an interactive shell.
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode
//! spdx-complete
//!
//! # One-shot suggestions
//! spdx-complete suggest "MIT OR Apa"
//! ```

use std::sync::Arc;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use spdx_complete::cli::CliInterface;
use spdx_complete::error::Result;
use spdx_complete::repl::ReplEngine;

/// Application entry point
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// This function orchestrates the application startup:
/// 1. Parse command-line arguments
/// 2. Load configuration
/// 3. Initialize logging
/// 4. Handle subcommands or start the interactive shell
///
/// # Returns
/// * `Result<()>` - Success or error
fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    if cli.handle_subcommand()? {
        return Ok(());
    }

    run_interactive_mode(&cli)
}

/// Run application in interactive shell mode
fn run_interactive_mode(cli: &CliInterface) -> Result<()> {
    let catalog = Arc::new(cli.load_catalog()?);
    debug!("Catalog loaded with {} entries", catalog.len());

    let config = cli.config();
    let mut repl = ReplEngine::new(
        catalog.clone(),
        config.suggestion_options(),
        &config.history,
        &config.display,
    )?;

    cli.print_banner(catalog.len());
    run_repl_loop(&mut repl)?;

    if !cli.args().quiet {
        println!("Goodbye!");
    }
    Ok(())
}

/// Main REPL loop
fn run_repl_loop(repl: &mut ReplEngine) -> Result<()> {
    while repl.is_running() {
        match repl.read_line()? {
            Some(line) => repl.process_input(&line),
            None => break,
        }
    }

    Ok(())
}

/// Initialize logging to stderr
///
/// `RUST_LOG` takes precedence; otherwise the configured level applies, after
/// `-v`, `--vv` and `-q` have been folded into it.
///
/// # Arguments
/// * `cli` - CLI interface with the effective configuration
fn initialize_logging(cli: &CliInterface) {
    let logging = &cli.config().logging;
    let level = logging.level.to_tracing_level().as_str().to_lowercase();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // Ignore the error if a subscriber is already set
    if logging.timestamps {
        let _ = subscriber.try_init();
    } else {
        let _ = subscriber.without_time().try_init();
    }
}
