// Clippy configuration: enable pedantic but allow overly strict lints
#![allow(clippy::missing_errors_doc)] // Internal functions don't need # Errors docs
#![allow(clippy::missing_panics_doc)] // Internal functions don't need # Panics docs
#![allow(clippy::must_use_candidate)] // Not all getters need #[must_use]
#![allow(clippy::module_name_repetitions)] // e.g., NotifyError in notify crate is fine
#![allow(clippy::doc_markdown)] // Don't require backticks around D-Bus, macOS, etc.

//! notify - send a desktop notification from the command line
//!
//! Usage:
//!   notify <message> [title]      # title defaults to 通知
//!   notify --completions zsh      # print shell completions

mod app;
mod cli;
mod errors;
mod logging;
mod notify;

use clap::Parser;
use cli::{Cli, Context};
use color_eyre::Result;
use notify::DesktopNotifier;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        cli::print_completions(shell);
        return Ok(ExitCode::SUCCESS);
    }

    // Initialize error handling
    color_eyre::install()?;
    logging::init(&cli.log_level);

    tracing::debug!("Starting notify v{}", env!("CARGO_PKG_VERSION"));

    let notifier = DesktopNotifier::new(Context::from(&cli));
    let result = app::run(&cli, &notifier);
    app::finish(result, &cli::program_name(), &mut std::io::stdout()).map(ExitCode::from)
}
