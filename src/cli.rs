//! CLI argument parsing and runtime context
//!
//! Uses clap for argument parsing with derive macros.
//! Provides a Context struct for the presentation settings handed to the notifier.

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::ffi::OsStr;
use std::io;
use std::path::Path;

/// Program name used in the usage line when argv[0] is unavailable
const DEFAULT_PROGRAM_NAME: &str = "notify";

/// Send a desktop notification from the command line
#[derive(Parser, Debug)]
#[command(name = "notify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Notification message, then an optional title (default: 通知)
    ///
    /// Options are only recognised before the message; everything from the
    /// message on is taken verbatim, and words after the title are ignored.
    #[arg(
        value_name = "MESSAGE [TITLE]",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "NOTIFY_LOG", default_value = "warn")]
    pub log_level: String,

    /// Application name reported to the notification server
    #[arg(long, env = "NOTIFY_APP_NAME", default_value = DEFAULT_PROGRAM_NAME)]
    pub app_name: String,

    /// Icon name or path shown alongside the notification
    #[arg(long, env = "NOTIFY_ICON")]
    pub icon: Option<String>,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// First positional: the notification body
    pub fn message(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Second positional: the notification title, if given
    pub fn title(&self) -> Option<&str> {
        self.args.get(1).map(String::as_str)
    }

    /// Positionals after the title
    pub fn extra(&self) -> &[String] {
        self.args.get(2..).unwrap_or_default()
    }
}

/// Generate shell completions and print to stdout
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, DEFAULT_PROGRAM_NAME, &mut io::stdout());
}

/// Name the binary was invoked as, for the usage line
pub fn program_name() -> String {
    program_name_from(std::env::args_os().next().as_deref())
}

/// File stem of `arg0`, or the default name when it is missing or empty
pub fn program_name_from(arg0: Option<&OsStr>) -> String {
    arg0.and_then(|arg0| Path::new(arg0).file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

/// Usage line printed to stdout when the message is missing
pub fn usage(program: &str) -> String {
    format!("使い方: {program} <通知メッセージ> [タイトル]")
}

/// Presentation settings derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Application name shown by the notification server
    pub app_name: String,
    /// Optional icon name or path
    pub icon: Option<String>,
}

impl From<&Cli> for Context {
    fn from(cli: &Cli) -> Self {
        Self {
            app_name: cli.app_name.clone(),
            icon: cli.icon.clone(),
        }
    }
}
