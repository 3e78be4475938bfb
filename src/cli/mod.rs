//! CLI argument parsing for algotrace
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config-dir

pub mod args;
pub mod format;
pub mod parse;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

pub use args::{ConfigCommands, GenerateArgs, PlayArgs, RunArgs, TraceArgs, ValidateArgs};
pub use algotrace_core::format::OutputFormat;
use algotrace_core::error::TraceError;
use parse::parse_format;

/// algotrace - step-by-step traces of Dijkstra and Prim
#[derive(Parser, Debug)]
#[command(name = "algotrace")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Directory holding config.toml
    #[arg(long, global = true, env = "ALGOTRACE_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a graph file and report what would be registered
    Validate(ValidateArgs),

    /// Print the step trace of an algorithm run
    Trace(TraceArgs),

    /// Replay a trace step by step in the terminal
    Play(PlayArgs),

    /// Write the lecture graph or a random connected graph
    Generate(GenerateArgs),

    /// Show or initialize the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Whether the raw arguments ask for JSON output. Consulted only when clap
/// rejected them, so `Cli::format` is not available.
fn json_requested<I: IntoIterator<Item = String>>(args: I) -> bool {
    let args: Vec<String> = args.into_iter().collect();
    args.iter().any(|a| a == "--format=json")
        || args.windows(2).any(|w| w[0] == "--format" && w[1] == "json")
}

/// First line of clap's message without its `error: ` prefix
fn one_line(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

/// Report arguments clap rejected.
///
/// Help and version requests, and every failure when JSON was not asked
/// for, go through clap's own printer. JSON callers get a usage-error
/// envelope with a one-line message.
pub fn parse_failure(err: clap::Error) -> ExitCode {
    let displays_text = matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
    if displays_text || !json_requested(std::env::args().skip(1)) {
        err.exit();
    }
    let error = TraceError::UsageError(one_line(&err));
    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}
