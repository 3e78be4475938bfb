//! algotrace - step-by-step traces of graph algorithms
//!
//! Loads a graph file, traces Dijkstra's or Prim's algorithm over it,
//! and prints the trace or replays it in the terminal.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use algotrace_core::error::TraceError;
use algotrace_core::logging;
use cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return cli::parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&cli, &e),
    }
}

/// Print a command failure on stderr and pick the exit status
fn report(cli: &Cli, err: &TraceError) -> ExitCode {
    tracing::debug!(kind = err.error_type(), code = err.exit_code() as u8, "command_failed");
    if cli.format == OutputFormat::Json {
        eprintln!("{}", err.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", err);
    }
    ExitCode::from(err.exit_code() as u8)
}
