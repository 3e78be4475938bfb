//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use algotrace_core::config::AppConfig;
use algotrace_core::error::Result;
use algotrace_core::frontier::FrontierKind;
use algotrace_core::store::GraphStore;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: AppConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: AppConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// A fresh store configured from the effective config, with an
    /// optional per-invocation frontier override
    pub fn store(&self, frontier: Option<FrontierKind>) -> GraphStore {
        GraphStore::new(
            self.config.weight_tolerance,
            frontier.unwrap_or(self.config.frontier),
        )
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("algotrace {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step-by-step traces of Dijkstra's and Prim's algorithms.");
        println!();
        println!("Run `algotrace --help` for usage information.");
        Ok(())
    }
}
