//! Subcommand routing

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use algotrace_core::error::Result;
use tracing::debug;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Validate(args) => commands::validate::execute(ctx, args),
            Commands::Trace(args) => commands::trace::execute(ctx, args),
            Commands::Play(args) => commands::play::execute(ctx, args),
            Commands::Generate(args) => commands::generate::execute(ctx, args),
            Commands::Config { command } => commands::config::execute(ctx, command),
        };
        debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}
