//! Command implementations for all namesake commands

use tracing::debug;

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{analyze, check, extract, matches, similar};
use namesake_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Extract(args) => extract::execute(ctx, args),
            Commands::Similar(args) => similar::execute(ctx, args),
            Commands::Match(args) => matches::execute(ctx, args),
            Commands::Check(args) => check::execute(ctx, args),
            Commands::Analyze(args) => analyze::execute(ctx, args),
        };
        debug!(elapsed = ?ctx.start.elapsed(), ok = result.is_ok(), "command_done");
        result
    }
}
