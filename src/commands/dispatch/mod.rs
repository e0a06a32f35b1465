//! Command dispatch logic for namesake

use std::time::Instant;

use crate::cli::paths::resolve_root_path;
use crate::cli::Cli;
use namesake_core::config::NamesakeConfig;
use namesake_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path(cli.root.clone());

    debug!(elapsed = ?start.elapsed(), "resolve_root");

    let config = NamesakeConfig::discover(&root, cli.config.as_deref())?;
    config.validate()?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, &root, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
