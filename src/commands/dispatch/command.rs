//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::paths::resolve_under;
use crate::cli::Cli;
use namesake_core::config::NamesakeConfig;
use namesake_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub config: NamesakeConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, config: NamesakeConfig, start: Instant) -> Self {
        Self {
            cli,
            root,
            config,
            start,
        }
    }

    /// Anchor a relative path at the working root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        resolve_under(self.root, path)
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
        println!("namesake {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Mine proper nouns from narrative text and check them as band names.");
        println!();
        println!("Run `namesake --help` for usage information.");
        Ok(())
    }
}
