//! CLI argument parsing for namesake
//!
//! Global flags: --root, --config, --format, --quiet, --verbose, --log-level,
//! --log-json

pub mod args;
pub mod format;
pub mod output;
pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{AnalyzeArgs, CheckArgs, ExtractArgs, MatchArgs, SimilarArgs};
pub use output::OutputFormat;

/// Namesake - mine proper nouns and check them as band names
#[derive(Parser, Debug)]
#[command(name = "namesake")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Working directory holding the chapter folders and reports
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit configuration file
    #[arg(long, global = true, env = "NAMESAKE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. info, debug, namesake_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract proper nouns from chapter folders or text files
    Extract(ExtractArgs),

    /// Score names against a query with edit distance and n-gram overlap
    Similar(SimilarArgs),

    /// Classify inline catalog entries against a query (offline)
    Match(MatchArgs),

    /// Check every extracted noun against the Metal Archives catalog
    Check(CheckArgs),

    /// Score names as band names: catalog matches, variations, advice
    Analyze(AnalyzeArgs),
}
