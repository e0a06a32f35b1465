//! `namesake match` command - classify inline catalog entries

use serde::Serialize;

use crate::cli::format::{output_by_format_result, print_json};
use crate::cli::MatchArgs;
use crate::commands::dispatch::CommandContext;
use namesake_core::error::Result;
use namesake_core::matcher::{match_candidates, CatalogEntry, MatchCandidate};

#[derive(Debug, Serialize)]
struct MatchOutput<'a> {
    query: &'a str,
    matches: Vec<MatchCandidate>,
}

/// Execute the match command
pub fn execute(ctx: &CommandContext, args: &MatchArgs) -> Result<()> {
    let thresholds = args.thresholds.apply(&ctx.config.similarity);
    let entries: Vec<CatalogEntry> = args
        .entries
        .iter()
        .map(|(name, reference)| CatalogEntry::new(name.as_str(), reference.as_str()))
        .collect();

    let out = MatchOutput {
        query: &args.query,
        matches: match_candidates(&args.query, &entries, &thresholds),
    };

    output_by_format_result!(ctx.cli.format,
        json => print_json(&out),
        human => {
            if out.matches.is_empty() {
                if !ctx.cli.quiet {
                    println!("No matches for {}", out.query);
                }
            } else {
                for m in &out.matches {
                    println!("{:<8} {}  {}", m.kind.to_string(), m.name, m.reference);
                }
            }
        }
    )
}
