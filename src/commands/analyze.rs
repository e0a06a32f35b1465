//! `namesake analyze` command - judge names as band names
//!
//! Each name is looked up in the catalog, scored, and given spelling
//! variations and recommendations. Social handles are not checked, so every
//! platform counts as available.

use tracing::info;

use crate::cli::format::{output_by_format_result, print_json};
use crate::cli::AnalyzeArgs;
use crate::commands::check::install_interrupt_handler;
use crate::commands::dispatch::CommandContext;
use namesake_core::analysis::{analyze, NameAnalysis, PlatformAvailability};
use namesake_core::archives::MetalArchivesClient;
use namesake_core::batch::check_names;
use namesake_core::error::{NamesakeError, Result};
use namesake_core::report::read_noun_list;

/// Execute the analyze command
pub fn execute(ctx: &CommandContext, args: &AnalyzeArgs) -> Result<()> {
    let mut names = if args.names.is_empty() {
        read_noun_list(&ctx.resolve(&args.input))?
    } else {
        args.names.clone()
    };
    if let Some(limit) = args.limit {
        names.truncate(limit);
    }
    info!(names = names.len(), "analyzing names");

    let mut catalog = ctx.config.catalog.clone();
    if let Some(delay) = args.delay_ms {
        catalog.request_delay_ms = delay;
    }
    if let Some(url) = &args.catalog_url {
        catalog.search_url = url.clone();
    }

    let interrupted = install_interrupt_handler();
    let client = MetalArchivesClient::new(catalog.clone());
    let outcome = check_names(
        &names,
        &client,
        &catalog,
        &ctx.config.similarity,
        &interrupted,
        |_| Ok(()),
    )?;

    let analyses: Vec<NameAnalysis> = outcome
        .reports
        .into_iter()
        .map(|report| analyze(report, PlatformAvailability::new()))
        .collect();

    output_by_format_result!(ctx.cli.format,
        json => print_json(&analyses),
        human => {
            for (i, analysis) in analyses.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_human(analysis, ctx.cli.quiet);
            }
        }
    )?;

    if outcome.interrupted {
        return Err(NamesakeError::Interrupted);
    }
    Ok(())
}

fn print_human(analysis: &NameAnalysis, quiet: bool) {
    println!("{}: {}/100", analysis.name, analysis.viability_score);
    if quiet {
        return;
    }
    for m in &analysis.catalog.matches {
        println!("  {} ({}) {}", m.name, m.kind, m.reference);
    }
    println!("  variations: {}", analysis.variations.join(", "));
    for rec in &analysis.recommendations {
        println!("  - {}", rec);
    }
}
