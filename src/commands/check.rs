//! `namesake check` command - look up every extracted noun in the catalog
//!
//! Progress is written to the CSV every `save_every` names. Ctrl-C stops the
//! run after the current name; the partial results are saved before exiting.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cli::format::{output_by_format_result, print_json};
use crate::cli::CheckArgs;
use crate::commands::dispatch::CommandContext;
use namesake_core::archives::MetalArchivesClient;
use namesake_core::batch::{check_names, BatchOutcome};
use namesake_core::error::{NamesakeError, Result};
use namesake_core::matcher::MatchKind;
use namesake_core::report::{read_noun_list, write_match_csv};

#[derive(Debug, Serialize)]
struct CheckSummary {
    checked: usize,
    total: usize,
    names_with_matches: usize,
    exact: usize,
    similar: usize,
    errors: usize,
    interrupted: bool,
    output: PathBuf,
    finished_at: DateTime<Utc>,
}

impl CheckSummary {
    fn new(outcome: &BatchOutcome, total: usize, output: PathBuf) -> Self {
        CheckSummary {
            checked: outcome.reports.len(),
            total,
            names_with_matches: outcome.reports.iter().filter(|r| r.exists()).count(),
            exact: outcome.count(MatchKind::Exact),
            similar: outcome.count(MatchKind::Similar),
            errors: outcome.errors(),
            interrupted: outcome.interrupted,
            output,
            finished_at: Utc::now(),
        }
    }
}

/// Raise the returned flag on Ctrl-C
pub(crate) fn install_interrupt_handler() -> Arc<AtomicBool> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);
    if let Err(e) = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    }) {
        warn!(error = %e, "failed to install interrupt handler");
    }
    interrupted
}

/// Execute the check command
pub fn execute(ctx: &CommandContext, args: &CheckArgs) -> Result<()> {
    let input = ctx.resolve(&args.input);
    let output = ctx.resolve(&args.output);

    let mut names = read_noun_list(&input)?;
    if let Some(limit) = args.limit {
        names.truncate(limit);
    }
    info!(names = names.len(), input = %input.display(), "loaded noun list");

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
        |reports| {
            debug!(checked = reports.len(), output = %output.display(), "saving progress");
            write_match_csv(&output, reports)
        },
    )?;
    write_match_csv(&output, &outcome.reports)?;
    debug!(elapsed = ?ctx.start.elapsed(), "check_names");

    let summary = CheckSummary::new(&outcome, names.len(), output);

    output_by_format_result!(ctx.cli.format,
        json => print_json(&summary),
        human => {
            if !ctx.cli.quiet {
                for report in outcome.reports.iter().filter(|r| r.exists()) {
                    let found: Vec<String> = report
                        .matches
                        .iter()
                        .map(|m| format!("{} ({})", m.name, m.kind))
                        .collect();
                    println!("{}: {}", report.name, found.join(", "));
                }
                for report in outcome.reports.iter() {
                    if let Some(error) = &report.error {
                        eprintln!("warning: {}: {}", report.name, error);
                    }
                }
            }
            println!(
                "Checked {} of {} names: {} with matches ({} exact, {} similar); saved to {}",
                summary.checked,
                summary.total,
                summary.names_with_matches,
                summary.exact,
                summary.similar,
                summary.output.display()
            );
        }
    )?;

    if summary.interrupted {
        return Err(NamesakeError::Interrupted);
    }
    Ok(())
}
