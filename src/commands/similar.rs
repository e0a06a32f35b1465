//! `namesake similar` command - score candidate names against a query

use serde::Serialize;

use crate::cli::format::{output_by_format_result, print_json};
use crate::cli::SimilarArgs;
use crate::commands::dispatch::CommandContext;
use namesake_core::error::Result;
use namesake_core::similarity::{are_similar_with, levenshtein, SimilarityScore};

#[derive(Debug, Serialize)]
struct ScoredName<'a> {
    name: &'a str,
    distance: usize,
    levenshtein: usize,
    dice: f64,
    similar: bool,
}

#[derive(Debug, Serialize)]
struct SimilarOutput<'a> {
    query: &'a str,
    max_distance: usize,
    min_dice: f64,
    ngram_size: usize,
    results: Vec<ScoredName<'a>>,
}

/// Execute the similar command
pub fn execute(ctx: &CommandContext, args: &SimilarArgs) -> Result<()> {
    let thresholds = args.thresholds.apply(&ctx.config.similarity);

    let results: Vec<ScoredName> = args
        .candidates
        .iter()
        .map(|candidate| {
            let score = SimilarityScore::compute(&args.name, candidate, thresholds.ngram_size);
            ScoredName {
                name: candidate,
                distance: score.distance,
                levenshtein: levenshtein(&args.name.to_lowercase(), &candidate.to_lowercase()),
                dice: score.dice,
                similar: are_similar_with(&args.name, candidate, &thresholds),
            }
        })
        .filter(|scored| args.all || scored.similar)
        .collect();

    let out = SimilarOutput {
        query: &args.name,
        max_distance: thresholds.max_distance,
        min_dice: thresholds.min_dice,
        ngram_size: thresholds.ngram_size,
        results,
    };

    output_by_format_result!(ctx.cli.format,
        json => print_json(&out),
        human => {
            if out.results.is_empty() {
                if !ctx.cli.quiet {
                    println!("No names similar to {}", out.query);
                }
            } else {
                let width = out.results.iter().map(|r| r.name.len()).max().unwrap_or(0);
                for r in &out.results {
                    println!(
                        "{:<width$}  distance={} levenshtein={} dice={:.2}{}",
                        r.name,
                        r.distance,
                        r.levenshtein,
                        r.dice,
                        if r.similar { "  similar" } else { "" },
                        width = width
                    );
                }
            }
        }
    )
}
