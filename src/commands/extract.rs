//! `namesake extract` command - mine proper nouns from a corpus

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cli::format::{output_by_format_result, print_json};
use crate::cli::ExtractArgs;
use crate::commands::dispatch::CommandContext;
use namesake_core::config::StrategyKind;
use namesake_core::corpus::Corpus;
use namesake_core::dictionary::{self, WordList};
use namesake_core::error::Result;
use namesake_core::extract::extract_proper_nouns;
use namesake_core::report::{write_noun_list, NOUN_LIST_TITLE};

#[derive(Debug, Serialize)]
struct ExtractSummary {
    strategy: StrategyKind,
    count: usize,
    output: PathBuf,
    nouns: Vec<String>,
}

/// Execute the extract command
pub fn execute(ctx: &CommandContext, args: &ExtractArgs) -> Result<()> {
    let mut extraction = ctx.config.extraction.clone();
    if let Some(strategy) = args.strategy {
        extraction.strategy = strategy;
    }

    let corpus = if args.files.is_empty() {
        Corpus::load_chapter_folders(ctx.root)?
    } else {
        Corpus::load_files(&args.files)?
    };
    if corpus.is_empty() {
        warn!(root = %ctx.root.display(), "no chapter folders found; the noun list will be empty");
    }
    debug!(elapsed = ?ctx.start.elapsed(), bytes = corpus.len_bytes(), "load_corpus");

    let words = load_dictionary(ctx, args)?;
    debug!(elapsed = ?ctx.start.elapsed(), words = words.len(), "load_dictionary");

    let nouns = extract_proper_nouns(&corpus, &words, &extraction);
    let output = ctx.resolve(&args.output);
    let title = args.title.as_deref().unwrap_or(NOUN_LIST_TITLE);
    write_noun_list(&output, &nouns, title)?;
    info!(count = nouns.len(), output = %output.display(), "noun list written");

    let summary = ExtractSummary {
        strategy: extraction.strategy,
        count: nouns.len(),
        output,
        nouns: nouns.into_sorted(),
    };

    output_by_format_result!(ctx.cli.format,
        json => print_json(&summary),
        human => {
            if !ctx.cli.quiet {
                for noun in &summary.nouns {
                    println!("{}", noun);
                }
                println!();
            }
            println!(
                "Found {} proper nouns ({}); saved to {}",
                summary.count,
                summary.strategy,
                summary.output.display()
            );
        }
    )
}

fn load_dictionary(ctx: &CommandContext, args: &ExtractArgs) -> Result<WordList> {
    if let Some(path) = &args.dictionary {
        return WordList::from_path(path);
    }
    if args.no_download {
        let fallback = ctx.resolve(Path::new(&ctx.config.dictionary.fallback_file));
        Ok(dictionary::load_local(&fallback))
    } else {
        Ok(dictionary::load(&ctx.config.dictionary, ctx.root))
    }
}
