//! Argument structs for namesake subcommands

use std::path::PathBuf;

use clap::Args;
use namesake_core::config::{SimilarityConfig, StrategyKind};

use super::parse::{parse_catalog_entry, parse_ngram_size, parse_strategy, parse_unit_interval};

/// Similarity threshold overrides shared by `similar` and `match`
#[derive(Args, Debug, Clone, Default)]
pub struct ThresholdArgs {
    /// Largest Damerau-Levenshtein distance considered similar
    #[arg(long)]
    pub max_distance: Option<usize>,

    /// Smallest Dice coefficient considered similar (0.0-1.0)
    #[arg(long, value_parser = parse_unit_interval)]
    pub min_dice: Option<f64>,

    /// N-gram size for the Dice coefficient
    #[arg(long, value_parser = parse_ngram_size)]
    pub ngram: Option<usize>,
}

impl ThresholdArgs {
    /// Overlay the flags that were given onto the configured thresholds
    pub fn apply(&self, base: &SimilarityConfig) -> SimilarityConfig {
        SimilarityConfig {
            max_distance: self.max_distance.unwrap_or(base.max_distance),
            min_dice: self.min_dice.unwrap_or(base.min_dice),
            ngram_size: self.ngram.unwrap_or(base.ngram_size),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Text files to read instead of the `*-chapters` folders under the root
    pub files: Vec<PathBuf>,

    /// Classifier: positional or single-pass
    #[arg(long, short, value_parser = parse_strategy)]
    pub strategy: Option<StrategyKind>,

    /// Local common-word list (one word per line); skips downloading
    #[arg(long, short)]
    pub dictionary: Option<PathBuf>,

    /// Do not download word lists; use the configured fallback file only
    #[arg(long)]
    pub no_download: bool,

    /// Noun list destination
    #[arg(long, short, default_value = "unique_proper_nouns.txt")]
    pub output: PathBuf,

    /// Title line written above the noun list
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct SimilarArgs {
    /// Name to compare against
    pub name: String,

    /// Candidate names
    #[arg(required = true)]
    pub candidates: Vec<String>,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,

    /// Show every candidate, not only the similar ones
    #[arg(long)]
    pub all: bool,
}

#[derive(Args, Debug, Clone)]
pub struct MatchArgs {
    /// Query name
    pub query: String,

    /// Catalog entries as NAME=REFERENCE
    #[arg(required = true, value_parser = parse_catalog_entry)]
    pub entries: Vec<(String, String)>,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Noun list produced by `extract`
    #[arg(long, short, default_value = "unique_proper_nouns.txt")]
    pub input: PathBuf,

    /// CSV destination
    #[arg(long, short, default_value = "metal_band_matches.csv")]
    pub output: PathBuf,

    /// Check at most this many names
    #[arg(long)]
    pub limit: Option<usize>,

    /// Pause between names in milliseconds (overrides config)
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Catalog search endpoint (overrides config)
    #[arg(long, env = "NAMESAKE_CATALOG_URL")]
    pub catalog_url: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Names to analyze; defaults to every name in the noun list
    pub names: Vec<String>,

    /// Noun list read when no names are given
    #[arg(long, short, default_value = "unique_proper_nouns.txt")]
    pub input: PathBuf,

    /// Analyze at most this many names
    #[arg(long)]
    pub limit: Option<usize>,

    /// Pause between names in milliseconds (overrides config)
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Catalog search endpoint (overrides config)
    #[arg(long, env = "NAMESAKE_CATALOG_URL")]
    pub catalog_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_overrides_keep_unset_fields() {
        let base = SimilarityConfig::default();
        let args = ThresholdArgs {
            max_distance: Some(1),
            ..Default::default()
        };
        let merged = args.apply(&base);
        assert_eq!(merged.max_distance, 1);
        assert_eq!(merged.min_dice, base.min_dice);
        assert_eq!(merged.ngram_size, base.ngram_size);
    }
}
