//! Proper-noun extraction
//!
//! Two interchangeable classifiers trade recall for precision:
//!
//! - [`PositionalStrategy`] keeps bare capitalized words seen at least twice
//!   and at least once away from a sentence start.
//! - [`SinglePassStrategy`] keeps every capitalized token whose cleaned form
//!   is not a common word, title-cased.
//!
//! Both finish with plural folding, so the resulting [`ProperNounSet`] never
//! holds a singular/plural pair.

pub mod plural;
pub mod stats;

use std::collections::BTreeSet;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::config::{ExtractionConfig, StrategyKind};
use crate::corpus::Corpus;
use crate::dictionary::Dictionary;
use crate::text::{clean_token, starts_uppercase, title_case};
use crate::trace_time;

pub use plural::{fold_plurals, is_plural, singular_form};
pub use stats::{WordStat, WordStats};

/// Sorted, duplicate-free, plural-folded proper nouns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProperNounSet {
    nouns: BTreeSet<String>,
}

impl ProperNounSet {
    /// Fold plurals out of a candidate set
    pub fn from_candidates(candidates: BTreeSet<String>) -> Self {
        ProperNounSet {
            nouns: fold_plurals(candidates),
        }
    }

    pub fn contains(&self, noun: &str) -> bool {
        self.nouns.contains(noun)
    }

    pub fn len(&self) -> usize {
        self.nouns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nouns.is_empty()
    }

    /// Nouns in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.nouns.iter().map(String::as_str)
    }

    pub fn into_sorted(self) -> Vec<String> {
        self.nouns.into_iter().collect()
    }
}

/// A proper-noun classifier over a whole corpus
pub trait ExtractionStrategy {
    /// Short name used in logs and output
    fn name(&self) -> &'static str;

    /// Every token the classifier accepts, before plural folding
    fn candidates(&self, corpus: &Corpus, dictionary: &dyn Dictionary) -> BTreeSet<String>;

    /// Accepted tokens with plurals folded
    fn classify(&self, corpus: &Corpus, dictionary: &dyn Dictionary) -> ProperNounSet {
        let start = Instant::now();
        let candidates = self.candidates(corpus, dictionary);
        let found = candidates.len();
        let nouns = ProperNounSet::from_candidates(candidates);
        debug!(
            strategy = self.name(),
            candidates = found,
            nouns = nouns.len(),
            "classify"
        );
        trace_time!(start, "classify");
        nouns
    }
}

/// Classifier driven by positional word statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalStrategy {
    pub min_total_count: u32,
    pub min_mid_count: u32,
    pub min_length: usize,
}

impl Default for PositionalStrategy {
    fn default() -> Self {
        PositionalStrategy::from_config(&ExtractionConfig::default())
    }
}

impl PositionalStrategy {
    pub fn from_config(config: &ExtractionConfig) -> Self {
        PositionalStrategy {
            min_total_count: config.min_total_count,
            min_mid_count: config.min_mid_count,
            min_length: config.min_length,
        }
    }

    /// Scan each corpus segment and merge the counts
    pub fn collect_stats(&self, corpus: &Corpus) -> WordStats {
        corpus
            .segments()
            .iter()
            .map(|segment| WordStats::collect(segment))
            .fold(WordStats::new(), WordStats::merge)
    }

    /// Apply the thresholds to already collected statistics
    pub fn select(&self, stats: &WordStats, dictionary: &dyn Dictionary) -> BTreeSet<String> {
        stats
            .iter()
            .filter(|(word, stat)| {
                stat.total_count >= self.min_total_count
                    && stat.mid_count >= self.min_mid_count
                    && word.chars().count() >= self.min_length
                    && !dictionary.contains(&word.to_lowercase())
            })
            .map(|(word, _)| word.to_string())
            .collect()
    }
}

impl ExtractionStrategy for PositionalStrategy {
    fn name(&self) -> &'static str {
        "positional"
    }

    fn candidates(&self, corpus: &Corpus, dictionary: &dyn Dictionary) -> BTreeSet<String> {
        let start = Instant::now();
        let stats = self.collect_stats(corpus);
        trace_time!(start, "collect_stats", words = stats.len());
        self.select(&stats, dictionary)
    }
}

/// Classifier that looks at each token in isolation
///
/// Survivors are title-cased, so tokens differing only in interior
/// capitalization merge ("McGill" and "MCGILL" both become "Mcgill").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinglePassStrategy;

impl SinglePassStrategy {
    /// Title-cased proper noun for one raw token, if it qualifies
    ///
    /// Both the raw token and its cleaned form must be longer than one
    /// character, so `I,` and `X!!` are rejected.
    pub fn accept(&self, raw: &str, dictionary: &dyn Dictionary) -> Option<String> {
        if !starts_uppercase(raw) || raw.chars().count() <= 1 {
            return None;
        }
        let cleaned = clean_token(raw);
        if cleaned.chars().count() <= 1 || dictionary.contains(&cleaned.to_lowercase()) {
            return None;
        }
        Some(title_case(&cleaned))
    }
}

impl ExtractionStrategy for SinglePassStrategy {
    fn name(&self) -> &'static str {
        "single-pass"
    }

    fn candidates(&self, corpus: &Corpus, dictionary: &dyn Dictionary) -> BTreeSet<String> {
        corpus
            .segments()
            .iter()
            .flat_map(|segment| segment.split_whitespace())
            .filter_map(|raw| self.accept(raw, dictionary))
            .collect()
    }
}

/// Build the configured classifier
pub fn strategy_for(config: &ExtractionConfig) -> Box<dyn ExtractionStrategy> {
    match config.strategy {
        StrategyKind::Positional => Box::new(PositionalStrategy::from_config(config)),
        StrategyKind::SinglePass => Box::new(SinglePassStrategy),
    }
}

/// Run the configured classifier over a corpus
pub fn extract_proper_nouns(
    corpus: &Corpus,
    dictionary: &dyn Dictionary,
    config: &ExtractionConfig,
) -> ProperNounSet {
    debug!(
        strategy = %config.strategy,
        segments = corpus.segments().len(),
        bytes = corpus.len_bytes(),
        "extract_proper_nouns"
    );
    strategy_for(config).classify(corpus, dictionary)
}
