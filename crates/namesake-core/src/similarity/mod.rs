//! Similarity engine for deciding whether two names denote the same entity
//!
//! Three independent scores plus one composite predicate. The scoring
//! functions are case-sensitive and operate on Unicode scalar values;
//! [`are_similar`] lowercases both inputs before scoring.

mod distance;
mod ngram;

pub use distance::{damerau_levenshtein, levenshtein};
pub use ngram::{dice_coefficient, ngrams};

use serde::Serialize;

use crate::config::SimilarityConfig;

/// Largest edit distance [`are_similar`] accepts by default
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Smallest Dice coefficient [`are_similar`] accepts by default
pub const DEFAULT_MIN_DICE: f64 = 0.7;

/// Default n-gram size for the Dice coefficient
pub const DEFAULT_NGRAM_SIZE: usize = 2;

/// Edit distance and n-gram overlap for a pair of names
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityScore {
    /// Damerau-Levenshtein distance between the lowercased names
    pub distance: usize,
    /// Dice coefficient between the lowercased names, in `[0, 1]`
    pub dice: f64,
}

impl SimilarityScore {
    /// Score two names after lowercasing them
    pub fn compute(a: &str, b: &str, ngram_size: usize) -> Self {
        let a = a.to_lowercase();
        let b = b.to_lowercase();
        SimilarityScore {
            distance: damerau_levenshtein(&a, &b),
            dice: dice_coefficient(&a, &b, ngram_size),
        }
    }
}

/// Decide whether two names are similar
///
/// Both names are lowercased. Pairs whose lengths differ by more than
/// `max_distance` are rejected without scoring. Otherwise the pair is
/// similar when the Damerau-Levenshtein distance is at most `max_distance`
/// or the bigram Dice coefficient is at least `min_dice`.
pub fn are_similar(a: &str, b: &str, max_distance: usize, min_dice: f64) -> bool {
    are_similar_ngram(a, b, max_distance, min_dice, DEFAULT_NGRAM_SIZE)
}

/// [`are_similar`] with thresholds and n-gram size taken from configuration
pub fn are_similar_with(a: &str, b: &str, config: &SimilarityConfig) -> bool {
    are_similar_ngram(a, b, config.max_distance, config.min_dice, config.ngram_size)
}

fn are_similar_ngram(
    a: &str,
    b: &str,
    max_distance: usize,
    min_dice: f64,
    ngram_size: usize,
) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a.abs_diff(len_b) > max_distance {
        return false;
    }

    if damerau_levenshtein(&a, &b) <= max_distance {
        return true;
    }

    dice_coefficient(&a, &b, ngram_size) >= min_dice
}

/// Keep the names similar to `query`, in their original order
pub fn find_similar_names<'a, S: AsRef<str>>(
    query: &str,
    names: &'a [S],
    config: &SimilarityConfig,
) -> Vec<&'a str> {
    names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| are_similar_with(query, name, config))
        .collect()
}
