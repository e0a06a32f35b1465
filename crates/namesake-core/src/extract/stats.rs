//! Positional word statistics
//!
//! For every bare capitalized word (see [`is_bare_capitalized`]) count how
//! often it opens a sentence and how often it appears further in.

use std::collections::hash_map::{self, HashMap};

use serde::Serialize;

use crate::text::{is_bare_capitalized, sentence_tokens};

/// Sighting counts for one capitalized word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WordStat {
    /// Times the word was the first token of a sentence
    pub start_count: u32,
    /// Times the word appeared after the first token
    pub mid_count: u32,
    /// All sightings; always `start_count + mid_count`
    pub total_count: u32,
}

impl WordStat {
    fn record(&mut self, sentence_initial: bool) {
        self.total_count += 1;
        if sentence_initial {
            self.start_count += 1;
        } else {
            self.mid_count += 1;
        }
    }

    fn absorb(&mut self, other: &WordStat) {
        self.start_count += other.start_count;
        self.mid_count += other.mid_count;
        self.total_count += other.total_count;
    }
}

/// Accumulated statistics keyed by the word as written
///
/// Counts only ever grow. Merging two accumulators sums per word, so a
/// corpus can be scanned in any partition and combined in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStats {
    words: HashMap<String, WordStat>,
}

impl WordStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan one text and return its statistics
    pub fn collect(text: &str) -> Self {
        let mut stats = Self::new();
        stats.observe(text);
        stats
    }

    /// Add every qualifying token of `text` to the counts
    pub fn observe(&mut self, text: &str) {
        for token in sentence_tokens(text) {
            if !is_bare_capitalized(token.raw) {
                continue;
            }
            match self.words.get_mut(token.raw) {
                Some(stat) => stat.record(token.sentence_initial),
                None => {
                    let mut stat = WordStat::default();
                    stat.record(token.sentence_initial);
                    self.words.insert(token.raw.to_string(), stat);
                }
            }
        }
    }

    /// Fold another accumulator into this one
    pub fn merge(mut self, other: WordStats) -> Self {
        for (word, stat) in other.words {
            match self.words.entry(word) {
                hash_map::Entry::Occupied(mut entry) => entry.get_mut().absorb(&stat),
                hash_map::Entry::Vacant(entry) => {
                    entry.insert(stat);
                }
            }
        }
        self
    }

    pub fn get(&self, word: &str) -> Option<&WordStat> {
        self.words.get(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordStat)> {
        self.words.iter().map(|(word, stat)| (word.as_str(), stat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_start_and_mid_positions() {
        let stats = WordStats::collect("Frodo went to Mordor. Frodo saw Mordor again.");

        let frodo = stats.get("Frodo").unwrap();
        assert_eq!(
            *frodo,
            WordStat {
                start_count: 2,
                mid_count: 0,
                total_count: 2
            }
        );

        let mordor = stats.get("Mordor").unwrap();
        assert_eq!(mordor.start_count, 0);
        assert_eq!(mordor.mid_count, 2);
        assert_eq!(mordor.total_count, 2);

        assert_eq!(stats.len(), 2);
    }

    #[test]
    fn test_ignores_tokens_with_punctuation_or_lowercase() {
        let stats = WordStats::collect("He said, \"Gandalf, wait\" and Sam's pack fell; R2D2 beeped");
        assert!(stats.get("He").is_some());
        assert!(stats.get("Gandalf").is_none());
        assert!(stats.get("\"Gandalf,").is_none());
        assert!(stats.get("Sam's").is_none());
        assert!(stats.get("R2D2").is_none());
        assert!(stats.get("said").is_none());
    }

    #[test]
    fn test_case_is_preserved_in_keys() {
        let stats = WordStats::collect("The ring. the ring. THE end.");
        assert!(stats.get("The").is_some());
        assert!(stats.get("THE").is_some());
        assert!(stats.get("the").is_none());
    }

    #[test]
    fn test_empty_corpus() {
        assert!(WordStats::collect("").is_empty());
        assert!(WordStats::collect("... ?! ").is_empty());
    }

    #[test]
    fn test_merge_matches_single_scan() {
        let first = "Frodo went to Mordor.";
        let second = "Then Frodo saw Mordor again.";

        let whole = WordStats::collect(&format!("{first} {second}"));
        let merged = WordStats::collect(first).merge(WordStats::collect(second));
        let reversed = WordStats::collect(second).merge(WordStats::collect(first));

        assert_eq!(whole, merged);
        assert_eq!(merged, reversed);
    }
}
