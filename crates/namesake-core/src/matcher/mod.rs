//! Candidate matcher
//!
//! Classifies catalog entries against a query name: `exact` when the names
//! are equal ignoring case and surrounding whitespace, `similar` when the
//! similarity engine accepts the pair, otherwise unrelated and dropped.

mod catalog;

pub use catalog::{check_catalog, CatalogPage, CatalogReport, CatalogSearch};

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::config::SimilarityConfig;
use crate::similarity::are_similar_with;

/// How a catalog name relates to the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Similar,
    Unrelated,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Exact => write!(f, "exact"),
            MatchKind::Similar => write!(f, "similar"),
            MatchKind::Unrelated => write!(f, "unrelated"),
        }
    }
}

/// One catalog hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Display name with markup removed
    pub name: String,
    /// Identifying reference, such as the entry URL
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, reference: impl Into<String>) -> Self {
        CatalogEntry {
            name: name.into(),
            reference: reference.into(),
            genre: None,
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }
}

/// A catalog entry classified against a query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCandidate {
    pub query: String,
    pub name: String,
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(rename = "match_type")]
    pub kind: MatchKind,
}

impl MatchCandidate {
    fn new(query: &str, entry: &CatalogEntry, kind: MatchKind) -> Self {
        MatchCandidate {
            query: query.to_string(),
            name: entry.name.clone(),
            reference: entry.reference.clone(),
            genre: entry.genre.clone(),
            kind,
        }
    }
}

/// Exact when equal ignoring case and surrounding whitespace
pub fn is_exact(query: &str, name: &str) -> bool {
    query.trim().to_lowercase() == name.trim().to_lowercase()
}

/// Classify one catalog name against the query
pub fn classify(query: &str, name: &str, thresholds: &SimilarityConfig) -> MatchKind {
    if is_exact(query, name) {
        MatchKind::Exact
    } else if are_similar_with(query, name, thresholds) {
        MatchKind::Similar
    } else {
        MatchKind::Unrelated
    }
}

/// Classify entries, dropping unrelated ones
///
/// Exact matches come first, then similar ones, each in input order. An entry
/// whose reference was already classified is skipped, so no reference is
/// reported twice.
pub fn match_candidates(
    query: &str,
    entries: &[CatalogEntry],
    thresholds: &SimilarityConfig,
) -> Vec<MatchCandidate> {
    let mut seen = HashSet::new();
    let mut exact = Vec::new();
    let mut similar = Vec::new();

    for entry in entries {
        if !seen.insert(entry.reference.as_str()) {
            continue;
        }
        match classify(query, &entry.name, thresholds) {
            MatchKind::Exact => exact.push(MatchCandidate::new(query, entry, MatchKind::Exact)),
            MatchKind::Similar => {
                similar.push(MatchCandidate::new(query, entry, MatchKind::Similar))
            }
            MatchKind::Unrelated => {}
        }
    }

    exact.extend(similar);
    exact
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(entries: &[(&str, &str)]) -> Vec<CatalogEntry> {
        entries
            .iter()
            .map(|(name, reference)| CatalogEntry::new(*name, *reference))
            .collect()
    }

    #[test]
    fn test_sauron_exact_similar_unrelated() {
        let entries = catalog(&[("Sauron", "u1"), ("Sawron", "u2"), ("Unrelated", "u3")]);
        let matches = match_candidates("Sauron", &entries, &SimilarityConfig::default());

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].reference, "u1");
        assert_eq!(matches[0].kind, MatchKind::Exact);
        assert_eq!(matches[1].reference, "u2");
        assert_eq!(matches[1].kind, MatchKind::Similar);
        assert!(matches.iter().all(|m| m.reference != "u3"));
    }

    #[test]
    fn test_exact_ignores_case_and_whitespace() {
        assert!(is_exact("Sauron", "  sAURON "));
        assert!(!is_exact("Sauron", "Sauron's Eye"));
    }

    #[test]
    fn test_buckets_keep_input_order() {
        let entries = catalog(&[
            ("Sawron", "s1"),
            ("SAURON", "e1"),
            ("Sauran", "s2"),
            ("sauron", "e2"),
        ]);
        let matches = match_candidates("Sauron", &entries, &SimilarityConfig::default());
        let refs: Vec<_> = matches.iter().map(|m| m.reference.as_str()).collect();
        assert_eq!(refs, vec!["e1", "e2", "s1", "s2"]);
    }

    #[test]
    fn test_duplicate_reference_reported_once() {
        let entries = catalog(&[("Sauron", "u1"), ("Sauron", "u1"), ("Sawron", "u1")]);
        let matches = match_candidates("Sauron", &entries, &SimilarityConfig::default());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].kind, MatchKind::Exact);
    }

    #[test]
    fn test_thresholds_are_per_call() {
        let entries = catalog(&[("Sawron", "u2")]);
        let strict = SimilarityConfig {
            max_distance: 0,
            min_dice: 0.99,
            ngram_size: 2,
        };
        assert!(match_candidates("Sauron", &entries, &strict).is_empty());
        assert_eq!(
            match_candidates("Sauron", &entries, &SimilarityConfig::default()).len(),
            1
        );
    }

    #[test]
    fn test_classify_unrelated() {
        assert_eq!(
            classify("Sauron", "Unrelated", &SimilarityConfig::default()),
            MatchKind::Unrelated
        );
    }

    #[test]
    fn test_serializes_match_type() {
        let entry = CatalogEntry::new("Sawron", "u2").with_genre("Black Metal");
        let candidate = MatchCandidate::new("Sauron", &entry, MatchKind::Similar);
        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["match_type"], "similar");
        assert_eq!(json["genre"], "Black Metal");
    }
}
