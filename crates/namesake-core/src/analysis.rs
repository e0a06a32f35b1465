//! Band-name viability analysis
//!
//! Turns a catalog report (and, when known, social-handle availability) into
//! a 0-100 viability score, a list of stylized spellings, and plain-language
//! recommendations.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::matcher::{CatalogReport, MatchKind};

/// Score of a name nobody uses yet
pub const MAX_SCORE: u8 = 100;

/// Points lost per catalog match
pub const CATALOG_MATCH_PENALTY: i64 = 20;

/// Points lost per platform where the handle is taken
pub const TAKEN_PLATFORM_PENALTY: i64 = 10;

/// Names longer than this get a "consider a shorter name" note
pub const LONG_NAME_CHARS: usize = 20;

/// Letter swaps used for metal-style spellings
const METAL_LETTERS: [(char, char); 6] = [
    ('a', 'æ'),
    ('o', 'ø'),
    ('u', 'ü'),
    ('A', 'Æ'),
    ('O', 'Ø'),
    ('U', 'Ü'),
];

/// Handle availability per platform; `true` means the handle is free
///
/// A platform that could not be checked counts as free.
pub type PlatformAvailability = BTreeMap<String, bool>;

/// Full analysis of one candidate band name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameAnalysis {
    pub name: String,
    pub catalog: CatalogReport,
    pub platforms: PlatformAvailability,
    pub variations: Vec<String>,
    pub viability_score: u8,
    pub recommendations: Vec<String>,
}

impl NameAnalysis {
    pub fn catalog_matches(&self) -> usize {
        self.catalog.matches.len()
    }
}

/// The name, its metal-style spellings, and common formatting variants
///
/// Each swappable letter yields one variant with every occurrence of that
/// letter replaced. Also adds "The <name>" and the name with spaces removed
/// or turned into underscores. Sorted, without duplicates.
pub fn generate_variations(name: &str) -> Vec<String> {
    let mut variations = BTreeSet::new();
    variations.insert(name.to_string());

    for (plain, metal) in METAL_LETTERS {
        if name.contains(plain) {
            variations.insert(name.replace(plain, &metal.to_string()));
        }
    }

    variations.insert(format!("The {name}"));
    variations.insert(name.replace(' ', ""));
    variations.insert(name.replace(' ', "_"));

    variations.into_iter().collect()
}

/// 100, minus 20 per catalog match and 10 per taken platform, floored at 0
pub fn viability_score(catalog_matches: usize, taken_platforms: usize) -> u8 {
    let score = i64::from(MAX_SCORE)
        - CATALOG_MATCH_PENALTY.saturating_mul(catalog_matches as i64)
        - TAKEN_PLATFORM_PENALTY.saturating_mul(taken_platforms as i64);
    score.clamp(0, i64::from(MAX_SCORE)) as u8
}

/// Platforms whose handle is already taken, in name order
pub fn taken_platforms(platforms: &PlatformAvailability) -> Vec<&str> {
    platforms
        .iter()
        .filter(|(_, available)| !**available)
        .map(|(platform, _)| platform.as_str())
        .collect()
}

/// Advice for one name
pub fn recommendations(name: &str, report: &CatalogReport, taken: &[&str]) -> Vec<String> {
    let mut recs = Vec::new();

    if let Some(error) = &report.error {
        recs.push(format!("Catalog could not be checked ({error}); the score ignores it"));
    }

    let matches = report.matches.len();
    if matches > 0 {
        recs.push(format!(
            "Warning: Found {} existing band(s) with this name ({} exact, {} similar)",
            matches,
            report.count(MatchKind::Exact),
            report.count(MatchKind::Similar)
        ));
    }

    if !taken.is_empty() {
        recs.push(format!(
            "Social media handles already taken on: {}",
            taken.join(", ")
        ));
    }

    if name.chars().count() > LONG_NAME_CHARS {
        recs.push("Consider a shorter name for better social media usage".to_string());
    }

    recs
}

/// Combine a catalog report and platform availability into an analysis
pub fn analyze(report: CatalogReport, platforms: PlatformAvailability) -> NameAnalysis {
    let taken = taken_platforms(&platforms);
    let viability_score = viability_score(report.matches.len(), taken.len());
    let recommendations = recommendations(&report.name, &report, &taken);

    NameAnalysis {
        name: report.name.clone(),
        variations: generate_variations(&report.name),
        viability_score,
        recommendations,
        catalog: report,
        platforms,
    }
}
