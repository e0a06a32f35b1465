//! Configuration type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NamesakeError;

/// Metal Archives band search endpoint
pub const DEFAULT_SEARCH_URL: &str = "https://www.metal-archives.com/search/ajax-band-search/";

/// Browser-like User-Agent; the catalog rejects bare library agents
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamesakeConfig {
    /// Proper-noun extraction settings
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Name similarity thresholds
    #[serde(default)]
    pub similarity: SimilarityConfig,

    /// External catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Common-word dictionary sources
    #[serde(default)]
    pub dictionary: DictionaryConfig,
}

/// Which proper-noun classifier to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Positional statistics: repeated, capitalized away from sentence starts
    #[default]
    Positional,
    /// Single pass over every token, title-cased
    SinglePass,
}

impl FromStr for StrategyKind {
    type Err = NamesakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positional" => Ok(StrategyKind::Positional),
            "single-pass" | "single_pass" | "singlepass" => Ok(StrategyKind::SinglePass),
            other => Err(NamesakeError::invalid_value(
                "strategy (expected: positional or single-pass)",
                other,
            )),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Positional => write!(f, "positional"),
            StrategyKind::SinglePass => write!(f, "single-pass"),
        }
    }
}

/// Proper-noun extraction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    #[serde(default)]
    pub strategy: StrategyKind,

    /// Minimum total sightings (positional strategy)
    #[serde(default = "default_min_total_count")]
    pub min_total_count: u32,

    /// Minimum mid-sentence sightings (positional strategy)
    #[serde(default = "default_min_mid_count")]
    pub min_mid_count: u32,

    /// Minimum token length in characters (positional strategy)
    #[serde(default = "default_min_length")]
    pub min_length: usize,
}

fn default_min_total_count() -> u32 {
    2
}

fn default_min_mid_count() -> u32 {
    1
}

fn default_min_length() -> usize {
    2
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            min_total_count: default_min_total_count(),
            min_mid_count: default_min_mid_count(),
            min_length: default_min_length(),
        }
    }
}

/// Name similarity thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// Largest Damerau-Levenshtein distance still considered similar
    #[serde(default = "default_max_distance")]
    pub max_distance: usize,

    /// Smallest Dice coefficient still considered similar
    #[serde(default = "default_min_dice")]
    pub min_dice: f64,

    /// N-gram size for the Dice coefficient
    #[serde(default = "default_ngram_size")]
    pub ngram_size: usize,
}

fn default_max_distance() -> usize {
    2
}

fn default_min_dice() -> f64 {
    0.7
}

fn default_ngram_size() -> usize {
    2
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            max_distance: default_max_distance(),
            min_dice: default_min_dice(),
            ngram_size: default_ngram_size(),
        }
    }
}

/// External catalog settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Rows requested per search
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Skip the fuzzy search when the exact search already returned this many records
    #[serde(default = "default_saturation_threshold")]
    pub saturation_threshold: usize,

    /// Pause between names in a batch check
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Write a progress report every N names
    #[serde(default = "default_save_every")]
    pub save_every: usize,
}

fn default_search_url() -> String {
    DEFAULT_SEARCH_URL.to_string()
}

fn default_page_size() -> usize {
    100
}

fn default_saturation_threshold() -> usize {
    100
}

fn default_request_delay_ms() -> u64 {
    500
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_save_every() -> usize {
    20
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            page_size: default_page_size(),
            saturation_threshold: default_saturation_threshold(),
            request_delay_ms: default_request_delay_ms(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
            save_every: default_save_every(),
        }
    }
}

/// Common-word dictionary sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Word lists fetched and unioned, one word per line
    #[serde(default = "default_dictionary_urls")]
    pub urls: Vec<String>,

    /// Local list used when no URL could be fetched
    #[serde(default = "default_fallback_file")]
    pub fallback_file: String,

    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_dictionary_urls() -> Vec<String> {
    vec![
        "https://raw.githubusercontent.com/dwyl/english-words/master/words.txt".to_string(),
        "https://raw.githubusercontent.com/first20hours/google-10000-english/master/google-10000-english.txt"
            .to_string(),
    ]
}

fn default_fallback_file() -> String {
    "english_words.txt".to_string()
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            urls: default_dictionary_urls(),
            fallback_file: default_fallback_file(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
