//! Common-word dictionary
//!
//! The classifiers only need a membership test over lowercase words, exposed
//! as the [`Dictionary`] trait. [`load`] builds a [`WordList`] from remote word
//! lists with a local-file fallback; when nothing is available it returns an
//! empty list and extraction simply filters nothing.

use std::collections::HashSet;
use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::DictionaryConfig;
use crate::error::{NamesakeError, Result};

/// Membership test over lowercase common words
pub trait Dictionary {
    /// `word` is expected to already be lowercase
    fn contains(&self, word: &str) -> bool;
}

impl Dictionary for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl Dictionary for HashSet<&str> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

/// Dictionary that knows no words
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyDictionary;

impl Dictionary for EmptyDictionary {
    fn contains(&self, _word: &str) -> bool {
        false
    }
}

/// A set of lowercase common words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every non-blank line, trimmed and lowercased
    pub fn extend_from_text(&mut self, text: &str) {
        self.words.extend(
            text.lines()
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_lowercase),
        );
    }

    /// Read one word per line
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut list = Self::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                list.words.insert(word.to_lowercase());
            }
        }
        Ok(list)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)
            .map_err(|e| NamesakeError::io_operation("open word list", path.display(), e))?;
        Self::from_reader(file)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        WordList {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }
}

/// Fetch the configured word lists, falling back to the local file
///
/// `root` anchors a relative `fallback_file`.
pub fn load(config: &DictionaryConfig, root: &Path) -> WordList {
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(config.timeout_seconds)))
        .build()
        .into();

    let fetch = |url: &str| -> Result<String> {
        Ok(agent.get(url).call()?.body_mut().read_to_string()?)
    };

    load_from_sources(&config.urls, fetch, &root.join(&config.fallback_file))
}

/// Read only the local fallback list, without touching the network
pub fn load_local(fallback: &Path) -> WordList {
    load_from_sources(&[], |_: &str| -> Result<String> { Ok(String::new()) }, fallback)
}

/// Union every fetchable source; read `fallback` only if all of them fail
pub fn load_from_sources<F>(urls: &[String], fetch: F, fallback: &Path) -> WordList
where
    F: Fn(&str) -> Result<String>,
{
    let mut list = WordList::new();

    for url in urls {
        info!(url = %url, "downloading word list");
        match fetch(url) {
            Ok(body) => {
                let before = list.len();
                list.extend_from_text(&body);
                debug!(url = %url, added = list.len() - before, "word list merged");
            }
            Err(e) => warn!(url = %url, error = %e, "failed to download word list"),
        }
    }

    if !list.is_empty() {
        return list;
    }

    match WordList::from_path(fallback) {
        Ok(local) => {
            info!(path = %fallback.display(), words = local.len(), "using local word list");
            local
        }
        Err(e) => {
            warn!(
                path = %fallback.display(),
                error = %e,
                "no word list available; nothing will be filtered as common"
            );
            WordList::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_word_list_normalizes_lines() {
        let list = WordList::from_reader("The\n  went \n\nAGAIN\n".as_bytes()).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.contains("the"));
        assert!(list.contains("went"));
        assert!(list.contains("again"));
        assert!(!list.contains("The"));
    }

    #[test]
    fn test_sources_are_unioned_and_failures_skipped() {
        let urls = vec![
            "https://a.example/words".to_string(),
            "https://b.example/broken".to_string(),
            "https://c.example/words".to_string(),
        ];
        let fetch = |url: &str| -> Result<String> {
            match url {
                "https://a.example/words" => Ok("went\nto\n".to_string()),
                "https://c.example/words" => Ok("To\nsaw\n".to_string()),
                _ => Err(NamesakeError::Http("connection refused".to_string())),
            }
        };

        let dir = tempdir().unwrap();
        let list = load_from_sources(&urls, fetch, &dir.path().join("unused.txt"));
        assert_eq!(list.len(), 3);
        assert!(list.contains("saw"));
    }

    #[test]
    fn test_fallback_file_used_when_all_sources_fail() {
        let dir = tempdir().unwrap();
        let fallback = dir.path().join("english_words.txt");
        fs::write(&fallback, "ring\nfellowship\n").unwrap();

        let urls = vec!["https://a.example/words".to_string()];
        let fetch = |_: &str| -> Result<String> { Err(NamesakeError::Http("offline".into())) };

        let list = load_from_sources(&urls, fetch, &fallback);
        assert!(list.contains("fellowship"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_missing_everything_yields_empty_list() {
        let dir = tempdir().unwrap();
        let fetch = |_: &str| -> Result<String> { Err(NamesakeError::Http("offline".into())) };
        let list = load_from_sources(&[], fetch, &dir.path().join("missing.txt"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_load_local_reads_only_the_file() {
        let dir = tempdir().unwrap();
        let fallback = dir.path().join("english_words.txt");
        fs::write(&fallback, "the\nshire\n").unwrap();

        let list = load_local(&fallback);
        assert_eq!(list.len(), 2);
        assert!(list.contains("shire"));
    }
}
