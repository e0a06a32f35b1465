//! Checking a name against an external catalog
//!
//! An exact search runs first. When it returns fewer records than the
//! saturation threshold, a broader search with the query reduced to ASCII
//! letters follows, and its rows are classified too. Rows already seen in the
//! exact search are not classified twice.

use serde::Serialize;
use tracing::{debug, warn};

use super::{match_candidates, CatalogEntry, MatchCandidate, MatchKind};
use crate::config::{CatalogConfig, SimilarityConfig};
use crate::error::Result;

/// One page of catalog search results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogPage {
    /// Records the catalog reports for the query, which may exceed `entries`
    pub total_records: usize,
    pub entries: Vec<CatalogEntry>,
}

/// A searchable catalog of names
pub trait CatalogSearch {
    fn search(&self, query: &str) -> Result<CatalogPage>;
}

/// Outcome of checking one name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogReport {
    pub name: String,
    /// Exact matches first, then similar, each in catalog order
    pub matches: Vec<MatchCandidate>,
    /// Set when the catalog could not be queried
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CatalogReport {
    pub fn exists(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn count(&self, kind: MatchKind) -> usize {
        self.matches.iter().filter(|m| m.kind == kind).count()
    }
}

/// Query reduced to ASCII letters for the broad search
pub fn broaden_query(query: &str) -> String {
    query.chars().filter(char::is_ascii_alphabetic).collect()
}

/// Check one name against a catalog
///
/// Never fails: a catalog error is recorded on the report with no matches,
/// so a batch can carry on with the next name.
pub fn check_catalog(
    query: &str,
    catalog: &dyn CatalogSearch,
    config: &CatalogConfig,
    thresholds: &SimilarityConfig,
) -> CatalogReport {
    match search_both(query, catalog, config) {
        Ok(entries) => {
            let matches = match_candidates(query, &entries, thresholds);
            debug!(
                query,
                exact = matches.iter().filter(|m| m.kind == MatchKind::Exact).count(),
                similar = matches.iter().filter(|m| m.kind == MatchKind::Similar).count(),
                "check_catalog"
            );
            CatalogReport {
                name: query.to_string(),
                matches,
                error: None,
            }
        }
        Err(e) => {
            warn!(query, error = %e, "catalog check failed");
            CatalogReport {
                name: query.to_string(),
                matches: Vec::new(),
                error: Some(e.to_string()),
            }
        }
    }
}

/// Exact page rows followed by unseen broad-search rows
fn search_both(
    query: &str,
    catalog: &dyn CatalogSearch,
    config: &CatalogConfig,
) -> Result<Vec<CatalogEntry>> {
    let exact = catalog.search(query)?;
    let mut entries = exact.entries;

    if exact.total_records >= config.saturation_threshold {
        debug!(
            query,
            total = exact.total_records,
            "exact search saturated, skipping broad search"
        );
        return Ok(entries);
    }

    let broad_query = broaden_query(query);
    // An identical query would return the same rows
    if broad_query.is_empty() || broad_query == query {
        return Ok(entries);
    }

    let broad = catalog.search(&broad_query)?;
    for entry in broad.entries {
        if !entries.iter().any(|e| e.reference == entry.reference) {
            entries.push(entry);
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NamesakeError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory catalog that records the queries it receives
    #[derive(Default)]
    struct FakeCatalog {
        pages: HashMap<String, CatalogPage>,
        queries: RefCell<Vec<String>>,
        fail: bool,
    }

    impl FakeCatalog {
        fn with_page(mut self, query: &str, total: usize, rows: &[(&str, &str)]) -> Self {
            self.pages.insert(
                query.to_string(),
                CatalogPage {
                    total_records: total,
                    entries: rows
                        .iter()
                        .map(|(name, reference)| CatalogEntry::new(*name, *reference))
                        .collect(),
                },
            );
            self
        }
    }

    impl CatalogSearch for FakeCatalog {
        fn search(&self, query: &str) -> Result<CatalogPage> {
            self.queries.borrow_mut().push(query.to_string());
            if self.fail {
                return Err(NamesakeError::Http("status code 503".to_string()));
            }
            Ok(self.pages.get(query).cloned().unwrap_or_default())
        }
    }

    #[test]
    fn test_broad_search_adds_similar_names() {
        let catalog = FakeCatalog::default()
            .with_page("Barad-dûr", 1, &[("Barad-dûr", "u1")])
            .with_page("Baraddr", 2, &[("Barad-dûr", "u1"), ("Barad Dur", "u2")]);

        let report = check_catalog(
            "Barad-dûr",
            &catalog,
            &CatalogConfig::default(),
            &SimilarityConfig::default(),
        );

        assert_eq!(*catalog.queries.borrow(), vec!["Barad-dûr", "Baraddr"]);
        assert_eq!(report.matches.len(), 2);
        assert_eq!(report.matches[0].reference, "u1");
        assert_eq!(report.matches[0].kind, MatchKind::Exact);
        assert_eq!(report.matches[1].reference, "u2");
        assert_eq!(report.matches[1].kind, MatchKind::Similar);
        assert!(report.exists());
    }

    #[test]
    fn test_saturated_exact_search_skips_broad_search() {
        let catalog = FakeCatalog::default().with_page("Gandalf!", 100, &[("Gandalf", "u1")]);

        let report = check_catalog(
            "Gandalf!",
            &catalog,
            &CatalogConfig::default(),
            &SimilarityConfig::default(),
        );

        assert_eq!(*catalog.queries.borrow(), vec!["Gandalf!"]);
        assert_eq!(report.count(MatchKind::Similar), 1);
    }

    #[test]
    fn test_plain_ascii_query_searched_once() {
        let catalog = FakeCatalog::default().with_page("Sauron", 3, &[
            ("Sauron", "u1"),
            ("Sawron", "u2"),
            ("Unrelated", "u3"),
        ]);

        let report = check_catalog(
            "Sauron",
            &catalog,
            &CatalogConfig::default(),
            &SimilarityConfig::default(),
        );

        assert_eq!(catalog.queries.borrow().len(), 1);
        assert_eq!(report.count(MatchKind::Exact), 1);
        assert_eq!(report.count(MatchKind::Similar), 1);
    }

    #[test]
    fn test_catalog_error_is_captured() {
        let catalog = FakeCatalog {
            fail: true,
            ..FakeCatalog::default()
        };

        let report = check_catalog(
            "Sauron",
            &catalog,
            &CatalogConfig::default(),
            &SimilarityConfig::default(),
        );

        assert!(!report.exists());
        assert!(report.error.as_deref().unwrap().contains("503"));
    }

    #[test]
    fn test_broaden_query() {
        assert_eq!(broaden_query("Barad-dûr"), "Baraddr");
        assert_eq!(broaden_query("Minas Tirith"), "MinasTirith");
        assert_eq!(broaden_query("!!"), "");
    }
}
