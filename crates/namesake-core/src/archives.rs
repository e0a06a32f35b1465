//! Metal Archives band search client
//!
//! The search endpoint answers with a DataTables payload:
//! `{"iTotalRecords": n, "aaData": [["<a href=\"URL\">Name</a>", "Genre", "Country"], ...]}`.
//! The first cell carries both the band URL and its display name.

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use serde::Deserialize;

use crate::config::CatalogConfig;
use crate::error::{NamesakeError, Result};
use crate::matcher::{CatalogEntry, CatalogPage, CatalogSearch};

static HREF: OnceLock<Regex> = OnceLock::new();
static TAG: OnceLock<Regex> = OnceLock::new();

fn href() -> &'static Regex {
    HREF.get_or_init(|| Regex::new(r#"href="([^"]+)""#).expect("static regex"))
}

fn tag() -> &'static Regex {
    TAG.get_or_init(|| Regex::new(r"<[^>]+>").expect("static regex"))
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "iTotalRecords", default)]
    total_records: usize,
    #[serde(rename = "aaData", default)]
    rows: Vec<Vec<String>>,
}

/// Parse a search response body
///
/// Rows without a link in their first cell are dropped.
pub fn parse_search_response(body: &str) -> Result<CatalogPage> {
    let response: SearchResponse = serde_json::from_str(body)?;

    let entries = response
        .rows
        .iter()
        .filter_map(|row| {
            let cell = row.first()?;
            let reference = href().captures(cell)?.get(1)?.as_str().to_string();
            let name = tag().replace_all(cell, "").trim().to_string();
            let genre = row
                .get(1)
                .map(|g| g.trim().to_string())
                .filter(|g| !g.is_empty())
                .unwrap_or_else(|| "Unknown".to_string());
            Some(CatalogEntry::new(name, reference).with_genre(genre))
        })
        .collect();

    Ok(CatalogPage {
        total_records: response.total_records,
        entries,
    })
}

/// Blocking HTTP client for the band search
pub struct MetalArchivesClient {
    agent: ureq::Agent,
    config: CatalogConfig,
}

impl MetalArchivesClient {
    pub fn new(config: CatalogConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_seconds)))
            .build()
            .into();
        Self { agent, config }
    }
}

impl CatalogSearch for MetalArchivesClient {
    fn search(&self, query: &str) -> Result<CatalogPage> {
        let page_size = self.config.page_size.to_string();
        let body = self
            .agent
            .get(self.config.search_url.as_str())
            .query("field", "name")
            .query("query", query)
            .query("sEcho", "1")
            .query("iDisplayStart", "0")
            .query("iDisplayLength", &page_size)
            .header("User-Agent", self.config.user_agent.as_str())
            .call()?
            .body_mut()
            .read_to_string()?;

        tracing::trace!(query, bytes = body.len(), "catalog response");

        parse_search_response(&body).map_err(|e| NamesakeError::FailedOperationWithTarget {
            operation: "parse catalog response".to_string(),
            target: format!("for {query:?}"),
            reason: e.to_string(),
        })
    }
}
