//! Batch catalog checks
//!
//! Checks names one by one with a pause between requests, hands the
//! accumulated reports to a progress callback every `save_every` names, and
//! stops early when the interrupt flag is raised.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use tracing::info;

use crate::config::{CatalogConfig, SimilarityConfig};
use crate::error::Result;
use crate::matcher::{check_catalog, CatalogReport, CatalogSearch, MatchKind};

/// Result of a batch run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    pub reports: Vec<CatalogReport>,
    /// True when the run stopped before checking every name
    pub interrupted: bool,
}

impl BatchOutcome {
    pub fn count(&self, kind: MatchKind) -> usize {
        self.reports.iter().map(|r| r.count(kind)).sum()
    }

    pub fn errors(&self) -> usize {
        self.reports.iter().filter(|r| r.error.is_some()).count()
    }
}

/// Check every name against the catalog
///
/// `on_progress` sees all reports so far after every `save_every` names; the
/// final save is left to the caller.
pub fn check_names<F>(
    names: &[String],
    catalog: &dyn CatalogSearch,
    config: &CatalogConfig,
    thresholds: &SimilarityConfig,
    interrupted: &AtomicBool,
    mut on_progress: F,
) -> Result<BatchOutcome>
where
    F: FnMut(&[CatalogReport]) -> Result<()>,
{
    let delay = Duration::from_millis(config.request_delay_ms);
    let save_every = config.save_every.max(1);
    let total = names.len();
    let mut outcome = BatchOutcome::default();

    for (i, name) in names.iter().enumerate() {
        if interrupted.load(Ordering::SeqCst) {
            info!(checked = i, total, "batch interrupted");
            outcome.interrupted = true;
            break;
        }

        info!(name = %name, index = i + 1, total, "checking");
        let report = check_catalog(name, catalog, config, thresholds);
        if report.exists() {
            info!(
                name = %name,
                exact = report.count(MatchKind::Exact),
                similar = report.count(MatchKind::Similar),
                "found matches"
            );
        }
        outcome.reports.push(report);

        let checked = i + 1;
        if checked % save_every == 0 {
            on_progress(&outcome.reports)?;
        }
        if checked < total && !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    Ok(outcome)
}
