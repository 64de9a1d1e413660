//! Service layer: one extractor per report mode.
//!
//! - `whats_new`: release-notes summary per minor version
//! - `latest_versions`: documentation versions and their status
//! - `download`: the A4 PDF documentation archive
//! - `pep`: proposal counts per displayed status (`StatusReconciler`)
//!
//! Extractors take a [`ScrapeContext`] and a [`FailureNotes`] buffer for
//! per-item problems; they never log those problems themselves.
//!
//! [`FailureNotes`]: crate::models::FailureNotes

mod download;
mod pep;
mod reconcile;
mod versions;
mod whats_new;

pub use download::{archive_link, download};
pub use pep::{index_rows, parse_displayed_status, pep, PepRow};
pub use reconcile::StatusReconciler;
pub use versions::{latest_versions, parse_version_label, version_pattern};
pub use whats_new::{parse_version_page, whats_new};

use crate::models::Config;
use crate::utils::http::PageSource;

/// Everything an extractor needs for one run.
pub struct ScrapeContext<'a> {
    pub source: &'a dyn PageSource,
    pub config: &'a Config,
    pub show_progress: bool,
}

impl<'a> ScrapeContext<'a> {
    pub fn new(source: &'a dyn PageSource, config: &'a Config) -> Self {
        Self {
            source,
            config,
            show_progress: config.run.show_progress,
        }
    }
}
