// src/pipeline/run.rs

//! Mode dispatch and end-of-run handling.

use std::path::PathBuf;

use crate::error::Result;
use crate::models::{FailureNotes, Mode, OutputMode, Table};
use crate::output;
use crate::services::{self, ScrapeContext};

/// Run the extractor for `mode`, collecting per-item problems into `notes`.
pub async fn run_mode(
    mode: Mode,
    ctx: &ScrapeContext<'_>,
    notes: &mut FailureNotes,
) -> Result<Table> {
    match mode {
        Mode::WhatsNew => services::whats_new(ctx, notes).await,
        Mode::LatestVersions => services::latest_versions(ctx, notes).await,
        Mode::Download => services::download(ctx, notes).await,
        Mode::Pep => services::pep(ctx, notes).await,
    }
}

/// Run one mode end to end: extract, flush notes, write output.
///
/// Notes are flushed once the extractor has returned, including when it
/// failed, so partial diagnostics are never lost.
pub async fn run_report(
    mode: Mode,
    ctx: &ScrapeContext<'_>,
    output_mode: OutputMode,
) -> Result<Option<PathBuf>> {
    log::info!("Running mode: {mode}");

    let mut notes = FailureNotes::new();
    let result = run_mode(mode, ctx, &mut notes).await;

    if !notes.is_empty() {
        log::warn!("{} item(s) reported problems:", notes.len());
    }
    notes.flush();

    let table = result?;
    log::info!("Collected {} row(s) for {mode}", table.len());
    output::emit(&table, mode, output_mode, &ctx.config.paths.results_dir)
}
