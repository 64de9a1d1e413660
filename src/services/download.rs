// src/services/download.rs

//! Download extractor: saves the A4 PDF documentation archive.

use scraper::Html;

use crate::error::{AppError, Result};
use crate::models::{FailureNotes, Table};
use crate::services::ScrapeContext;
use crate::utils::html::{find_tag, parse_selector, require_attr};
use crate::utils::http::fetch_document;
use crate::utils::{file_name_from_url, resolve};

pub const HEADER: [&str; 1] = ["Saved file"];

const ARCHIVE_SUFFIX: &str = "pdf-a4.zip";

/// Download the archive and return a one-row table with the saved path.
pub async fn download(ctx: &ScrapeContext<'_>, _notes: &mut FailureNotes) -> Result<Table> {
    let page_url = resolve(&ctx.config.sources.docs_url, "download.html")?;
    let archive_url = {
        let document = fetch_document(ctx.source, &page_url).await?;
        archive_link(&document, &page_url)?
    };
    let file_name = file_name_from_url(&archive_url)
        .ok_or_else(|| AppError::validation(format!("no file name in {archive_url}")))?;

    let downloads_dir = &ctx.config.paths.downloads_dir;
    tokio::fs::create_dir_all(downloads_dir).await?;
    let archive_path = downloads_dir.join(file_name);

    log::debug!("Downloading {archive_url}");
    let bytes = ctx.source.fetch_bytes(&archive_url).await?;
    tokio::fs::write(&archive_path, &bytes).await?;
    log::info!(
        "File downloaded and saved: {} ({} bytes)",
        archive_path.display(),
        bytes.len()
    );

    let mut table = Table::new(HEADER);
    table.push([archive_path.display().to_string()])?;
    Ok(table)
}

/// Absolute URL of the first `*pdf-a4.zip` link inside the downloads table.
pub fn archive_link(document: &Html, page_url: &str) -> Result<String> {
    let table = find_tag(document.root_element(), "table", &[("class", "docutils")])?;
    let selector = parse_selector(&format!(r#"a[href$="{ARCHIVE_SUFFIX}"]"#))?;
    let anchor = table
        .select(&selector)
        .next()
        .ok_or_else(|| AppError::tag_not_found("a", &[("href$", ARCHIVE_SUFFIX)]))?;
    resolve(page_url, require_attr(anchor, "href")?)
}
