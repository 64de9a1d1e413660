// src/services/whats_new.rs

//! "What's new" extractor.
//!
//! Walks the what's-new index and summarizes each linked version page.
//! An unreachable version page is skipped with a note; a reachable page
//! without the expected heading or definition list aborts the run.

use indicatif::ProgressBar;
use scraper::Html;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{FailureNote, FailureNotes, Table};
use crate::services::ScrapeContext;
use crate::utils::html::{find_tag, parse_selector, require_attr, text_of};
use crate::utils::http::fetch_document;
use crate::utils::progress::progress_bar;
use crate::utils::{resolve, resolve_url};

pub const HEADER: [&str; 3] = ["Article link", "Title", "Editor, author"];

const SECTIONS_SELECTOR: &str = "#what-s-new-in-python div.toctree-wrapper li.toctree-l1";

/// Build the what's-new table.
pub async fn whats_new(ctx: &ScrapeContext<'_>, notes: &mut FailureNotes) -> Result<Table> {
    let index_url = resolve(&ctx.config.sources.docs_url, "whatsnew/")?;
    let links = {
        let document = fetch_document(ctx.source, &index_url).await?;
        version_links(&document, &index_url)?
    };
    log::debug!("Found {} version pages on {}", links.len(), index_url);

    let mut table = Table::new(HEADER);
    let pb = progress_bar(links.len(), ctx.show_progress);
    let result = fill_rows(ctx, &links, &mut table, &pb, notes).await;
    pb.finish_and_clear();
    result?;

    Ok(table)
}

async fn fill_rows(
    ctx: &ScrapeContext<'_>,
    links: &[String],
    table: &mut Table,
    pb: &ProgressBar,
    notes: &mut FailureNotes,
) -> Result<()> {
    for link in links {
        pb.inc(1);
        let html = match ctx.source.fetch_text(link).await {
            Ok(html) => html,
            Err(AppError::PageUnavailable { url, reason }) => {
                notes.push(FailureNote::PageUnavailable { url, reason });
                continue;
            }
            Err(e) => return Err(e),
        };
        let (title, excerpt) =
            parse_version_page(&html).map_err(|e| AppError::broken_page(link.as_str(), e))?;
        table.push([link.clone(), title, excerpt])?;
    }
    Ok(())
}

fn version_links(document: &Html, index_url: &str) -> Result<Vec<String>> {
    let base = Url::parse(index_url)?;
    let sections = parse_selector(SECTIONS_SELECTOR)?;

    document
        .select(&sections)
        .map(|section| {
            let anchor = find_tag(section, "a", &[])?;
            resolve_url(&base, require_attr(anchor, "href")?)
        })
        .collect()
}

/// Title (`<h1>`) and summary (first `<dl>`, newlines flattened) of a version page.
pub fn parse_version_page(html: &str) -> Result<(String, String)> {
    let document = Html::parse_document(html);
    let root = document.root_element();
    let title = text_of(find_tag(root, "h1", &[])?);
    let excerpt = text_of(find_tag(root, "dl", &[])?).replace('\n', " ");
    Ok((title, excerpt))
}
