// src/services/versions.rs

//! Latest-versions extractor: the "All versions" sidebar menu of the docs root.

use regex::Regex;
use scraper::Html;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{FailureNotes, Table};
use crate::services::ScrapeContext;
use crate::utils::html::{parse_selector, require_attr, text_of};
use crate::utils::http::fetch_document;
use crate::utils::resolve_url;

pub const HEADER: [&str; 3] = ["Documentation link", "Version", "Status"];

const MENU_SELECTOR: &str = "div.menu-wrapper ul";
const MENU_MARKER: &str = "All versions";

/// Compiled `Python <major>.<minor> (<status>)` pattern.
pub fn version_pattern() -> Result<Regex> {
    Regex::new(r"Python (?P<version>\d\.\d+) \((?P<status>.*)\)")
        .map_err(|e| AppError::config(format!("version pattern: {e}")))
}

/// Split a menu label into `(version, status)`. Labels that do not match
/// the pattern become `(label, "")`.
pub fn parse_version_label(pattern: &Regex, text: &str) -> (String, String) {
    match pattern.captures(text) {
        Some(caps) => (caps["version"].to_string(), caps["status"].to_string()),
        None => (text.to_string(), String::new()),
    }
}

/// Build the latest-versions table.
pub async fn latest_versions(ctx: &ScrapeContext<'_>, _notes: &mut FailureNotes) -> Result<Table> {
    let page_url = ctx.config.sources.docs_url.as_str();
    let document = fetch_document(ctx.source, page_url).await?;
    versions_table(&document, page_url)
}

fn versions_table(document: &Html, page_url: &str) -> Result<Table> {
    let base = Url::parse(page_url)?;
    let lists = parse_selector(MENU_SELECTOR)?;
    let anchors = parse_selector("a")?;
    let pattern = version_pattern()?;

    let menu = document
        .select(&lists)
        .find(|ul| text_of(*ul).contains(MENU_MARKER))
        .ok_or_else(|| AppError::NoVersionMenu {
            url: page_url.to_string(),
        })?;

    let mut table = Table::new(HEADER);
    for anchor in menu.select(&anchors) {
        let link = resolve_url(&base, require_attr(anchor, "href")?)?;
        let (version, status) = parse_version_label(&pattern, &text_of(anchor));
        table.push([link, version, status])?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Config;
    use crate::services::testing::StaticPages;

    const ROOT: &str = r#"
        <html><body>
        <div class="sphinxsidebar"><div class="menu-wrapper">
          <ul><li><a href="https://docs.python.org/3/">Docs home</a></li></ul>
          <ul>
            <li><a href="https://docs.python.org/3.14/">Python 3.14 (in development)</a></li>
            <li><a href="https://docs.python.org/3.13/">Python 3.13 (stable)</a></li>
            <li><a href="https://docs.python.org/3.8/">Python 3.8 (EOL)</a></li>
            <li><a href="https://www.python.org/doc/versions/">All versions</a></li>
          </ul>
        </div></div>
        </body></html>
    "#;

    #[test]
    fn test_label_with_status() {
        let pattern = version_pattern().unwrap();
        assert_eq!(
            parse_version_label(&pattern, "Python 3.11 (stable)"),
            ("3.11".to_string(), "stable".to_string())
        );
    }

    #[test]
    fn test_label_without_status() {
        let pattern = version_pattern().unwrap();
        assert_eq!(
            parse_version_label(&pattern, "Unreleased"),
            ("Unreleased".to_string(), String::new())
        );
    }

    #[tokio::test]
    async fn test_menu_with_marker_is_used() {
        let config = Config::default();
        let source = StaticPages::new().with("https://docs.python.org/3/", ROOT);
        let ctx = ScrapeContext {
            source: &source,
            config: &config,
            show_progress: false,
        };

        let table = latest_versions(&ctx, &mut FailureNotes::new()).await.unwrap();

        assert_eq!(table.header(), HEADER);
        assert_eq!(table.len(), 4);
        assert_eq!(
            table.rows()[1],
            vec!["https://docs.python.org/3.13/", "3.13", "stable"]
        );
        assert_eq!(
            table.rows()[3],
            vec!["https://www.python.org/doc/versions/", "All versions", ""]
        );
    }

    #[tokio::test]
    async fn test_missing_menu_is_fatal() {
        let config = Config::default();
        let source = StaticPages::new().with(
            "https://docs.python.org/3/",
            r#"<div class="menu-wrapper"><ul><li><a href="/">Home</a></li></ul></div>"#,
        );
        let ctx = ScrapeContext {
            source: &source,
            config: &config,
            show_progress: false,
        };

        let result = latest_versions(&ctx, &mut FailureNotes::new()).await;
        assert!(matches!(result, Err(AppError::NoVersionMenu { .. })));
    }
}
