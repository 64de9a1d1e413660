// src/services/pep.rs

//! PEP extractor.
//!
//! Reads every row of the numerical index, fetches each proposal page and
//! counts proposals per displayed status. Per-proposal failures
//! (unreachable page, unexpected structure) become notes; a status code
//! with no expected-status entry aborts the run.

use indicatif::ProgressBar;
use scraper::{ElementRef, Html};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{FailureNote, FailureNotes, Table};
use crate::services::{ScrapeContext, StatusReconciler};
use crate::utils::html::{find_tag, parse_selector, require_attr, text_of};
use crate::utils::http::fetch_document;
use crate::utils::progress::progress_bar;
use crate::utils::resolve_url;

const STATUS_LABEL: &str = "Status";

/// One row of the numerical index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PepRow {
    /// Status code with the leading type glyph removed (may be empty)
    pub code: String,
    /// Absolute URL of the proposal page
    pub url: String,
}

/// Build the per-status table for all proposals.
pub async fn pep(ctx: &ScrapeContext<'_>, notes: &mut FailureNotes) -> Result<Table> {
    let index_url = ctx.config.sources.peps_url.as_str();
    let rows = {
        let document = fetch_document(ctx.source, index_url).await?;
        index_rows(&document, index_url)?
    };
    log::debug!("Found {} proposals on {}", rows.len(), index_url);

    let mut reconciler = StatusReconciler::new(&ctx.config.expected_status);
    let pb = progress_bar(rows.len(), ctx.show_progress);
    let result = tally_rows(ctx, &rows, &mut reconciler, &pb, notes).await;
    pb.finish_and_clear();
    result?;

    reconciler.into_table()
}

async fn tally_rows(
    ctx: &ScrapeContext<'_>,
    rows: &[PepRow],
    reconciler: &mut StatusReconciler<'_>,
    pb: &ProgressBar,
    notes: &mut FailureNotes,
) -> Result<()> {
    for row in rows {
        pb.inc(1);
        let displayed = match fetch_displayed_status(ctx, &row.url).await {
            Ok(status) => status,
            Err(AppError::PageUnavailable { url, reason }) => {
                notes.push(FailureNote::PageUnavailable { url, reason });
                continue;
            }
            Err(e @ AppError::TagNotFound { .. }) => {
                notes.push(FailureNote::TagNotFound {
                    url: row.url.clone(),
                    detail: e.to_string(),
                });
                continue;
            }
            Err(e) => return Err(e),
        };
        reconciler.record(&row.code, &displayed, &row.url, notes)?;
    }
    Ok(())
}

async fn fetch_displayed_status(ctx: &ScrapeContext<'_>, url: &str) -> Result<String> {
    let html = ctx.source.fetch_text(url).await?;
    parse_displayed_status(&html)
}

/// Rows of the `#numerical-index` table body, in document order.
pub fn index_rows(document: &Html, index_url: &str) -> Result<Vec<PepRow>> {
    let base = Url::parse(index_url)?;
    let section = find_tag(
        document.root_element(),
        "section",
        &[("id", "numerical-index")],
    )?;
    let body = find_tag(section, "tbody", &[])?;
    let tr = parse_selector("tr")?;

    body.select(&tr)
        .map(|row| {
            let cell = find_tag(row, "td", &[])?;
            let code = text_of(cell).trim().chars().skip(1).collect();
            let anchor = find_tag(row, "a", &[])?;
            let url = resolve_url(&base, require_attr(anchor, "href")?)?;
            Ok(PepRow { code, url })
        })
        .collect()
}

/// Displayed status from a proposal page: the field following the
/// `Status` label in the page's first field list.
pub fn parse_displayed_status(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let fields = find_tag(document.root_element(), "dl", &[])?;

    let label = fields
        .descendants()
        .find(|node| {
            node.value()
                .as_text()
                .is_some_and(|text| text.trim() == STATUS_LABEL)
        })
        .and_then(|text| text.parent())
        .and_then(ElementRef::wrap)
        .ok_or_else(|| AppError::tag_not_found("dt", &[("string", STATUS_LABEL)]))?;

    let value = label
        .next_siblings()
        .find_map(ElementRef::wrap)
        .ok_or_else(|| AppError::tag_not_found("dd", &[]))?;

    Ok(text_of(value).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Config;
    use crate::services::testing::StaticPages;

    const INDEX_URL: &str = "https://peps.python.org/";

    fn index(rows: &[(&str, &str)]) -> String {
        let body: String = rows
            .iter()
            .map(|(code, href)| {
                format!(
                    r#"<tr><td><abbr>{code}</abbr></td><td><a href="{href}">x</a></td><td>Title</td></tr>"#
                )
            })
            .collect();
        format!(
            r#"<html><body>
            <section id="index-by-category"><table><tbody>
              <tr><td>XX</td><td><a href="wrong/">wrong</a></td></tr>
            </tbody></table></section>
            <section id="numerical-index"><table>
              <thead><tr><th>Type</th><th>PEP</th></tr></thead>
              <tbody>{body}</tbody>
            </table></section>
            </body></html>"#
        )
    }

    fn detail(status: &str) -> String {
        format!(
            r#"<html><body><section><dl class="rfc2822 field-list simple">
              <dt class="field-odd">Author<span class="colon">:</span></dt>
              <dd class="field-odd">Someone</dd>
              <dt class="field-even">Status<span class="colon">:</span></dt>
              <dd class="field-even"><abbr title="Accepted and complete">{status}</abbr></dd>
              <dt class="field-odd">Type<span class="colon">:</span></dt>
              <dd class="field-odd">Process</dd>
            </dl></section></body></html>"#
        )
    }

    fn ctx<'a>(source: &'a StaticPages, config: &'a Config) -> ScrapeContext<'a> {
        ScrapeContext {
            source,
            config,
            show_progress: false,
        }
    }

    #[test]
    fn test_index_rows_strip_glyph_and_resolve() {
        let document = Html::parse_document(&index(&[("·A", "pep-0001/"), ("S", "pep-0002/")]));
        let rows = index_rows(&document, INDEX_URL).unwrap();
        assert_eq!(
            rows,
            vec![
                PepRow {
                    code: "A".to_string(),
                    url: "https://peps.python.org/pep-0001/".to_string(),
                },
                PepRow {
                    code: String::new(),
                    url: "https://peps.python.org/pep-0002/".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_index_requires_numerical_section() {
        let document = Html::parse_document("<html><body><table></table></body></html>");
        assert!(matches!(
            index_rows(&document, INDEX_URL),
            Err(AppError::TagNotFound { tag, .. }) if tag == "section"
        ));
    }

    #[test]
    fn test_parse_displayed_status() {
        assert_eq!(parse_displayed_status(&detail("Final")).unwrap(), "Final");
    }

    #[test]
    fn test_parse_displayed_status_without_label() {
        let html = "<dl><dt>Author</dt><dd>x</dd></dl>";
        assert!(matches!(
            parse_displayed_status(html),
            Err(AppError::TagNotFound { tag, .. }) if tag == "dt"
        ));
    }

    #[tokio::test]
    async fn test_total_counts_only_processed_rows() {
        let config = Config::default();
        let source = StaticPages::new()
            .with(
                INDEX_URL,
                index(&[
                    ("SA", "pep-0001/"),
                    ("SA", "pep-0002/"),
                    ("IF", "pep-0003/"),
                    ("SF", "pep-0004/"),
                    ("S", "pep-0005/"),
                ]),
            )
            .with("https://peps.python.org/pep-0001/", detail("Accepted"))
            .with("https://peps.python.org/pep-0002/", detail("Draft"))
            .with("https://peps.python.org/pep-0003/", "<html><body>gone</body></html>")
            .with("https://peps.python.org/pep-0005/", detail("Draft"));
        let mut notes = FailureNotes::new();

        let table = pep(&ctx(&source, &config), &mut notes).await.unwrap();

        let rows: Vec<(&str, &str)> = table
            .rows()
            .iter()
            .map(|row| (row[0].as_str(), row[1].as_str()))
            .collect();
        assert_eq!(rows, [("Accepted", "1"), ("Draft", "2"), ("Total", "3")]);

        let kinds: Vec<&str> = notes
            .iter()
            .map(|note| match note {
                FailureNote::PageUnavailable { .. } => "unavailable",
                FailureNote::TagNotFound { .. } => "structure",
                FailureNote::StatusMismatch { .. } => "mismatch",
            })
            .collect();
        assert_eq!(kinds, ["mismatch", "structure", "unavailable"]);
    }

    #[tokio::test]
    async fn test_unknown_code_aborts() {
        let config = Config::default();
        let source = StaticPages::new()
            .with(INDEX_URL, index(&[("SX", "pep-0001/")]))
            .with("https://peps.python.org/pep-0001/", detail("Final"));

        let result = pep(&ctx(&source, &config), &mut FailureNotes::new()).await;
        assert!(matches!(
            result,
            Err(AppError::UnknownStatusCode { code, url })
                if code == "X" && url == "https://peps.python.org/pep-0001/"
        ));
    }

    #[tokio::test]
    async fn test_empty_index_reports_zero_total() {
        let config = Config::default();
        let source = StaticPages::new().with(INDEX_URL, index(&[]));

        let table = pep(&ctx(&source, &config), &mut FailureNotes::new())
            .await
            .unwrap();
        assert_eq!(table.rows(), [vec!["Total".to_string(), "0".to_string()]]);
    }
}
