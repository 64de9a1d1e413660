//! Utility functions and helpers.

pub mod cache;
pub mod html;
pub mod http;
pub mod progress;

use url::Url;

use crate::error::Result;

/// Resolve a potentially relative URL against a base URL.
pub fn resolve_url(base: &Url, href: &str) -> Result<String> {
    Ok(base.join(href)?.to_string())
}

/// Resolve a URL string against a base URL string.
pub fn resolve(base_url: &str, href: &str) -> Result<String> {
    resolve_url(&Url::parse(base_url)?, href)
}

/// Last non-empty path segment of a URL, used as a download file name.
pub fn file_name_from_url(url_str: &str) -> Option<String> {
    Url::parse(url_str)
        .ok()?
        .path_segments()?
        .next_back()
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
}
