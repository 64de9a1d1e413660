// src/error.rs

//! Unified error handling for the scraper.
//!
//! `PageUnavailable` and `TagNotFound` are deliberately separate variants:
//! per-item loops match on them explicitly to decide whether to skip an item
//! or abort the run.

use std::fmt;

use thiserror::Error;

/// Result type alias for scraper operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// The page could not be fetched (DNS, timeout, reset, non-2xx status)
    #[error("Failed to load page {url}: {reason}")]
    PageUnavailable { url: String, reason: String },

    /// The page was fetched but a required element is missing
    #[error("Tag <{tag}> not found {}", format_attrs(.attrs))]
    TagNotFound {
        tag: String,
        attrs: Vec<(String, String)>,
    },

    /// A required element is missing on a specific page
    #[error("Unexpected page structure at {url}: {source}")]
    BrokenPage {
        url: String,
        source: Box<AppError>,
    },

    /// The documentation sidebar has no "All versions" list
    #[error("No version menu found on {url}")]
    NoVersionMenu { url: String },

    /// A proposal status code with no entry in the expected-status table
    #[error("Unknown status code '{code}' for {url}")]
    UnknownStatusCode { code: String, url: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be built
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a page-unavailable error for `url`.
    pub fn page_unavailable(url: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::PageUnavailable {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a tag-not-found error from a tag name and its attribute constraints.
    pub fn tag_not_found(tag: impl Into<String>, attrs: &[(&str, &str)]) -> Self {
        Self::TagNotFound {
            tag: tag.into(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Attach the page `url` to a structural error raised while reading it.
    pub fn broken_page(url: impl Into<String>, source: AppError) -> Self {
        Self::BrokenPage {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// `err` followed by each underlying cause, outermost first.
pub fn causes<'a>(
    err: &'a (dyn std::error::Error + 'static),
) -> impl Iterator<Item = &'a (dyn std::error::Error + 'static)> {
    std::iter::successors(Some(err), |e| e.source())
}

fn format_attrs(attrs: &[(String, String)]) -> String {
    if attrs.is_empty() {
        return "{}".to_string();
    }
    let pairs: Vec<String> = attrs.iter().map(|(k, v)| format!("{k}={v:?}")).collect();
    format!("{{{}}}", pairs.join(", "))
}
