// src/utils/http.rs

//! HTTP client utilities.
//!
//! Every transport failure leaves this module as
//! [`AppError::PageUnavailable`] carrying the offending URL.

use std::time::Duration;

use async_trait::async_trait;
use scraper::Html;

use crate::error::{AppError, Result};
use crate::models::HttpConfig;
use crate::utils::cache::ResponseCache;

/// Something pages can be fetched from.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch `url` and decode the body as UTF-8.
    async fn fetch_text(&self, url: &str) -> Result<String>;

    /// Fetch `url` as raw bytes. Never served from a cache.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &HttpConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a page and parse it as HTML.
pub async fn fetch_document(source: &dyn PageSource, url: &str) -> Result<Html> {
    let text = source.fetch_text(url).await?;
    Ok(Html::parse_document(&text))
}

/// Decode a body as UTF-8 whatever charset the server declared.
pub fn decode_utf8(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// [`PageSource`] backed by reqwest, with an optional response cache.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    cache: Option<ResponseCache>,
    bytes_timeout: Option<Duration>,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client, cache: Option<ResponseCache>) -> Self {
        Self {
            client,
            cache,
            bytes_timeout: None,
        }
    }

    /// Replace the client timeout for [`PageSource::fetch_bytes`] requests.
    pub fn with_bytes_timeout(mut self, timeout: Duration) -> Self {
        self.bytes_timeout = Some(timeout);
        self
    }

    async fn get(&self, url: &str, timeout: Option<Duration>) -> Result<Vec<u8>> {
        let mut request = self.client.get(url);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }
        let response = request
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| AppError::page_unavailable(url, e))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::page_unavailable(url, e))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl PageSource for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        if let Some(cache) = &self.cache {
            match cache.get(url).await {
                Ok(Some(bytes)) => {
                    log::debug!("Cache hit: {url}");
                    return Ok(decode_utf8(&bytes));
                }
                Ok(None) => {}
                Err(e) => log::debug!("Cache read failed for {url}: {e}"),
            }
        }

        log::debug!("GET {url}");
        let bytes = self.get(url, None).await?;

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.put(url, &bytes).await {
                log::debug!("Cache write failed for {url}: {e}");
            }
        }
        Ok(decode_utf8(&bytes))
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("GET {url} (uncached)");
        self.get(url, self.bytes_timeout).await
    }
}
