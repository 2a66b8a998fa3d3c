// src/extract/extractor.rs
// =============================================================================
// LinkExtractor: turns HTML text into a list of UrlReference values.
//
// Pipeline (identical for every source):
//   HTML text -> pattern scan -> raw href values -> optional dedup
//             -> UrlReference bound to the extractor's base URL
//
// The extractor only stores its base URL. Every call is independent, so one
// extractor can be shared freely between threads.
// =============================================================================

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use tracing::debug;

use super::pattern::href_values;
use crate::error::{Error, Result};
use crate::link::{LinkInfo, UrlReference};
use crate::source;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkExtractor {
    base_url: Option<String>,
}

impl LinkExtractor {
    /// Creates an extractor whose links are resolved against `base_url`.
    ///
    /// Trailing slashes are stripped; an empty base means "no base".
    pub fn new(base_url: Option<&str>) -> Self {
        let base_url = base_url
            .map(|b| b.trim_end_matches('/'))
            .filter(|b| !b.trim().is_empty())
            .map(str::to_string);

        LinkExtractor { base_url }
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Extracts links from HTML text held in memory.
    ///
    /// With `unique` set, repeated href values are kept only once (first
    /// occurrence wins). Empty input yields an empty list.
    pub fn extract_from_html(&self, html: &str, unique: bool) -> Vec<UrlReference> {
        if html.is_empty() {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        let links: Vec<UrlReference> = href_values(html)
            .filter(|raw| !unique || seen.insert(*raw))
            .map(|raw| UrlReference::new(raw, self.base_url()))
            .collect();

        debug!(count = links.len(), unique, "extracted links from HTML");
        links
    }

    /// Reads an .html/.htm file and extracts its links.
    pub fn extract_from_file(&self, path: impl AsRef<Path>, unique: bool) -> Result<Vec<UrlReference>> {
        let html = source::read_html_file(path.as_ref())?;
        Ok(self.extract_from_html(&html, unique))
    }

    /// Downloads the page at the base URL and extracts its links.
    ///
    /// Fails with `Error::MissingBaseUrl` when no base URL is configured.
    pub async fn extract_from_url(&self, unique: bool) -> Result<Vec<UrlReference>> {
        self.extract_from_url_with_timeout(unique, source::DEFAULT_TIMEOUT)
            .await
    }

    /// Like `extract_from_url`, with a custom request timeout
    pub async fn extract_from_url_with_timeout(
        &self,
        unique: bool,
        timeout: Duration,
    ) -> Result<Vec<UrlReference>> {
        let url = self.base_url().ok_or(Error::MissingBaseUrl {
            operation: "extract_from_url",
        })?;

        let html = source::fetch_html(url, timeout).await?;
        Ok(self.extract_from_html(&html, unique))
    }

    /// Summarizes each link as a `LinkInfo`
    pub fn validate(links: &[UrlReference]) -> Vec<LinkInfo> {
        links.iter().map(UrlReference::info).collect()
    }
}

/// One-shot extraction from HTML text without keeping an extractor around
pub fn extract(html: &str, base_url: Option<&str>, unique: bool) -> Vec<UrlReference> {
    LinkExtractor::new(base_url).extract_from_html(html, unique)
}
