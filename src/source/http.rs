// src/source/http.rs
// =============================================================================
// Downloads a web page so we can extract links from it.
//
// One GET request with a bounded duration. Redirects are followed (up to a
// limit), and anything other than a 2xx answer is an error.
// =============================================================================

use std::time::Duration;

use reqwest::{redirect, Client};
use tracing::debug;

use crate::error::{Error, Result};

/// How long a page download may take before we give up
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(25);

const MAX_REDIRECTS: usize = 10;

/// Fetches `url` and returns the response body as text.
pub async fn fetch_html(url: &str, timeout: Duration) -> Result<String> {
    let request_error = |e: reqwest::Error| Error::Request(url.to_string(), e);

    let client = Client::builder()
        .timeout(timeout)
        .redirect(redirect::Policy::limited(MAX_REDIRECTS))
        .build()
        .map_err(request_error)?;

    debug!(url, ?timeout, "fetching page");
    let response = client.get(url).send().await.map_err(request_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus(url.to_string(), status.as_u16()));
    }

    let body = response.text().await.map_err(request_error)?;
    debug!(url, bytes = body.len(), "fetched page");
    Ok(body)
}
