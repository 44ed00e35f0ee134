//! Outbound page transport.
//!
//! Extraction fetches pages through the [`PageFetcher`] capability so the
//! scan logic can be exercised against canned responses instead of live
//! network access.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use sitesmith_shared::{Result, SitesmithError};

/// User-Agent string for outbound fetches.
const USER_AGENT: &str = concat!("Sitesmith/", env!("CARGO_PKG_VERSION"));

/// Transport capability for fetching a page body.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the resource at `url` and return its body as text.
    ///
    /// Non-2xx statuses are errors; the caller treats every error the
    /// same way (placeholder fallback), so no status detail survives.
    async fn fetch(&self, url: &Url) -> Result<String>;
}

/// Production fetcher backed by a shared `reqwest` client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the standard client settings.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SitesmithError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| SitesmithError::Network(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SitesmithError::Network(format!("{url}: HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| SitesmithError::Network(format!("{url}: body read failed: {e}")))
    }
}
