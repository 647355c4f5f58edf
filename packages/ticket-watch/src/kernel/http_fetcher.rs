//! Page fetcher over reqwest.
//!
//! Event pages hand out a session cookie on the first visit and only render
//! the ticket widget when it is sent back, so each fetch is two GETs against
//! a client with a cookie store:
//! - a priming request whose body is discarded
//! - the real request whose body is returned
//!
//! No JavaScript rendering.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::BasePageFetcher;
use crate::error::{CheckError, CheckResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new() -> Result<Self> {
        // Use a browser-like User-Agent to avoid bot detection
        let user_agent = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static("en-US,en;q=0.5"),
        );

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .default_headers(headers)
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> CheckResult<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| CheckError::fetch(url, e))
    }
}

#[async_trait]
impl BasePageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> CheckResult<String> {
        debug!(url = %url, "Priming session cookies");
        let priming = self.get(url).await?;
        debug!(url = %url, status = %priming.status(), "Priming request done");

        let response = self.get(url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CheckError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| CheckError::fetch(url, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_creation() {
        assert!(HttpPageFetcher::new().is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        let fetcher = HttpPageFetcher::new().unwrap();
        // Port 9 (discard) on localhost is closed in any sane test environment
        let result = fetcher.fetch("http://127.0.0.1:9/").await;
        assert!(matches!(result, Err(CheckError::Fetch { .. })));
    }

    #[tokio::test]
    #[ignore] // Requires network access to hyrox.com
    async fn test_fetch_live_event_page() {
        let fetcher = HttpPageFetcher::new().unwrap();
        let html = fetcher
            .fetch("https://hyrox.com/event/hyrox-anaheim/")
            .await
            .expect("fetch failed");
        assert!(html.contains("<body"));
    }
}
