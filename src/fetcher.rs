//! Page fetching for the harvesting pipeline
//!
//! A single unauthenticated GET per URL, returning the raw response body.
//! Fetch failures propagate to the caller: there is no retry and no per-URL
//! isolation, so a dead source aborts the run.

use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use std::time::Duration;
use tracing::{debug, instrument};

/// Timeout for page fetches in seconds
const FETCH_TIMEOUT_SECS: u64 = 60;

/// Source of raw page content
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Retrieve the raw response body for a URL
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP-backed [`PageFetcher`]
#[derive(Clone)]
pub struct HttpFetcher {
    client: ReqwestClient,
}

impl HttpFetcher {
    /// Create a new fetcher
    pub fn new() -> Self {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent(format!("medharvest/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    #[instrument(skip(self), level = "debug")]
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await.map_err(Error::Http)?;
        response.text().await.map_err(Error::Http)
    }
}
