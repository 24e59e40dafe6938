//! HTTP fetching for directory pages.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::REQUEST_TIMEOUT;
use crate::error::CardsError;

/// A fetched resource: whatever status and body the server returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

impl Page {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Source of directory pages.
///
/// Non-2xx responses are returned as pages, not errors; only a request that
/// could not be completed fails.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<Page, CardsError>;
}

/// Fetcher backed by a `reqwest` client with a bounded timeout.
pub struct DirectoryClient {
    http: reqwest::Client,
}

impl DirectoryClient {
    pub fn new() -> Result<Self, CardsError> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, CardsError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Fetcher for DirectoryClient {
    async fn fetch(&self, url: &str) -> Result<Page, CardsError> {
        tracing::debug!(url, "fetching directory page");
        let resp = self.http.get(url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        tracing::debug!(status, bytes = body.len(), "received response");
        Ok(Page { status, body })
    }
}
