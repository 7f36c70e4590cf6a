//! HTTP article source.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::clients::BROWSER_USER_AGENT;
use crate::error::{ResolveError, ResolveResult};
use crate::html;
use crate::traits::ArticleSource;

/// Fetches articles over plain HTTP.
///
/// `fetch_extract` isolates the article body from the page;
/// `raw_fetch` returns the status and body untouched for the
/// resolver's fallback tier. Both share a 10 second timeout.
pub struct HttpArticleSource {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for HttpArticleSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpArticleSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: BROWSER_USER_AGENT.to_string(),
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    async fn get(&self, url: &str) -> ResolveResult<(u16, String)> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| ResolveError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ResolveError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        Ok((status, body))
    }
}

#[async_trait]
impl ArticleSource for HttpArticleSource {
    async fn fetch_extract(&self, url: &str) -> ResolveResult<Option<String>> {
        let (status, body) = self.get(url).await?;
        if status != 200 {
            debug!(url = %url, status = status, "fetch_extract non-200");
            return Ok(None);
        }
        Ok(html::extract_article(&body))
    }

    async fn raw_fetch(&self, url: &str) -> ResolveResult<(u16, String)> {
        self.get(url).await
    }
}
