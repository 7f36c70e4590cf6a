//! Article fetch collaborator trait.

use async_trait::async_trait;

use crate::error::ResolveResult;

/// Two-tier article retrieval.
///
/// Tier 1 (`fetch_extract`) performs structured, boilerplate-free
/// extraction; tier 2 (`raw_fetch`) is a plain GET whose body the
/// resolver strips down itself.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch the URL and run structured content extraction.
    ///
    /// Returns `Ok(None)` when the page was fetched but no article
    /// body could be isolated.
    async fn fetch_extract(&self, url: &str) -> ResolveResult<Option<String>>;

    /// Plain HTTP GET with a browser-like user agent.
    ///
    /// Returns the status code and the raw body.
    async fn raw_fetch(&self, url: &str) -> ResolveResult<(u16, String)>;
}
