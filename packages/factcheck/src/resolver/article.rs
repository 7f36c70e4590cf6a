//! Article resolution: structured extraction, then raw-HTML fallback.

use tracing::debug;

use crate::error::{ResolveError, ResolveResult};
use crate::html;
use crate::traits::ArticleSource;
use crate::types::ResolvedContent;

/// Resolves an article URL to extracted text.
///
/// Two tiers, no retries beyond them: structured extraction first,
/// then a plain GET whose body is stripped down to flat text and kept
/// only if longer than `min_chars` (a heuristic against near-empty or
/// error pages).
pub struct ArticleResolver<S> {
    source: S,
    min_chars: usize,
}

impl<S: ArticleSource> ArticleResolver<S> {
    pub fn new(source: S, min_chars: usize) -> Self {
        Self { source, min_chars }
    }

    /// Resolve `url` into article content.
    pub async fn resolve(&self, url: &str) -> ResolveResult<ResolvedContent> {
        match self.source.fetch_extract(url).await {
            Ok(Some(text)) if !text.trim().is_empty() => {
                debug!(url = %url, chars = text.chars().count(), "structured extraction succeeded");
                return Ok(ResolvedContent::article(text));
            }
            Ok(_) => debug!(url = %url, "structured extraction empty, trying raw fetch"),
            Err(e) => debug!(url = %url, error = %e, "structured extraction failed, trying raw fetch"),
        }

        let (status, body) = self.source.raw_fetch(url).await?;
        if status != 200 {
            return Err(ResolveError::BadStatus(status));
        }

        let text = html::html_to_text(&body);
        let len = text.chars().count();
        if len > self.min_chars {
            Ok(ResolvedContent::article(text))
        } else {
            Err(ResolveError::TooShort { len })
        }
    }
}
