//! Content acquisition: router plus the per-class resolvers.

pub mod article;
pub mod video;

pub use article::ArticleResolver;
pub use video::VideoResolver;

use tracing::{debug, warn};

use crate::error::ResolveResult;
use crate::traits::{ArticleSource, AudioDownloader, CaptionSource, Transcriber};
use crate::types::ResolvedContent;

/// Hosting substrings that route an input to the video resolver.
const VIDEO_DOMAINS: [&str; 5] = [
    "youtube.com",
    "youtu.be",
    "instagram.com/reel",
    "tiktok.com",
    "vimeo.com",
];

/// Resolves an arbitrary input string to plain text.
///
/// Decision order, first match wins:
/// 1. video-hosting substring → [`VideoResolver`]
/// 2. `http://` / `https://` / `www.` prefix → [`ArticleResolver`]
/// 3. anything else passes through verbatim as raw text
pub struct ContentRouter<C, D, T, S> {
    video: VideoResolver<C, D, T>,
    article: ArticleResolver<S>,
}

impl<C, D, T, S> ContentRouter<C, D, T, S>
where
    C: CaptionSource,
    D: AudioDownloader,
    T: Transcriber,
    S: ArticleSource,
{
    pub fn new(video: VideoResolver<C, D, T>, article: ArticleResolver<S>) -> Self {
        Self { video, article }
    }

    /// Resolve `input` into plain text.
    ///
    /// Once a branch is entered, no further branches are tried; a
    /// failing branch surfaces its own error.
    pub async fn resolve(&self, input: &str) -> ResolveResult<ResolvedContent> {
        if VIDEO_DOMAINS.iter().any(|d| input.contains(d)) {
            debug!(input = %input, "routing to video resolver");
            return self.video.resolve(input).await.map_err(|e| {
                warn!(input = %input, error = %e, "video resolution failed");
                e
            });
        }

        if input.starts_with("http://")
            || input.starts_with("https://")
            || input.starts_with("www.")
        {
            debug!(input = %input, "routing to article resolver");
            return self.article.resolve(input).await.map_err(|e| {
                warn!(input = %input, error = %e, "article resolution failed");
                e
            });
        }

        debug!("treating input as raw text");
        Ok(ResolvedContent::raw(input))
    }
}

/// Whether the router would classify `input` as a video URL.
pub fn is_video_url(input: &str) -> bool {
    VIDEO_DOMAINS.iter().any(|d| input.contains(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_domains_match_inside_urls() {
        assert!(is_video_url("https://www.youtube.com/watch?v=abc"));
        assert!(is_video_url("https://youtu.be/dQw4w9WgXcQ1"));
        assert!(is_video_url("https://www.instagram.com/reel/xyz/"));
        assert!(is_video_url("https://www.tiktok.com/@u/video/1"));
        assert!(is_video_url("https://vimeo.com/12345"));
    }

    #[test]
    fn test_plain_articles_not_video() {
        assert!(!is_video_url("https://example.com/news/story"));
        assert!(!is_video_url("www.example.org"));
        assert!(!is_video_url("just some raw text"));
    }
}
