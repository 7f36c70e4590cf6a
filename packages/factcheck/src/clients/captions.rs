//! YouTube caption lookup.
//!
//! No official API: the watch page embeds the available caption tracks
//! as JSON, and each track URL serves timedtext XML. Parsing is
//! regex-based and deliberately failure-tolerant, since any error here
//! only triggers the audio fallback.

use async_trait::async_trait;
use regex::Regex;
use tracing::debug;

use crate::error::{ResolveError, ResolveResult};
use crate::traits::{CaptionFragment, CaptionSource};

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Caption source backed by the public watch page.
pub struct YoutubeCaptions {
    client: reqwest::Client,
}

impl Default for YoutubeCaptions {
    fn default() -> Self {
        Self::new()
    }
}

impl YoutubeCaptions {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn get(&self, url: &str) -> ResolveResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ResolveError::CaptionsUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ResolveError::CaptionsUnavailable(format!(
                "HTTP {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| ResolveError::CaptionsUnavailable(e.to_string()))
    }
}

#[async_trait]
impl CaptionSource for YoutubeCaptions {
    async fn fetch(&self, video_id: &str) -> ResolveResult<Vec<CaptionFragment>> {
        let watch_html = self.get(&format!("{}{}", WATCH_URL, video_id)).await?;

        let track_url = first_caption_track(&watch_html).ok_or_else(|| {
            ResolveError::CaptionsUnavailable(format!("no caption track for {}", video_id))
        })?;

        debug!(video_id = %video_id, "caption track located");
        let xml = self.get(&track_url).await?;
        let fragments = parse_timedtext(&xml);

        if fragments.is_empty() {
            return Err(ResolveError::CaptionsUnavailable(format!(
                "empty caption track for {}",
                video_id
            )));
        }
        Ok(fragments)
    }
}

/// Locate the first caption track URL in the watch-page JSON.
pub(crate) fn first_caption_track(watch_html: &str) -> Option<String> {
    let pattern = Regex::new(r#""captionTracks":\[\{"baseUrl":"([^"]+)""#).unwrap();
    let raw = pattern.captures(watch_html)?.get(1)?.as_str();
    // The URL is JSON-escaped inside the page source
    Some(raw.replace("\\u0026", "&").replace("\\/", "/"))
}

/// Parse timedtext XML into ordered caption fragments.
pub(crate) fn parse_timedtext(xml: &str) -> Vec<CaptionFragment> {
    let pattern =
        Regex::new(r#"<text start="([0-9.]+)" dur="([0-9.]+)"[^>]*>(.*?)</text>"#).unwrap();

    pattern
        .captures_iter(xml)
        .filter_map(|cap| {
            let start: f64 = cap.get(1)?.as_str().parse().ok()?;
            let duration: f64 = cap.get(2)?.as_str().parse().ok()?;
            let text = decode_caption_text(cap.get(3)?.as_str());
            if text.is_empty() {
                None
            } else {
                Some(CaptionFragment::new(text, start, duration))
            }
        })
        .collect()
}

fn decode_caption_text(raw: &str) -> String {
    raw.replace("&amp;#39;", "'")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .trim()
        .to_string()
}
