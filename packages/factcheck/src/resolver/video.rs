//! Video resolution: caption-first with audio-transcription fallback.
//!
//! Captions are cheap and exact when available; audio transcription is
//! the expensive, universal fallback. Caption failures of any kind
//! (no recognizable ID, empty track, collaborator error) all trigger
//! the same fallback.

use regex::Regex;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::ResolveResult;
use crate::traits::{AudioDownloader, CaptionSource, Transcriber};
use crate::types::ResolvedContent;

/// Resolves a video URL to transcript text.
pub struct VideoResolver<C, D, T> {
    captions: C,
    downloader: D,
    transcriber: T,
}

impl<C, D, T> VideoResolver<C, D, T>
where
    C: CaptionSource,
    D: AudioDownloader,
    T: Transcriber,
{
    pub fn new(captions: C, downloader: D, transcriber: T) -> Self {
        Self {
            captions,
            downloader,
            transcriber,
        }
    }

    /// Resolve `url` into transcript content.
    pub async fn resolve(&self, url: &str) -> ResolveResult<ResolvedContent> {
        if url.contains("youtube.com") || url.contains("youtu.be") {
            if let Some(text) = self.try_captions(url).await {
                return Ok(ResolvedContent::transcript(text));
            }
        }

        info!(url = %url, "falling back to audio transcription");
        let path = self.downloader.download(url).await?;
        let audio = TempAudio::new(path);
        let text = self.transcriber.transcribe(audio.path()).await?;
        Ok(ResolvedContent::transcript(text))
    }

    /// Best-effort caption lookup. `None` means fall back to audio.
    async fn try_captions(&self, url: &str) -> Option<String> {
        let video_id = youtube_video_id(url)?;

        match self.captions.fetch(&video_id).await {
            Ok(fragments) if !fragments.is_empty() => {
                debug!(video_id = %video_id, fragments = fragments.len(), "captions found");
                let joined = fragments
                    .iter()
                    .map(|f| f.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                Some(joined)
            }
            Ok(_) => {
                debug!(video_id = %video_id, "caption track empty");
                None
            }
            Err(e) => {
                debug!(video_id = %video_id, error = %e, "caption lookup failed");
                None
            }
        }
    }
}

/// Extract an 11-character YouTube video identifier from a URL.
pub fn youtube_video_id(url: &str) -> Option<String> {
    let pattern = Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").unwrap();
    pattern
        .captures(url)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

/// Owns a temporary audio file and removes it on drop.
///
/// Deletion happens on every exit path out of the resolver: normal
/// return, error return, or cancellation of the enclosing future.
struct TempAudio {
    path: PathBuf,
}

impl TempAudio {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for TempAudio {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "deleted temp audio file"),
            // Missing file is fine; the download may never have landed
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => debug!(path = %self.path.display(), error = %e, "temp audio cleanup failed"),
        }
    }
}
