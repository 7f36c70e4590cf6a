//! Video collaborator traits: captions, audio download, transcription.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ResolveResult;

/// One caption fragment with its timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionFragment {
    /// Fragment text
    pub text: String,

    /// Offset from video start, in seconds
    pub start: f64,

    /// Fragment duration, in seconds
    pub duration: f64,
}

impl CaptionFragment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// Caption lookup for a video identifier.
///
/// Captions are a best-effort optimization: any failure here is a
/// fallback trigger for audio transcription, never a hard error.
#[async_trait]
pub trait CaptionSource: Send + Sync {
    /// Fetch caption fragments in chronological order.
    async fn fetch(&self, video_id: &str) -> ResolveResult<Vec<CaptionFragment>>;
}

/// Downloads best-available audio for a video URL.
#[async_trait]
pub trait AudioDownloader: Send + Sync {
    /// Download audio and return the local file path.
    ///
    /// The caller takes ownership of the file and is responsible for
    /// deleting it.
    async fn download(&self, url: &str) -> ResolveResult<PathBuf>;
}

/// Converts an audio file to text.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe the audio file at `path`. The file must exist.
    async fn transcribe(&self, path: &Path) -> ResolveResult<String>;
}
