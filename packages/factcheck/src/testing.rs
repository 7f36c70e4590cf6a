//! Testing utilities including mock collaborators.
//!
//! These are useful for testing applications that use the pipeline
//! without real model or network calls. All mocks track their calls
//! for assertions.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::error::{ModelError, ModelResult, ResolveError, ResolveResult};
use crate::traits::{
    ArticleSource, AudioDownloader, CaptionFragment, CaptionSource, GenerativeModel,
    ProgressSink, Transcriber,
};

/// A mock generative model with scripted replies.
///
/// Replies are consumed in order; once the script is exhausted the
/// default reply is returned. Every prompt is recorded.
#[derive(Default, Clone)]
pub struct MockModel {
    replies: Arc<Mutex<VecDeque<ModelResult<String>>>>,
    default_reply: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(reply.into()));
        self
    }

    /// Queue a failed call.
    pub fn with_failure(self) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(ModelError::Api("mock failure".to_string())));
        self
    }

    /// Reply used once the queue is exhausted.
    pub fn with_default_reply(mut self, reply: impl Into<String>) -> Self {
        self.default_reply = Some(reply.into());
        self
    }

    /// All prompts sent to this mock, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Number of calls made.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerativeModel for MockModel {
    async fn generate(&self, prompt: &str) -> ModelResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(scripted) = self.replies.lock().unwrap().pop_front() {
            return scripted;
        }
        match &self.default_reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(ModelError::Api("mock script exhausted".to_string())),
        }
    }
}

/// A mock caption source.
#[derive(Default, Clone)]
pub struct MockCaptions {
    fragments: Option<Vec<CaptionFragment>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockCaptions {
    /// Captions are unavailable (forces the audio fallback).
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Serve these fragments for any video id.
    pub fn with_fragments(fragments: Vec<CaptionFragment>) -> Self {
        Self {
            fragments: Some(fragments),
            calls: Arc::default(),
        }
    }

    /// Video ids that were looked up.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CaptionSource for MockCaptions {
    async fn fetch(&self, video_id: &str) -> ResolveResult<Vec<CaptionFragment>> {
        self.calls.lock().unwrap().push(video_id.to_string());
        match &self.fragments {
            Some(fragments) => Ok(fragments.clone()),
            None => Err(ResolveError::CaptionsUnavailable("mock".to_string())),
        }
    }
}

/// A mock audio downloader that writes a real temporary file, so
/// cleanup behavior can be observed from tests.
#[derive(Default, Clone)]
pub struct MockDownloader {
    fail: bool,
    last_path: Arc<Mutex<Option<PathBuf>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every download fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Path of the most recently created file, if any.
    pub fn last_path(&self) -> Option<PathBuf> {
        self.last_path.lock().unwrap().clone()
    }

    /// URLs that were downloaded.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of downloads attempted.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AudioDownloader for MockDownloader {
    async fn download(&self, url: &str) -> ResolveResult<PathBuf> {
        self.calls.lock().unwrap().push(url.to_string());

        if self.fail {
            return Err(ResolveError::AudioDownload("mock download failure".into()));
        }

        let path = std::env::temp_dir().join(format!("mock_audio_{}.mp3", Uuid::new_v4().simple()));
        tokio::fs::write(&path, b"not really audio").await?;
        *self.last_path.lock().unwrap() = Some(path.clone());
        Ok(path)
    }
}

/// A mock transcriber.
#[derive(Default, Clone)]
pub struct MockTranscriber {
    text: Option<String>,
    calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockTranscriber {
    /// Return this text for any file.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            calls: Arc::default(),
        }
    }

    /// Every transcription fails.
    pub fn failing() -> Self {
        Self::default()
    }

    /// Paths that were transcribed.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(&self, path: &Path) -> ResolveResult<String> {
        self.calls.lock().unwrap().push(path.to_path_buf());
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => Err(ResolveError::Transcription("mock transcriber failure".into())),
        }
    }
}

/// A mock article source.
#[derive(Default, Clone)]
pub struct MockArticleSource {
    extracted: Option<String>,
    raw: Option<(u16, String)>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockArticleSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tier 1 structured extraction succeeds with this text.
    pub fn with_extracted(mut self, text: impl Into<String>) -> Self {
        self.extracted = Some(text.into());
        self
    }

    /// Tier 2 raw fetch returns this status and body.
    pub fn with_raw(mut self, status: u16, body: impl Into<String>) -> Self {
        self.raw = Some((status, body.into()));
        self
    }

    /// URLs fetched (both tiers).
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of fetches across both tiers.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ArticleSource for MockArticleSource {
    async fn fetch_extract(&self, url: &str) -> ResolveResult<Option<String>> {
        self.calls.lock().unwrap().push(url.to_string());
        Ok(self.extracted.clone())
    }

    async fn raw_fetch(&self, url: &str) -> ResolveResult<(u16, String)> {
        self.calls.lock().unwrap().push(url.to_string());
        match &self.raw {
            Some((status, body)) => Ok((*status, body.clone())),
            None => Err(ResolveError::Fetch {
                url: url.to_string(),
                reason: "mock has no raw response".to_string(),
            }),
        }
    }
}

/// A progress sink that records every update.
#[derive(Default, Clone)]
pub struct RecordingProgress {
    updates: Arc<Mutex<Vec<(usize, usize)>>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(completed, total)` pairs, in order.
    pub fn updates(&self) -> Vec<(usize, usize)> {
        self.updates.lock().unwrap().clone()
    }
}

impl ProgressSink for RecordingProgress {
    fn update(&self, completed: usize, total: usize) {
        self.updates.lock().unwrap().push((completed, total));
    }
}
