//! Typed errors for the verification pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can
//! distinguish failure classes instead of uniformly receiving empty
//! values: resolution failures, model failures, and pipeline outcomes
//! are separate kinds.

use thiserror::Error;

/// Errors that can occur while resolving input into plain text.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No caption track could be fetched (fallback trigger, rarely surfaced)
    #[error("captions unavailable: {0}")]
    CaptionsUnavailable(String),

    /// Audio download failed (yt-dlp or equivalent)
    #[error("audio download failed: {0}")]
    AudioDownload(String),

    /// Speech-to-text failed
    #[error("transcription failed: {0}")]
    Transcription(String),

    /// HTTP fetch failed
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Non-200 response from the raw-fetch fallback
    #[error("unexpected HTTP status {0}")]
    BadStatus(u16),

    /// Stripped page text too short to be a real article
    #[error("extracted text too short ({len} chars)")]
    TooShort { len: usize },

    /// Both resolution tiers produced nothing usable
    #[error("no readable content at {url}")]
    NoContent { url: String },

    /// Filesystem error around the temporary audio file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the generative-text collaborator.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Configuration error (missing API key, invalid settings)
    #[error("model config error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("model network error: {0}")]
    Network(String),

    /// API error (non-2xx response, rate limit, blocked prompt)
    #[error("model API error: {0}")]
    Api(String),

    /// The model returned no usable text
    #[error("model returned empty response")]
    Empty,
}

/// Errors surfaced by the pipeline orchestrator.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Content could not be obtained
    #[error("resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    /// Model call failed at a stage that cannot degrade
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// Resolution succeeded but no claims were extracted
    #[error("no claims extracted from input")]
    NoClaims,
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Result type alias for resolution operations.
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Result type alias for model operations.
pub type ModelResult<T> = std::result::Result<T, ModelError>;
