//! Claim-Verification Pipeline
//!
//! Takes a URL (article, video) or raw text, resolves it into a plain
//! text payload, asks a language model to enumerate factual claims,
//! verifies each claim independently, and produces a short narrative
//! summary of the verdicts.
//!
//! # Design Philosophy
//!
//! **Degrade, don't die**
//!
//! - Retrieval is best-effort with explicit fallback chains
//! - Failures are caught at the narrowest scope and become typed
//!   error kinds, never panics
//! - One failed claim never aborts the batch
//! - The expensive path (audio transcription) runs only when the
//!   cheap path (captions) is unavailable
//!
//! # Usage
//!
//! ```rust,ignore
//! use factcheck::{
//!     ArticleResolver, ContentRouter, Pipeline, PipelineConfig, VideoResolver,
//! };
//! use factcheck::clients::{
//!     HttpArticleSource, WhisperTranscriber, YoutubeCaptions, YtDlpDownloader,
//! };
//! use factcheck::ai::GeminiModel;
//!
//! let config = PipelineConfig::new().with_max_claims(5);
//! let router = ContentRouter::new(
//!     VideoResolver::new(
//!         YoutubeCaptions::new(),
//!         YtDlpDownloader::new(),
//!         WhisperTranscriber::from_env()?,
//!     ),
//!     ArticleResolver::new(HttpArticleSource::new(), config.min_article_chars),
//! );
//! let pipeline = Pipeline::new(router, GeminiModel::from_env()?, config);
//!
//! let analysis = pipeline.run("https://example.com/news/story").await?;
//! for verdict in &analysis.verdicts {
//!     println!("[{}] {} — {}", verdict.status, verdict.claim, verdict.reason);
//! }
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Collaborator abstractions (model, captions, audio, articles)
//! - [`types`] - Domain types (content, claims, verdicts, config)
//! - [`resolver`] - Content router and the video/article resolvers
//! - [`pipeline`] - Extraction, verification, and report stages
//! - [`clients`] - Concrete collaborator implementations
//! - [`testing`] - Mock implementations for testing

pub mod ai;
pub mod clients;
pub mod error;
pub mod html;
pub mod pipeline;
pub mod resolver;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{ModelError, PipelineError, ResolveError, Result};
pub use traits::{
    article::ArticleSource,
    model::GenerativeModel,
    progress::{NullProgress, ProgressSink},
    video::{AudioDownloader, CaptionFragment, CaptionSource, Transcriber},
};
pub use types::{
    config::PipelineConfig,
    content::{Provenance, ResolvedContent, TRANSCRIPT_MARKER},
    verdict::{Claim, Verdict, VerdictStatus},
};

// Re-export the pipeline and resolvers
pub use pipeline::{
    extract_claims, format_findings, parse_claim_lines, parse_verdict, summarize, verify_claims,
    Analysis, Pipeline, SUMMARY_FALLBACK,
};
pub use resolver::{ArticleResolver, ContentRouter, VideoResolver};

#[cfg(feature = "gemini")]
pub use ai::GeminiModel;
