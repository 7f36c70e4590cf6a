//! Verify Input - Reference Implementation
//!
//! End-to-end run of the verification pipeline against a real URL or
//! a raw text snippet, with Gemini as the generative model.
//!
//! Requires `GEMINI_API_KEY` (always) and `OPENAI_API_KEY` (only when
//! resolving a video without captions, for Whisper transcription).
//!
//! ```bash
//! cargo run --example verify_input --features gemini -- "https://example.com/article"
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use factcheck::ai::GeminiModel;
use factcheck::clients::{
    HttpArticleSource, WhisperTranscriber, YoutubeCaptions, YtDlpDownloader,
};
use factcheck::{
    ArticleResolver, ContentRouter, Pipeline, PipelineConfig, ProgressSink, VideoResolver,
};

/// Prints verification progress to stderr.
struct StderrProgress;

impl ProgressSink for StderrProgress {
    fn update(&self, completed: usize, total: usize) {
        eprintln!("  verified {}/{}", completed, total);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,factcheck=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let input = std::env::args()
        .nth(1)
        .ok_or("usage: verify_input <url-or-text>")?;

    let config = PipelineConfig::new().with_max_claims(3);
    let router = ContentRouter::new(
        VideoResolver::new(
            YoutubeCaptions::new(),
            YtDlpDownloader::new(),
            WhisperTranscriber::from_env()?,
        ),
        ArticleResolver::new(HttpArticleSource::new(), config.min_article_chars),
    );

    let pipeline =
        Pipeline::new(router, GeminiModel::from_env()?, config).with_progress(StderrProgress);

    let analysis = pipeline.run(&input).await?;

    println!("source: {:?}\n", analysis.provenance);
    for verdict in &analysis.verdicts {
        println!("[{}] {}", verdict.status, verdict.claim);
        println!("    {}\n", verdict.reason);
    }
    println!("summary:\n{}", analysis.summary);

    Ok(())
}
