//! Pipeline orchestration: resolve, extract, verify, summarize.

pub mod extract;
pub mod prompts;
pub mod report;
pub mod verify;

pub use extract::{extract_claims, parse_claim_lines};
pub use report::{format_findings, summarize, SUMMARY_FALLBACK};
pub use verify::{parse_verdict, verify_claims};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{PipelineError, Result};
use crate::resolver::ContentRouter;
use crate::traits::{
    ArticleSource, AudioDownloader, CaptionSource, GenerativeModel, NullProgress, ProgressSink,
    Transcriber,
};
use crate::types::{Claim, PipelineConfig, Provenance, Verdict};

/// Full result of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Where the resolved text came from
    pub provenance: Provenance,

    /// One verdict per verified claim, in extraction order
    pub verdicts: Vec<Verdict>,

    /// Narrative summary of the verdicts
    pub summary: String,
}

/// Ties the router and the model into one request/response cycle.
///
/// Each stage owns and fully produces its output before handing it to
/// the next stage by value; a request runs to completion or failure
/// with no shared mutable state between stages.
pub struct Pipeline<C, D, T, S, M, P = NullProgress> {
    router: ContentRouter<C, D, T, S>,
    model: M,
    config: PipelineConfig,
    progress: P,
}

impl<C, D, T, S, M> Pipeline<C, D, T, S, M, NullProgress>
where
    C: CaptionSource,
    D: AudioDownloader,
    T: Transcriber,
    S: ArticleSource,
    M: GenerativeModel,
{
    pub fn new(router: ContentRouter<C, D, T, S>, model: M, config: PipelineConfig) -> Self {
        Self {
            router,
            model,
            config,
            progress: NullProgress,
        }
    }
}

impl<C, D, T, S, M, P> Pipeline<C, D, T, S, M, P>
where
    C: CaptionSource,
    D: AudioDownloader,
    T: Transcriber,
    S: ArticleSource,
    M: GenerativeModel,
    P: ProgressSink,
{
    /// Attach a progress sink for the verification stage.
    pub fn with_progress<P2: ProgressSink>(self, progress: P2) -> Pipeline<C, D, T, S, M, P2> {
        Pipeline {
            router: self.router,
            model: self.model,
            config: self.config,
            progress,
        }
    }

    /// Run the full pipeline on one input.
    pub async fn run(&self, input: &str) -> Result<Analysis> {
        let content = self.router.resolve(input).await?;
        info!(provenance = ?content.provenance, chars = content.char_len(), "content resolved");

        let claims = self.extract(&content.text).await;
        if claims.is_empty() {
            return Err(PipelineError::NoClaims);
        }

        // Cap the verified set; the extractor over-requests on purpose
        let claims: Vec<Claim> = claims.into_iter().take(self.config.max_claims).collect();
        info!(claims = claims.len(), "verifying claims");

        let verdicts = verify_claims(&self.model, &claims, &self.progress).await;
        let summary = summarize(&self.model, &verdicts).await;

        Ok(Analysis {
            provenance: content.provenance,
            verdicts,
            summary,
        })
    }

    /// Extract claims, degrading model failure to an empty list.
    pub async fn extract(&self, content: &str) -> Vec<Claim> {
        match extract_claims(&self.model, content, &self.config).await {
            Ok(claims) => claims,
            Err(e) => {
                warn!(error = %e, "claim extraction failed");
                Vec::new()
            }
        }
    }

    /// Verify claims through the configured model and progress sink.
    pub async fn verify(&self, claims: &[Claim]) -> Vec<Verdict> {
        verify_claims(&self.model, claims, &self.progress).await
    }

    /// Summarize verdicts through the configured model.
    pub async fn summarize(&self, verdicts: &[Verdict]) -> String {
        summarize(&self.model, verdicts).await
    }

    /// Resolve an input without running the later stages.
    pub async fn resolve(&self, input: &str) -> Result<crate::types::ResolvedContent> {
        Ok(self.router.resolve(input).await?)
    }
}
