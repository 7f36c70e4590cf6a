//! Configuration for the verification pipeline.
//!
//! Passed by value through every stage; there is no ambient state.

use serde::{Deserialize, Serialize};

/// Tunable limits for the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Maximum claims to verify per request.
    ///
    /// The extractor requests `max_claims + claim_margin` candidates
    /// and the orchestrator caps the verified set at this count.
    /// Default: 3.
    pub max_claims: usize,

    /// Extra candidates requested to absorb near-duplicate or
    /// malformed bullets culled downstream. Default: 2.
    pub claim_margin: usize,

    /// Token-budget guard: content is truncated to this many
    /// characters before claim extraction. Default: 15000.
    pub max_content_chars: usize,

    /// Minimum content length for claim extraction to proceed.
    /// Default: 50.
    pub min_content_chars: usize,

    /// Minimum stripped-text length for the raw-HTML article
    /// fallback to count as a real page. Default: 100.
    pub min_article_chars: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_claims: 3,
            claim_margin: 2,
            max_content_chars: 15_000,
            min_content_chars: 50,
            min_article_chars: 100,
        }
    }
}

impl PipelineConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of claims to verify.
    pub fn with_max_claims(mut self, max_claims: usize) -> Self {
        self.max_claims = max_claims;
        self
    }

    /// Set the content truncation limit.
    pub fn with_max_content_chars(mut self, chars: usize) -> Self {
        self.max_content_chars = chars;
        self
    }

    /// Set the minimum content length for extraction.
    pub fn with_min_content_chars(mut self, chars: usize) -> Self {
        self.min_content_chars = chars;
        self
    }
}
