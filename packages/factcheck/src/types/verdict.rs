//! Claims and verdicts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single extracted factual assertion, pending verification.
///
/// Created by the claim extractor; consumed, never mutated, by the
/// verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub text: String,
}

impl Claim {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Verification outcome for one claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerdictStatus {
    Supported,
    Contradicted,
    /// Default / fail-safe class
    Inconclusive,
}

impl fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VerdictStatus::Supported => "SUPPORTED",
            VerdictStatus::Contradicted => "CONTRADICTED",
            VerdictStatus::Inconclusive => "INCONCLUSIVE",
        };
        f.write_str(s)
    }
}

/// The outcome of verifying exactly one claim. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub claim: String,
    pub status: VerdictStatus,
    pub reason: String,
}

impl Verdict {
    pub fn new(
        claim: impl Into<String>,
        status: VerdictStatus,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            claim: claim.into(),
            status,
            reason: reason.into(),
        }
    }

    /// Fail-safe verdict for a claim whose model call failed.
    pub fn api_error(claim: impl Into<String>) -> Self {
        Self::new(claim, VerdictStatus::Inconclusive, "API Error.")
    }
}
