//! Resolved content and its provenance.

use serde::{Deserialize, Serialize};

/// Marker prepended to transcript-derived content.
pub const TRANSCRIPT_MARKER: &str = "TRANSCRIPT:\n";

/// Where resolved text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Video captions or audio transcription
    Transcript,
    /// Fetched and extracted article
    Article,
    /// Input passed through verbatim
    Raw,
}

/// Plain text ready for claim extraction.
///
/// Invariant: `text` is non-empty when resolution succeeds. Transcript
/// content carries the `TRANSCRIPT:` marker prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedContent {
    pub text: String,
    pub provenance: Provenance,
}

impl ResolvedContent {
    /// Wrap transcript text, adding the marker prefix.
    pub fn transcript(text: impl Into<String>) -> Self {
        Self {
            text: format!("{}{}", TRANSCRIPT_MARKER, text.into()),
            provenance: Provenance::Transcript,
        }
    }

    /// Wrap extracted article text.
    pub fn article(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            provenance: Provenance::Article,
        }
    }

    /// Pass input through verbatim.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            provenance: Provenance::Raw,
        }
    }

    /// Content length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
