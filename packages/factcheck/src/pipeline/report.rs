//! Report generation: verdicts to a prose summary.

use tracing::warn;

use crate::pipeline::prompts::format_summary_prompt;
use crate::traits::GenerativeModel;
use crate::types::Verdict;

/// Fixed fallback when summary generation cannot proceed.
pub const SUMMARY_FALLBACK: &str = "Summary generation failed.";

/// Ask the model for a short narrative summary of the verdicts.
///
/// Never errors: an empty verdict list or any model failure returns
/// [`SUMMARY_FALLBACK`].
pub async fn summarize<M: GenerativeModel>(model: &M, verdicts: &[Verdict]) -> String {
    if verdicts.is_empty() {
        return SUMMARY_FALLBACK.to_string();
    }

    let prompt = format_summary_prompt(&format_findings(verdicts));
    match model.generate(&prompt).await {
        Ok(summary) if !summary.trim().is_empty() => summary,
        Ok(_) => SUMMARY_FALLBACK.to_string(),
        Err(e) => {
            warn!(error = %e, "summary generation failed");
            SUMMARY_FALLBACK.to_string()
        }
    }
}

/// Render verdicts as `- <claim> (<STATUS>)` lines.
pub fn format_findings(verdicts: &[Verdict]) -> String {
    verdicts
        .iter()
        .map(|v| format!("- {} ({})", v.claim, v.status))
        .collect::<Vec<_>>()
        .join("\n")
}
