//! Claim verification: one model call per claim, strictly sequential.
//!
//! Sequential execution keeps verdict ordering and the progress
//! indicator deterministic. A single failed claim never aborts the
//! batch.

use tracing::{debug, warn};

use crate::pipeline::prompts::format_verify_prompt;
use crate::traits::{GenerativeModel, ProgressSink};
use crate::types::{Claim, Verdict, VerdictStatus};

/// Default reason when the response carries no `Reason:` line.
const DEFAULT_REASON: &str = "Unable to verify.";

/// Verify each claim in order, producing one verdict per claim.
///
/// `progress.update` is invoked after every completed claim; the last
/// call reports `(claims.len(), claims.len())`.
pub async fn verify_claims<M, P>(model: &M, claims: &[Claim], progress: &P) -> Vec<Verdict>
where
    M: GenerativeModel,
    P: ProgressSink,
{
    let total = claims.len();
    let mut verdicts = Vec::with_capacity(total);

    for (i, claim) in claims.iter().enumerate() {
        let prompt = format_verify_prompt(&claim.text);

        let verdict = match model.generate(&prompt).await {
            Ok(response) => parse_verdict(&claim.text, &response),
            Err(e) => {
                warn!(claim = %claim.text, error = %e, "verification call failed");
                Verdict::api_error(&claim.text)
            }
        };

        debug!(claim = %claim.text, status = %verdict.status, "claim verified");
        verdicts.push(verdict);
        progress.update(i + 1, total);
    }

    verdicts
}

/// Parse a model response into a verdict for `claim`.
///
/// Scans lines for `Status:` and `Reason:` markers, taking the text
/// after the first colon. The status token is trimmed, upper-cased,
/// and stripped of `*` characters before normalization.
pub fn parse_verdict(claim: &str, response: &str) -> Verdict {
    let mut status = VerdictStatus::Inconclusive;
    let mut reason = DEFAULT_REASON.to_string();

    for line in response.lines() {
        if line.contains("Status:") {
            if let Some(value) = after_first_colon(line) {
                status = normalize_status(&value.trim().to_uppercase().replace('*', ""));
            }
        }
        if line.contains("Reason:") {
            if let Some(value) = after_first_colon(line) {
                let value = value.trim();
                if !value.is_empty() {
                    reason = value.to_string();
                }
            }
        }
    }

    Verdict::new(claim, status, reason)
}

/// Normalize a raw status token by substring containment.
///
/// Inconclusive is the fail-safe class for anything unrecognized.
fn normalize_status(raw: &str) -> VerdictStatus {
    if raw.contains("SUPPORT") {
        VerdictStatus::Supported
    } else if raw.contains("CONTRADICT") {
        VerdictStatus::Contradicted
    } else {
        VerdictStatus::Inconclusive
    }
}

fn after_first_colon(line: &str) -> Option<&str> {
    line.splitn(2, ':').nth(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_and_reason() {
        let response = "Status: CONTRADICTED\nReason: Data mismatch.";
        let verdict = parse_verdict("The claim.", response);

        assert_eq!(verdict.status, VerdictStatus::Contradicted);
        assert_eq!(verdict.reason, "Data mismatch.");
        assert_eq!(verdict.claim, "The claim.");
    }

    #[test]
    fn test_parse_strips_markdown_emphasis() {
        let response = "Status: **SUPPORTED**\nReason: Well documented.";
        let verdict = parse_verdict("c", response);
        assert_eq!(verdict.status, VerdictStatus::Supported);
    }

    #[test]
    fn test_parse_normalizes_by_substring() {
        let verdict = parse_verdict("c", "Status: the claim is supported by evidence");
        assert_eq!(verdict.status, VerdictStatus::Supported);

        let verdict = parse_verdict("c", "Status: contradicts known data");
        assert_eq!(verdict.status, VerdictStatus::Contradicted);
    }

    #[test]
    fn test_parse_defaults_when_markers_missing() {
        let verdict = parse_verdict("c", "I cannot help with that.");
        assert_eq!(verdict.status, VerdictStatus::Inconclusive);
        assert_eq!(verdict.reason, DEFAULT_REASON);
    }

    #[test]
    fn test_parse_takes_text_after_first_colon() {
        let verdict = parse_verdict("c", "Reason: ratio was 2:1 last year.\nStatus: SUPPORTED");
        assert_eq!(verdict.reason, "ratio was 2:1 last year.");
        assert_eq!(verdict.status, VerdictStatus::Supported);
    }
}
