//! Claim extraction: resolved text to candidate factual claims.

use tracing::{debug, warn};

use crate::error::ModelResult;
use crate::pipeline::prompts::format_extract_prompt;
use crate::traits::GenerativeModel;
use crate::types::{Claim, PipelineConfig};

/// Lines whose cleaned length is at or below this are discarded as
/// noise (stray bullets, headings, empty fragments).
const MIN_CLAIM_CHARS: usize = 5;

/// Extract candidate claims from resolved content.
///
/// Short input (below `config.min_content_chars`) returns an empty
/// list without a model call. Content is truncated to
/// `config.max_content_chars` characters as a token-budget guard, and
/// `max_claims + claim_margin` candidates are requested so that
/// near-duplicate or malformed bullets can be culled downstream.
pub async fn extract_claims<M: GenerativeModel>(
    model: &M,
    content: &str,
    config: &PipelineConfig,
) -> ModelResult<Vec<Claim>> {
    if content.chars().count() < config.min_content_chars {
        warn!(
            chars = content.chars().count(),
            min = config.min_content_chars,
            "input too short for analysis"
        );
        return Ok(Vec::new());
    }

    let truncated: String = content.chars().take(config.max_content_chars).collect();
    let requested = config.max_claims + config.claim_margin;
    let prompt = format_extract_prompt(requested, &truncated);

    let response = model.generate(&prompt).await?;
    let claims = parse_claim_lines(&response);
    debug!(requested = requested, parsed = claims.len(), "claims extracted");
    Ok(claims)
}

/// Parse a bullet-list response into claims, preserving order.
///
/// Strips leading bullet/numbering punctuation and whitespace from
/// each line and drops lines that are too short to be claims.
pub fn parse_claim_lines(response: &str) -> Vec<Claim> {
    response
        .lines()
        .map(clean_claim_line)
        .filter(|line| line.chars().count() > MIN_CLAIM_CHARS)
        .map(Claim::new)
        .collect()
}

fn clean_claim_line(line: &str) -> &str {
    line.trim()
        .trim_start_matches(|c: char| {
            c.is_ascii_digit() || c.is_whitespace() || matches!(c, '*' | '-' | '•' | '.' | ')')
        })
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_bullets_and_numbering() {
        let response = "* First claim about a thing.\n- Second claim here.\n3. Third claim stands.";
        let claims = parse_claim_lines(response);

        assert_eq!(claims.len(), 3);
        assert_eq!(claims[0].text, "First claim about a thing.");
        assert_eq!(claims[1].text, "Second claim here.");
        assert_eq!(claims[2].text, "Third claim stands.");
    }

    #[test]
    fn test_parse_discards_noise_lines() {
        let response = "* A real claim with substance.\n*\n- ok\n\n   ";
        let claims = parse_claim_lines(response);

        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].text, "A real claim with substance.");
    }

    #[test]
    fn test_parse_preserves_order() {
        let response = "1. zebra claim text\n2. apple claim text";
        let claims = parse_claim_lines(response);

        assert_eq!(claims[0].text, "zebra claim text");
        assert_eq!(claims[1].text, "apple claim text");
    }

    #[test]
    fn test_clean_keeps_interior_punctuation() {
        assert_eq!(
            clean_claim_line("- GDP grew 2.5% in 2023."),
            "GDP grew 2.5% in 2023."
        );
    }
}
