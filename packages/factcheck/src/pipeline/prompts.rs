//! LLM prompts for the verification pipeline.

/// Prompt for extracting factual claims as a bullet list.
pub const EXTRACT_CLAIMS_PROMPT: &str =
    "Extract {count} factual claims from the text below. Output ONLY bullet points. TEXT: {content}";

/// Prompt for verifying a single claim.
pub const VERIFY_CLAIM_PROMPT: &str =
    "Verify: '{claim}'. Status: SUPPORTED/CONTRADICTED/INCONCLUSIVE. Reason: 1 sentence.";

/// Prompt for the final narrative summary.
pub const SUMMARY_PROMPT: &str =
    "Write a short, high-level intelligence summary of these findings:\n{findings}";

/// Build the claim-extraction prompt.
pub fn format_extract_prompt(count: usize, content: &str) -> String {
    EXTRACT_CLAIMS_PROMPT
        .replace("{count}", &count.to_string())
        .replace("{content}", content)
}

/// Build the verification prompt for one claim.
pub fn format_verify_prompt(claim: &str) -> String {
    VERIFY_CLAIM_PROMPT.replace("{claim}", claim)
}

/// Build the summary prompt from rendered findings.
pub fn format_summary_prompt(findings: &str) -> String {
    SUMMARY_PROMPT.replace("{findings}", findings)
}
