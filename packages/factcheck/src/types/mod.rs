//! Domain types for the verification pipeline.

pub mod config;
pub mod content;
pub mod verdict;

pub use config::PipelineConfig;
pub use content::{Provenance, ResolvedContent};
pub use verdict::{Claim, Verdict, VerdictStatus};
