//! Generative-model implementations.
//!
//! Reference implementations of the `GenerativeModel` trait. Users can
//! use these directly or implement their own.

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::GeminiModel;
