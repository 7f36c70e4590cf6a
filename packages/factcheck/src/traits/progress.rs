//! Progress side channel for the verifier.

/// Observer notified once per completed claim verification.
///
/// The final call always reports `completed == total`.
pub trait ProgressSink: Send + Sync {
    fn update(&self, completed: usize, total: usize);
}

/// Progress sink that discards all updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn update(&self, _completed: usize, _total: usize) {}
}
