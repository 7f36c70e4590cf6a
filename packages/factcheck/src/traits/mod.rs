//! Core trait abstractions.
//!
//! Each external capability the pipeline consumes is a narrow trait:
//! the generative-text model, the article fetcher, the caption and
//! audio collaborators, and the progress side channel. Implementations
//! live in [`crate::clients`] and [`crate::ai`]; mocks in
//! [`crate::testing`].

pub mod article;
pub mod model;
pub mod progress;
pub mod video;

pub use article::ArticleSource;
pub use model::GenerativeModel;
pub use progress::{NullProgress, ProgressSink};
pub use video::{AudioDownloader, CaptionFragment, CaptionSource, Transcriber};
