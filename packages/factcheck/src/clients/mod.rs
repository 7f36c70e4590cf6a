//! Concrete collaborator implementations.
//!
//! - `HttpArticleSource` - reqwest-based article fetching
//! - `YoutubeCaptions` - caption-track lookup via the watch page
//! - `YtDlpDownloader` - audio download through the yt-dlp binary
//! - `WhisperTranscriber` - speech-to-text over an OpenAI-compatible API

mod article;
mod captions;
mod whisper;
mod ytdlp;

pub use article::HttpArticleSource;
pub use captions::YoutubeCaptions;
pub use whisper::WhisperTranscriber;
pub use ytdlp::YtDlpDownloader;

/// Browser-like user agent for fetches that sites would otherwise block.
pub(crate) const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
