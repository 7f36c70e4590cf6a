//! Audio download through the yt-dlp binary.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, info};
use uuid::Uuid;

use crate::clients::BROWSER_USER_AGENT;
use crate::error::{ResolveError, ResolveResult};
use crate::traits::AudioDownloader;

/// Downloads best-available audio as mp3 via `yt-dlp`.
///
/// Output files are uniquely named (`audio_<uuid>.mp3`) so concurrent
/// requests can never collide, and land in `output_dir` (the system
/// temp directory by default). The caller owns the returned file.
pub struct YtDlpDownloader {
    binary: String,
    output_dir: PathBuf,
    ffmpeg_location: Option<String>,
}

impl Default for YtDlpDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl YtDlpDownloader {
    pub fn new() -> Self {
        Self {
            binary: "yt-dlp".to_string(),
            output_dir: std::env::temp_dir(),
            ffmpeg_location: None,
        }
    }

    /// Use a specific yt-dlp binary path.
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Write downloads into a specific directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Point yt-dlp at a non-default ffmpeg install.
    pub fn with_ffmpeg_location(mut self, location: impl Into<String>) -> Self {
        self.ffmpeg_location = Some(location.into());
        self
    }
}

#[async_trait]
impl AudioDownloader for YtDlpDownloader {
    async fn download(&self, url: &str) -> ResolveResult<PathBuf> {
        let stem = format!("audio_{}", Uuid::new_v4().simple());
        let output_path = self.output_dir.join(format!("{}.mp3", stem));
        let output_template = self.output_dir.join(format!("{}.%(ext)s", stem));

        let mut cmd = Command::new(&self.binary);
        if let Some(ffmpeg) = &self.ffmpeg_location {
            cmd.arg("--ffmpeg-location").arg(ffmpeg);
        }
        cmd.arg("--user-agent")
            .arg(BROWSER_USER_AGENT)
            .arg("-f")
            .arg("bestaudio/best")
            .arg("-x")
            .arg("--audio-format")
            .arg("mp3")
            .arg("-o")
            .arg(&output_template)
            .arg(url);

        debug!(url = %url, output = %output_path.display(), "running yt-dlp");
        let output = cmd
            .output()
            .await
            .map_err(|e| ResolveError::AudioDownload(format!("failed to spawn yt-dlp: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ResolveError::AudioDownload(format!(
                "yt-dlp exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        if !output_path.exists() {
            return Err(ResolveError::AudioDownload(format!(
                "yt-dlp produced no file at {}",
                output_path.display()
            )));
        }

        info!(path = %output_path.display(), "audio downloaded");
        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_binary_is_download_error() {
        let downloader = YtDlpDownloader::new().with_binary("definitely-not-a-real-binary");
        let result = downloader.download("https://youtu.be/dQw4w9WgXcQ").await;

        match result {
            Err(ResolveError::AudioDownload(reason)) => {
                assert!(reason.contains("spawn"));
            }
            other => panic!("expected AudioDownload error, got {:?}", other.map(|p| p.display().to_string())),
        }
    }
}
