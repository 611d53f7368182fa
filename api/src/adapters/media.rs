//! Media toolchain probe
//!
//! Checks that the `ffmpeg` binary and the watermark asset shipped with the
//! image are present. Nothing here is fatal; results are logged at startup
//! and reported on `/health`.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::process::Command;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FfmpegStatus {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WatermarkStatus {
    pub path: PathBuf,
    pub present: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MediaToolchain {
    pub ffmpeg: FfmpegStatus,
    pub watermark: WatermarkStatus,
}

impl MediaToolchain {
    pub async fn probe(ffmpeg_bin: &str, watermark: &Path) -> Self {
        let ffmpeg = probe_ffmpeg(ffmpeg_bin).await;
        let present = tokio::fs::metadata(watermark)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);

        if ffmpeg.available {
            tracing::info!(version = ?ffmpeg.version, "ffmpeg found");
        } else {
            tracing::warn!(binary = %ffmpeg_bin, "ffmpeg not found on PATH");
        }
        if !present {
            tracing::warn!(path = %watermark.display(), "Watermark asset missing");
        }

        Self {
            ffmpeg,
            watermark: WatermarkStatus {
                path: watermark.to_path_buf(),
                present,
            },
        }
    }
}

async fn probe_ffmpeg(binary: &str) -> FfmpegStatus {
    match Command::new(binary).arg("-version").output().await {
        Ok(output) if output.status.success() => FfmpegStatus {
            available: true,
            version: parse_version_line(&String::from_utf8_lossy(&output.stdout)),
        },
        Ok(output) => {
            tracing::debug!(status = %output.status, "ffmpeg -version exited with failure");
            FfmpegStatus {
                available: false,
                version: None,
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to spawn ffmpeg");
            FfmpegStatus {
                available: false,
                version: None,
            }
        }
    }
}

/// `"ffmpeg version 6.1.1-3ubuntu5 Copyright ..."` -> `"6.1.1-3ubuntu5"`
fn parse_version_line(stdout: &str) -> Option<String> {
    let first = stdout.lines().next()?;
    let rest = first.trim().strip_prefix("ffmpeg version ")?;
    rest.split_whitespace().next().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_version_banner() {
        let banner = "ffmpeg version 5.1.6-0+deb12u1 Copyright (c) 2000-2024 the FFmpeg developers\nbuilt with gcc 12\n";
        assert_eq!(parse_version_line(banner).as_deref(), Some("5.1.6-0+deb12u1"));
    }

    #[test]
    fn unknown_banner_has_no_version() {
        assert_eq!(parse_version_line("avconv version 12"), None);
        assert_eq!(parse_version_line(""), None);
    }

    #[tokio::test]
    async fn missing_binary_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let status = probe_ffmpeg("definitely-not-ffmpeg-7f3a").await;
        assert!(!status.available);

        let toolchain =
            MediaToolchain::probe("definitely-not-ffmpeg-7f3a", &dir.path().join("none.png")).await;
        assert!(!toolchain.watermark.present);
    }

    #[tokio::test]
    async fn detects_watermark_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("watermark.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\n").unwrap();

        let toolchain = MediaToolchain::probe("definitely-not-ffmpeg-7f3a", &path).await;
        assert!(toolchain.watermark.present);
        assert_eq!(toolchain.watermark.path, path);
    }
}
