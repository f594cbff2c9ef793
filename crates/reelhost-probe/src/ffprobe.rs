//! Media metadata probing via an external subprocess.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;
use tokio::process::Command;

/// Probe operation errors
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The staged file is missing. Checked before invoking the tool even
    /// though the ingestor just created it.
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Probe tool failed: {0}")]
    ToolFailed(String),

    #[error("Malformed probe output: {0}")]
    MalformedOutput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Dimensions of the first reported stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeReport {
    pub width: u32,
    pub height: u32,
}

/// Media inspection capability.
///
/// One production implementation ([`FfprobeProber`]) and one canned
/// implementation for tests ([`StaticProber`]).
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, path: &Path) -> Result<ProbeReport, ProbeError>;
}

/// Probes a staged file by running `ffprobe` in a subprocess with quiet,
/// JSON, stream-only output.
pub struct FfprobeProber {
    ffprobe_path: String,
}

impl FfprobeProber {
    pub fn new(ffprobe_path: String) -> Self {
        Self { ffprobe_path }
    }

    fn parse_dimensions(stdout: &[u8]) -> Result<ProbeReport, ProbeError> {
        let probe_data: serde_json::Value = serde_json::from_slice(stdout)
            .map_err(|e| ProbeError::MalformedOutput(format!("invalid JSON: {}", e)))?;

        let stream = probe_data["streams"]
            .get(0)
            .ok_or_else(|| ProbeError::MalformedOutput("no video stream reported".to_string()))?;

        let width = stream["width"]
            .as_u64()
            .ok_or_else(|| ProbeError::MalformedOutput("missing stream width".to_string()))?
            as u32;

        let height = stream["height"]
            .as_u64()
            .ok_or_else(|| ProbeError::MalformedOutput("missing stream height".to_string()))?
            as u32;

        Ok(ProbeReport { width, height })
    }
}

#[async_trait]
impl Prober for FfprobeProber {
    #[tracing::instrument(skip(self), fields(
        process.executable.path = %self.ffprobe_path,
    ))]
    async fn probe(&self, path: &Path) -> Result<ProbeReport, ProbeError> {
        if !path.exists() {
            return Err(ProbeError::NotFound(path.display().to_string()));
        }

        let start = std::time::Instant::now();

        let output = Command::new(&self.ffprobe_path)
            .args([
                "-v",
                "error",
                "-print_format",
                "json",
                "-show_streams",
                "-select_streams",
                "v:0",
            ])
            .arg(path)
            .output()
            .await?;

        if !output.status.success() {
            return Err(ProbeError::ToolFailed(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }

        let report = Self::parse_dimensions(&output.stdout)?;

        tracing::info!(
            duration_ms = start.elapsed().as_millis() as u64,
            width = report.width,
            height = report.height,
            "Video probe completed"
        );

        Ok(report)
    }
}

/// Canned prober for tests: always reports the configured dimensions.
pub struct StaticProber {
    pub width: u32,
    pub height: u32,
}

#[async_trait]
impl Prober for StaticProber {
    async fn probe(&self, path: &Path) -> Result<ProbeReport, ProbeError> {
        if !path.exists() {
            return Err(ProbeError::NotFound(path.display().to_string()));
        }
        Ok(ProbeReport {
            width: self.width,
            height: self.height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dimensions_from_ffprobe_json() {
        let stdout = br#"{
            "streams": [
                {
                    "index": 0,
                    "codec_name": "h264",
                    "width": 1920,
                    "height": 1080,
                    "r_frame_rate": "30/1"
                }
            ]
        }"#;
        let report = FfprobeProber::parse_dimensions(stdout).unwrap();
        assert_eq!(report, ProbeReport { width: 1920, height: 1080 });
    }

    #[test]
    fn rejects_output_without_streams() {
        let err = FfprobeProber::parse_dimensions(br#"{"streams": []}"#).unwrap_err();
        assert!(matches!(err, ProbeError::MalformedOutput(_)));
    }

    #[test]
    fn rejects_output_missing_dimensions() {
        let err =
            FfprobeProber::parse_dimensions(br#"{"streams": [{"codec_name": "h264"}]}"#)
                .unwrap_err();
        assert!(matches!(err, ProbeError::MalformedOutput(_)));
    }

    #[test]
    fn rejects_non_json_output() {
        let err = FfprobeProber::parse_dimensions(b"ffprobe: command garbage").unwrap_err();
        assert!(matches!(err, ProbeError::MalformedOutput(_)));
    }

    #[tokio::test]
    async fn probing_a_missing_file_fails_with_not_found() {
        let prober = FfprobeProber::new("ffprobe".to_string());
        let err = prober
            .probe(Path::new("/nonexistent/staged-upload.mp4"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProbeError::NotFound(_)));
    }

    #[tokio::test]
    async fn static_prober_reports_canned_dimensions() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let prober = StaticProber { width: 1080, height: 1920 };
        let report = prober.probe(file.path()).await.unwrap();
        assert_eq!(report, ProbeReport { width: 1080, height: 1920 });
    }
}
