//! OCR engine seam. The default engine shells out to Tesseract; tests swap in
//! a stub through the `OcrEngine` trait.

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::process::Command;
use tracing::debug;

use crate::extraction::acquisition::AcquisitionError;

#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Recognises text in a raster image. Any per-call resources must be
    /// released before returning, on every path.
    async fn recognize(&self, image: &[u8]) -> Result<String, AcquisitionError>;

    fn name(&self) -> &'static str;
}

/// Tesseract via its command-line binary.
///
/// Each call gets its own temp directory, removed when the call ends. The
/// child is spawned with `kill_on_drop`, so a call abandoned by the
/// acquisition timeout does not leave a process behind.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    binary: String,
    language: String,
}

impl TesseractEngine {
    pub fn new(binary: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            language: language.into(),
        }
    }
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    async fn recognize(&self, image: &[u8]) -> Result<String, AcquisitionError> {
        let workdir = TempDir::new()?;
        let image_path = workdir.path().join("upload");
        tokio::fs::write(&image_path, image).await?;

        debug!(binary = %self.binary, bytes = image.len(), "Running tesseract");

        let output = Command::new(&self.binary)
            .arg(&image_path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => AcquisitionError::Recognition(format!(
                    "{} not found (install tesseract-ocr)",
                    self.binary
                )),
                _ => AcquisitionError::Recognition(format!("failed to run {}: {e}", self.binary)),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AcquisitionError::Recognition(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn name(&self) -> &'static str {
        "tesseract"
    }
}
