//! Text acquisition: turn an uploaded document into plain text.
//!
//! PDFs go through the text-layer decoder, raster images through OCR. The
//! content type decides the route before any bytes are decoded, and the whole
//! step runs under a single deadline.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::extraction::ocr::OcrEngine;
use crate::extraction::pdf::decode_pdf;

#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Document contains no extractable text")]
    EmptyDocument,

    #[error("Failed to decode PDF: {0}")]
    Decode(String),

    #[error("Text recognition failed: {0}")]
    Recognition(String),

    #[error("Text acquisition timed out after {0:?}")]
    Timeout(Duration),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Image,
}

impl DocumentKind {
    /// Classifies a declared content type. Parameters such as `; charset=`
    /// are ignored and the comparison is case-insensitive.
    pub fn from_content_type(content_type: &str) -> Result<Self, AcquisitionError> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "application/pdf" | "application/x-pdf" => Ok(Self::Pdf),
            image if image.starts_with("image/") => Ok(Self::Image),
            _ => Err(AcquisitionError::UnsupportedFileType(
                content_type.trim().to_string(),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Image => "image",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AcquiredText {
    pub text: String,
    pub kind: DocumentKind,
    /// Page count for PDFs; OCR input is a single image.
    pub pages: Option<usize>,
}

pub struct Acquirer {
    ocr: Arc<dyn OcrEngine>,
    timeout: Duration,
}

impl Acquirer {
    pub fn new(ocr: Arc<dyn OcrEngine>, timeout: Duration) -> Self {
        Self { ocr, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn acquire(
        &self,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<AcquiredText, AcquisitionError> {
        let kind = DocumentKind::from_content_type(content_type)?;
        if bytes.is_empty() {
            return Err(AcquisitionError::EmptyDocument);
        }

        let started = Instant::now();
        let acquired = tokio::time::timeout(self.timeout, self.acquire_unbounded(bytes, kind))
            .await
            .map_err(|_| {
                warn!(
                    kind = kind.as_str(),
                    timeout_secs = self.timeout.as_secs_f64(),
                    "Text acquisition timed out"
                );
                AcquisitionError::Timeout(self.timeout)
            })??;

        if acquired.text.trim().is_empty() {
            return Err(AcquisitionError::EmptyDocument);
        }

        info!(
            kind = kind.as_str(),
            bytes = bytes.len(),
            pages = acquired.pages,
            chars = acquired.text.chars().count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Acquired document text"
        );
        Ok(acquired)
    }

    async fn acquire_unbounded(
        &self,
        bytes: &[u8],
        kind: DocumentKind,
    ) -> Result<AcquiredText, AcquisitionError> {
        match kind {
            DocumentKind::Pdf => {
                let (text, pages) = decode_pdf(bytes.to_vec()).await?;
                Ok(AcquiredText {
                    text,
                    kind,
                    pages: Some(pages),
                })
            }
            DocumentKind::Image => {
                let text = self.ocr.recognize(bytes).await?;
                Ok(AcquiredText {
                    text,
                    kind,
                    pages: None,
                })
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::extraction::pdf::tests::TWO_PAGE_PDF;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns canned text after an optional delay and counts its calls.
    pub struct StubOcr {
        pub text: String,
        pub delay: Duration,
        pub calls: AtomicUsize,
    }

    impl StubOcr {
        pub fn new(text: &str) -> Self {
            Self {
                text: text.to_string(),
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn slow(text: &str, delay: Duration) -> Self {
            Self {
                delay,
                ..Self::new(text)
            }
        }
    }

    #[async_trait]
    impl OcrEngine for StubOcr {
        async fn recognize(&self, _image: &[u8]) -> Result<String, AcquisitionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            Ok(self.text.clone())
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }

    fn acquirer(ocr: Arc<StubOcr>) -> Acquirer {
        Acquirer::new(ocr, Duration::from_secs(30))
    }

    #[test]
    fn test_content_type_classification() {
        assert_eq!(
            DocumentKind::from_content_type("application/pdf").unwrap(),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::from_content_type("Application/X-PDF").unwrap(),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::from_content_type("image/png").unwrap(),
            DocumentKind::Image
        );
        assert_eq!(
            DocumentKind::from_content_type("image/jpeg; q=0.9").unwrap(),
            DocumentKind::Image
        );
    }

    #[test]
    fn test_unsupported_content_types() {
        for ct in ["text/plain", "application/msword", "", "imagepng"] {
            assert!(matches!(
                DocumentKind::from_content_type(ct),
                Err(AcquisitionError::UnsupportedFileType(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_image_routed_to_ocr() {
        let ocr = Arc::new(StubOcr::new("Jane Doe\njane@example.com"));
        let acquired = acquirer(ocr.clone())
            .acquire(b"\x89PNG", "image/png")
            .await
            .unwrap();
        assert_eq!(acquired.kind, DocumentKind::Image);
        assert_eq!(acquired.pages, None);
        assert!(acquired.text.contains("jane@example.com"));
        assert_eq!(ocr.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unsupported_type_never_reaches_decoders() {
        let ocr = Arc::new(StubOcr::new("text"));
        let err = acquirer(ocr.clone())
            .acquire(b"plain words", "text/plain")
            .await
            .unwrap_err();
        assert!(matches!(err, AcquisitionError::UnsupportedFileType(_)));
        assert_eq!(ocr.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_zero_bytes_is_empty_document() {
        let ocr = Arc::new(StubOcr::new("text"));
        let err = acquirer(ocr.clone())
            .acquire(b"", "image/png")
            .await
            .unwrap_err();
        assert!(matches!(err, AcquisitionError::EmptyDocument));
        assert_eq!(ocr.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_whitespace_only_text_is_empty_document() {
        let ocr = Arc::new(StubOcr::new(" \n\t \n"));
        let err = acquirer(ocr).acquire(b"\x89PNG", "image/png").await.unwrap_err();
        assert!(matches!(err, AcquisitionError::EmptyDocument));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_ocr_times_out() {
        let ocr = Arc::new(StubOcr::slow("late text", Duration::from_secs(60)));
        let acquirer = Acquirer::new(ocr, Duration::from_secs(30));
        let err = acquirer.acquire(b"\x89PNG", "image/png").await.unwrap_err();
        match err {
            AcquisitionError::Timeout(limit) => assert_eq!(limit, Duration::from_secs(30)),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ocr_within_deadline_succeeds() {
        let ocr = Arc::new(StubOcr::slow("on time", Duration::from_secs(5)));
        let acquirer = Acquirer::new(ocr, Duration::from_secs(30));
        let acquired = acquirer.acquire(b"\x89PNG", "image/png").await.unwrap();
        assert_eq!(acquired.text, "on time");
    }

    #[tokio::test]
    async fn test_pdf_routed_to_text_layer() {
        let ocr = Arc::new(StubOcr::new("unused"));
        let acquired = acquirer(ocr.clone())
            .acquire(TWO_PAGE_PDF, "application/pdf")
            .await
            .unwrap();
        assert_eq!(acquired.kind, DocumentKind::Pdf);
        assert_eq!(acquired.pages, Some(2));
        let first = acquired.text.find("Alpha").unwrap();
        let second = acquired.text.find("Bravo").unwrap();
        assert!(first < second);
        assert_eq!(ocr.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_decode_error() {
        let ocr = Arc::new(StubOcr::new("unused"));
        let err = acquirer(ocr.clone())
            .acquire(b"not really a pdf", "application/pdf")
            .await
            .unwrap_err();
        assert!(matches!(err, AcquisitionError::Decode(_)));
        assert_eq!(ocr.calls.load(Ordering::SeqCst), 0);
    }
}
