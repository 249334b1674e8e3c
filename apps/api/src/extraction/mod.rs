// Resume Field Extraction
// Acquisition (PDF text layer or OCR) feeds a set of independent regex and
// keyword passes; assembly groups their results into one record.
// Nothing here persists state between requests.

pub mod acquisition;
pub mod assembly;
pub mod career;
pub mod contact;
pub mod defaults;
pub mod handlers;
pub mod location;
pub mod name;
pub mod ocr;
pub mod pdf;
pub mod salary;
pub mod text;
pub mod vocab;

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::extraction::acquisition::{Acquirer, AcquisitionError, DocumentKind};
use crate::extraction::assembly::assemble;
use crate::extraction::ocr::OcrEngine;
use crate::models::resume::ExtractedResumeData;

/// Where the text of an extraction came from.
#[derive(Debug, Clone, Serialize)]
pub struct SourceInfo {
    pub kind: DocumentKind,
    /// `null` for OCR input.
    pub pages: Option<usize>,
    pub chars: usize,
}

#[derive(Debug, Clone)]
pub struct Extraction {
    pub data: ExtractedResumeData,
    pub source: SourceInfo,
}

/// Entry point for the full pipeline: bytes in, record out.
pub struct ResumeExtractor {
    acquirer: Acquirer,
}

impl ResumeExtractor {
    pub fn new(ocr: Arc<dyn OcrEngine>, timeout: Duration) -> Self {
        Self {
            acquirer: Acquirer::new(ocr, timeout),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.acquirer.timeout()
    }

    pub async fn extract(
        &self,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<Extraction, AcquisitionError> {
        let acquired = self.acquirer.acquire(bytes, content_type).await?;
        let data = assemble(&acquired.text);
        Ok(Extraction {
            data,
            source: SourceInfo {
                kind: acquired.kind,
                pages: acquired.pages,
                chars: acquired.text.chars().count(),
            },
        })
    }
}

/// Runs assembly on text that was acquired elsewhere.
pub fn extract_from_text(text: &str) -> Result<ExtractedResumeData, AcquisitionError> {
    if text.trim().is_empty() {
        return Err(AcquisitionError::EmptyDocument);
    }
    Ok(assemble(text))
}
