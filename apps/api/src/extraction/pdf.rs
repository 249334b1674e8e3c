use tracing::{debug, warn};

use crate::extraction::acquisition::AcquisitionError;

/// Decodes the text layer of a PDF, one entry per page joined with newlines.
///
/// pdf-extract is synchronous and can panic on malformed input, so it runs on
/// the blocking pool and a panic surfaces as a decode failure.
pub async fn decode_pdf(bytes: Vec<u8>) -> Result<(String, usize), AcquisitionError> {
    let pages = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem_by_pages(&bytes)
    })
    .await
    .map_err(|e| {
        warn!(error = %e, "PDF decoder task failed");
        AcquisitionError::Decode("PDF decoder crashed on this document".to_string())
    })?
    .map_err(|e| AcquisitionError::Decode(e.to_string()))?;

    debug!(pages = pages.len(), "Decoded PDF text layer");
    Ok((pages.join("\n"), pages.len()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Two pages: "Priya Raman" / "Alpha Section", then "Bravo Section".
    pub const TWO_PAGE_PDF: &[u8] =
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/two_pages.pdf"));

    #[tokio::test]
    async fn test_pages_joined_in_order() {
        let (text, pages) = decode_pdf(TWO_PAGE_PDF.to_vec()).await.unwrap();
        assert_eq!(pages, 2);

        let first = text.find("Alpha").expect("page one text");
        let second = text.find("Bravo").expect("page two text");
        assert!(first < second);
        assert!(text[first..second].contains('\n'));
        assert!(text.contains("Priya"));
    }

    #[tokio::test]
    async fn test_garbage_bytes_fail_to_decode() {
        let err = decode_pdf(b"definitely not a pdf".to_vec()).await.unwrap_err();
        assert!(matches!(err, AcquisitionError::Decode(_)));
    }
}
