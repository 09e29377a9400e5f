use super::ContentExtractor;
use crate::errors::SummarizerError;

/// Extracts the embedded text layer from PDF documents.
pub struct PdfExtractor;

impl ContentExtractor for PdfExtractor {
    fn can_handle(&self, content_type: &str) -> bool {
        content_type.contains("application/pdf")
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, SummarizerError> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| SummarizerError::Extraction(format!("Failed to parse PDF: {e}")))?;

        Ok(text.trim().to_string())
    }
}
