use super::ContentExtractor;
use crate::errors::SummarizerError;

/// Passes plain text bodies through verbatim, trimmed.
pub struct PlainTextExtractor;

impl ContentExtractor for PlainTextExtractor {
    fn can_handle(&self, content_type: &str) -> bool {
        content_type.contains("text/plain")
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, SummarizerError> {
        Ok(String::from_utf8_lossy(bytes).trim().to_string())
    }
}
