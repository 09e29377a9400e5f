//! Content-type specific text extraction

mod html;
mod pdf;
mod text;

pub use html::HtmlExtractor;
pub use pdf::PdfExtractor;
pub use text::PlainTextExtractor;

use crate::errors::SummarizerError;

/// Converter from raw content bytes to plain text for one family of
/// declared content types.
pub trait ContentExtractor: Send + Sync {
    /// Whether this extractor accepts the declared MIME type. Matching is
    /// substring containment, parameters included.
    fn can_handle(&self, content_type: &str) -> bool;

    /// Converts raw bytes to trimmed plain text.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizerError::Extraction`] when the byte stream cannot
    /// be parsed.
    fn extract(&self, bytes: &[u8]) -> Result<String, SummarizerError>;
}

/// The extractors in matching order. The order is part of the contract:
/// the first `can_handle` hit wins.
#[must_use]
pub fn default_extractors() -> Vec<Box<dyn ContentExtractor>> {
    vec![
        Box::new(HtmlExtractor),
        Box::new(PlainTextExtractor),
        Box::new(PdfExtractor),
    ]
}

/// Scans `extractors` in declaration order for the first one accepting
/// `content_type`.
#[must_use]
pub fn select_extractor<'a>(
    extractors: &'a [Box<dyn ContentExtractor>],
    content_type: &str,
) -> Option<&'a dyn ContentExtractor> {
    extractors
        .iter()
        .find(|extractor| extractor.can_handle(content_type))
        .map(|boxed| boxed.as_ref())
}
