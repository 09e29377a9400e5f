use serde::{Deserialize, Serialize};

/// Generation budget applied when `maxLength` is absent or non-positive.
pub const DEFAULT_MAX_LENGTH: usize = 500;

/// One summarization request: the target URL and an optional character
/// budget for the summary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    pub url: String,
    pub max_length: Option<i64>,
}

impl SummarizeRequest {
    /// Resolves the requested summary length. Absent, zero, and negative
    /// values all fall back to [`DEFAULT_MAX_LENGTH`].
    #[must_use]
    pub fn effective_max_length(&self) -> usize {
        match self.max_length {
            Some(n) if n > 0 => usize::try_from(n).unwrap_or(DEFAULT_MAX_LENGTH),
            _ => DEFAULT_MAX_LENGTH,
        }
    }
}

/// Raw body and declared MIME type for a fetched URL. Produced once per
/// request and owned by the pipeline until the response is assembled.
#[derive(Debug)]
pub struct FetchedContent {
    pub bytes: Vec<u8>,
    /// Raw `Content-Type` header value, parameters included; empty string
    /// when the response carried no such header.
    pub declared_content_type: String,
}

/// Three-way content tag reported back to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Html,
    Text,
    Pdf,
}

impl ContentCategory {
    /// Substring classification of a declared MIME type, used for the
    /// response tag. Computed independently of extractor selection.
    #[must_use]
    pub fn from_declared(content_type: &str) -> Self {
        if content_type.contains("text/html") {
            ContentCategory::Html
        } else if content_type.contains("application/pdf") {
            ContentCategory::Pdf
        } else {
            ContentCategory::Text
        }
    }
}

/// The externally observable result of one pipeline run. Constructed once;
/// never mutated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    pub url: String,
    pub content_type: ContentCategory,
    pub summary: String,
    /// Character count of the extracted text.
    pub original_length: usize,
    /// Character count of the summary.
    pub summary_length: usize,
}
