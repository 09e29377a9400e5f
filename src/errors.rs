use thiserror::Error;

/// Every way the pipeline can fail. One variant per stage; nothing is
/// retried, and every failure is terminal for its request.
#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to fetch URL: {0}")]
    Fetch(String),

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("Failed to extract text content: {0}")]
    Extraction(String),

    #[error("No text content could be extracted from the URL")]
    EmptyExtraction,

    #[error("Failed to generate summary: {0}")]
    Summarization(String),
}

impl From<reqwest::Error> for SummarizerError {
    fn from(error: reqwest::Error) -> Self {
        SummarizerError::Fetch(error.to_string())
    }
}
