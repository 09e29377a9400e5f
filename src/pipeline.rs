//! The fetch → extract → summarize pipeline.

use tracing::{error, info};
use url::Url;

use crate::ai::{BedrockGenerator, SummaryClient};
use crate::core::config::AppConfig;
use crate::core::models::{ContentCategory, FetchedContent, SummarizeRequest, SummarizeResponse};
use crate::errors::SummarizerError;
use crate::extract::{self, ContentExtractor};
use crate::fetch::ContentFetcher;

/// Runs the whole pipeline for one request. One instance is shared across
/// invocations for connection reuse; it holds no per-request state.
pub struct UrlSummarizer {
    fetcher: ContentFetcher,
    extractors: Vec<Box<dyn ContentExtractor>>,
    summarizer: SummaryClient,
}

impl UrlSummarizer {
    /// Builds the production pipeline from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizerError::Fetch`] if the HTTP client cannot be
    /// constructed.
    pub async fn new(config: &AppConfig) -> Result<Self, SummarizerError> {
        let generator = BedrockGenerator::new(config).await;

        Ok(Self {
            fetcher: ContentFetcher::new()?,
            extractors: extract::default_extractors(),
            summarizer: SummaryClient::new(Box::new(generator)),
        })
    }

    /// Assembles a pipeline from explicit parts.
    #[must_use]
    pub fn with_parts(
        fetcher: ContentFetcher,
        extractors: Vec<Box<dyn ContentExtractor>>,
        summarizer: SummaryClient,
    ) -> Self {
        Self {
            fetcher,
            extractors,
            summarizer,
        }
    }

    /// Fetches, extracts, and summarizes one URL.
    ///
    /// # Errors
    ///
    /// Each stage maps to its own [`SummarizerError`] variant; any failure
    /// is terminal for the request and is logged with its cause.
    pub async fn summarize(
        &self,
        request: &SummarizeRequest,
    ) -> Result<SummarizeResponse, SummarizerError> {
        // The URL must be a well-formed absolute URI before any network call.
        Url::parse(&request.url)
            .map_err(|e| SummarizerError::InvalidRequest(format!("Invalid URL format: {e}")))?;

        info!(url = %request.url, "Fetching content");
        let fetched = self.fetcher.fetch(&request.url).await.map_err(|e| {
            error!(url = %request.url, "Fetch failed: {e}");
            e
        })?;

        self.summarize_fetched(request, fetched).await
    }

    /// Pipeline stages after the network fetch: extractor selection,
    /// extraction, summarization, and response assembly.
    ///
    /// # Errors
    ///
    /// See [`UrlSummarizer::summarize`].
    pub async fn summarize_fetched(
        &self,
        request: &SummarizeRequest,
        fetched: FetchedContent,
    ) -> Result<SummarizeResponse, SummarizerError> {
        let declared = &fetched.declared_content_type;

        let extractor = extract::select_extractor(&self.extractors, declared).ok_or_else(|| {
            let err = SummarizerError::UnsupportedContentType(declared.clone());
            error!(url = %request.url, "{err}");
            err
        })?;

        let text = extractor.extract(&fetched.bytes).map_err(|e| {
            error!(url = %request.url, "Extraction failed: {e}");
            e
        })?;

        if text.trim().is_empty() {
            error!(url = %request.url, "Extractor produced no usable text");
            return Err(SummarizerError::EmptyExtraction);
        }

        let max_length = request.effective_max_length();
        let summary = self
            .summarizer
            .summarize(&text, max_length)
            .await
            .map_err(|e| {
                error!(url = %request.url, "Summarization failed: {e}");
                e
            })?;

        // The response tag is re-derived from the declared type; it is not
        // taken from whichever extractor matched.
        let content_type = ContentCategory::from_declared(declared);

        let original_length = text.chars().count();
        let summary_length = summary.chars().count();

        info!(
            url = %request.url,
            original_length,
            summary_length,
            "Pipeline complete"
        );

        Ok(SummarizeResponse {
            url: request.url.clone(),
            content_type,
            summary,
            original_length,
            summary_length,
        })
    }
}
