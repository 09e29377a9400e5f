use async_trait::async_trait;
use url_summarizer::ai::{SummaryClient, TextGenerator};
use url_summarizer::core::models::{ContentCategory, FetchedContent, SummarizeRequest};
use url_summarizer::errors::SummarizerError;
use url_summarizer::extract::default_extractors;
use url_summarizer::fetch::ContentFetcher;
use url_summarizer::pipeline::UrlSummarizer;

struct FixedGenerator(&'static str);

#[async_trait]
impl TextGenerator for FixedGenerator {
    async fn generate(&self, _prompt: &str, _max_tokens: usize) -> Result<String, SummarizerError> {
        Ok(self.0.to_string())
    }
}

struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str, _max_tokens: usize) -> Result<String, SummarizerError> {
        Err(SummarizerError::Summarization(
            "model unavailable".to_string(),
        ))
    }
}

fn pipeline_with(generator: Box<dyn TextGenerator>) -> UrlSummarizer {
    UrlSummarizer::with_parts(
        ContentFetcher::new().unwrap(),
        default_extractors(),
        SummaryClient::new(generator),
    )
}

fn request(url: &str) -> SummarizeRequest {
    SummarizeRequest {
        url: url.to_string(),
        max_length: None,
    }
}

fn fetched(content_type: &str, bytes: &[u8]) -> FetchedContent {
    FetchedContent {
        bytes: bytes.to_vec(),
        declared_content_type: content_type.to_string(),
    }
}

#[tokio::test]
async fn test_happy_path_counts_characters_exactly() {
    let pipeline = pipeline_with(Box::new(FixedGenerator(" A short summary. ")));
    let html = b"<html><body><main>Hello world from the page</main></body></html>";

    let response = pipeline
        .summarize_fetched(
            &request("https://example.com"),
            fetched("text/html; charset=utf-8", html),
        )
        .await
        .unwrap();

    assert_eq!(response.url, "https://example.com");
    assert_eq!(response.content_type, ContentCategory::Html);
    assert_eq!(response.summary, "A short summary.");
    assert_eq!(
        response.original_length,
        "Hello world from the page".chars().count()
    );
    assert_eq!(response.summary_length, response.summary.chars().count());
}

#[tokio::test]
async fn test_empty_extraction_is_terminal() {
    let pipeline = pipeline_with(Box::new(FixedGenerator("unused")));

    let err = pipeline
        .summarize_fetched(
            &request("https://example.com"),
            fetched("text/plain", b"   \n\t  "),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, SummarizerError::EmptyExtraction));

    let err = pipeline
        .summarize_fetched(&request("https://example.com"), fetched("text/plain", b""))
        .await
        .unwrap_err();
    assert!(matches!(err, SummarizerError::EmptyExtraction));
}

#[tokio::test]
async fn test_unsupported_content_type_names_declared_type() {
    let pipeline = pipeline_with(Box::new(FixedGenerator("unused")));

    let err = pipeline
        .summarize_fetched(
            &request("https://example.com"),
            fetched("application/json", b"{}"),
        )
        .await
        .unwrap_err();

    match err {
        SummarizerError::UnsupportedContentType(declared) => {
            assert_eq!(declared, "application/json");
        }
        other => panic!("expected UnsupportedContentType, got {other:?}"),
    }
}

#[tokio::test]
async fn test_summarization_failure_propagates() {
    let pipeline = pipeline_with(Box::new(FailingGenerator));

    let err = pipeline
        .summarize_fetched(
            &request("https://example.com"),
            fetched("text/plain", b"some text"),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, SummarizerError::Summarization(_)));
    assert!(err.to_string().contains("model unavailable"));
}

#[tokio::test]
async fn test_response_tag_rederived_from_declared_type() {
    // Extractor routing scans the registry in order while the response tag
    // is computed from the declared type alone, so a type matching both
    // `text/plain` and `application/pdf` extracts as plain text yet tags as
    // pdf.
    let pipeline = pipeline_with(Box::new(FixedGenerator("summary")));

    let response = pipeline
        .summarize_fetched(
            &request("https://example.com"),
            fetched("text/plain; profile=application/pdf", b"plain text body"),
        )
        .await
        .unwrap();

    assert_eq!(response.content_type, ContentCategory::Pdf);
    assert_eq!(
        response.original_length,
        "plain text body".chars().count()
    );
}

#[tokio::test]
async fn test_invalid_url_rejected_before_any_network_call() {
    let pipeline = pipeline_with(Box::new(FixedGenerator("unused")));

    let err = pipeline.summarize(&request("not a url")).await.unwrap_err();
    assert!(matches!(err, SummarizerError::InvalidRequest(_)));
}
