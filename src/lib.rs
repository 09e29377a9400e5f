//! URL Summarizer - a Lambda service that fetches a URL, extracts its text
//! content, and produces a bounded-length summary with an AWS Bedrock model.
//!
//! # Architecture
//!
//! One request flows linearly through:
//! 1. The content fetcher, which captures raw bytes and the declared MIME type
//! 2. The extractor registry, which converts HTML, plain text, or PDF bytes
//!    to plain text
//! 3. The summarization client, which prompts the model for a summary within
//!    the requested character budget
//!
//! The pipeline is exposed as a Lambda handler behind `POST /summarize` and
//! can also be driven directly:
//!
//! ```no_run
//! use url_summarizer::core::config::AppConfig;
//! use url_summarizer::core::models::SummarizeRequest;
//! use url_summarizer::pipeline::UrlSummarizer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     url_summarizer::setup_logging();
//!
//!     let config = AppConfig::from_env();
//!     let summarizer = UrlSummarizer::new(&config).await?;
//!
//!     let response = summarizer
//!         .summarize(&SummarizeRequest {
//!             url: "https://example.com".to_string(),
//!             max_length: Some(300),
//!         })
//!         .await?;
//!
//!     println!("{}", response.summary);
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod extract;
pub mod fetch;
pub mod pipeline;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. Call it once at process start.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
