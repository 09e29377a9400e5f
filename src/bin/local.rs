// Local development entry point: summarize one URL from the command line.
//
// Usage: local <url> [max-length]

use url_summarizer::core::config::AppConfig;
use url_summarizer::core::models::SummarizeRequest;
use url_summarizer::pipeline::UrlSummarizer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut args = std::env::args().skip(1);
    let url = args
        .next()
        .unwrap_or_else(|| "https://example.com".to_string());
    let max_length = args.next().and_then(|raw| raw.parse::<i64>().ok());

    println!("Summarizing content from: {url}");

    let config = AppConfig::from_env();
    let summarizer = UrlSummarizer::new(&config).await?;

    let result = summarizer.summarize(&SummarizeRequest { url, max_length }).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
