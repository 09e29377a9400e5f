//! Content fetching for target URLs

use std::time::Duration;

use crate::core::models::FetchedContent;
use crate::errors::SummarizerError;

/// Identifying header sent with every outbound fetch.
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; URL-Summarizer/1.0)";

/// Upper bound on the whole fetch, connect included.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Issues a single GET per request. No retries; redirects are left to the
/// client's default bounded handling.
pub struct ContentFetcher {
    client: reqwest::Client,
}

impl ContentFetcher {
    /// # Errors
    ///
    /// Returns [`SummarizerError::Fetch`] if the HTTP client cannot be
    /// constructed.
    pub fn new() -> Result<Self, SummarizerError> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SummarizerError::Fetch(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Fetches the URL, capturing the raw body together with the declared
    /// `Content-Type` header (empty string when absent).
    ///
    /// # Errors
    ///
    /// Connection failures, DNS failures, the 30 second timeout, and non-2xx
    /// statuses all surface as [`SummarizerError::Fetch`].
    pub async fn fetch(&self, url: &str) -> Result<FetchedContent, SummarizerError> {
        let response = self.client.get(url).send().await?.error_for_status()?;

        let declared_content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let bytes = response.bytes().await?;

        Ok(FetchedContent {
            bytes: bytes.to_vec(),
            declared_content_type,
        })
    }
}
