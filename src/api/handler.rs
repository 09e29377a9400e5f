//! Lambda handler for `POST /summarize`.
//!
//! Validates the request at the boundary (method, body, URL shape), then
//! hands off to the shared pipeline. Every outcome is encoded as an API
//! Gateway proxy response; boundary failures map to 400s while any pipeline
//! failure collapses to the single 500 category.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{error, info};
use url::Url;

use super::helpers;
use crate::core::config::AppConfig;
use crate::core::models::SummarizeRequest;
use crate::errors::SummarizerError;
use crate::pipeline::UrlSummarizer;

pub use self::function_handler as handler;

// One pipeline per process: the HTTP and Bedrock clients are reused across
// invocations.
static SUMMARIZER: OnceCell<UrlSummarizer> = OnceCell::const_new();

/// Lambda handler for the summarize entrypoint.
///
/// # Errors
///
/// Never fails the invocation itself; every outcome is returned as a proxy
/// response payload.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let method = http_method(&event.payload);
    info!(method = %method, "Received request");

    // CORS preflight
    if method.eq_ignore_ascii_case("OPTIONS") {
        return Ok(helpers::response(200, String::new()));
    }

    if !method.eq_ignore_ascii_case("POST") {
        return Ok(helpers::err_response(405, "Method not allowed"));
    }

    let Some(body) = event.payload.get("body").and_then(Value::as_str) else {
        error!("Request missing body");
        return Ok(helpers::err_response(400, "Request body is required"));
    };

    let parsed: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            error!("Request body is not valid JSON: {e}");
            return Ok(helpers::internal_error(&e.to_string()));
        }
    };

    let url = match parsed.get("url").and_then(Value::as_str) {
        Some(url) if !url.is_empty() => url,
        _ => {
            error!("Request missing url field");
            return Ok(helpers::err_response(400, "URL is required"));
        }
    };

    // Reject malformed URLs before any network call is attempted.
    if Url::parse(url).is_err() {
        error!(url = %url, "Rejected malformed URL");
        return Ok(helpers::err_response(400, "Invalid URL format"));
    }

    let request = SummarizeRequest {
        url: url.to_string(),
        max_length: parsed.get("maxLength").and_then(Value::as_i64),
    };

    let summarizer = match shared_summarizer().await {
        Ok(summarizer) => summarizer,
        Err(e) => {
            error!("Pipeline initialization failed: {e}");
            return Ok(helpers::internal_error(&e.to_string()));
        }
    };

    match summarizer.summarize(&request).await {
        Ok(response) => match serde_json::to_string(&response) {
            Ok(body) => Ok(helpers::response(200, body)),
            Err(e) => {
                error!("Failed to serialize response: {e}");
                Ok(helpers::internal_error(&e.to_string()))
            }
        },
        Err(e) => {
            error!("Pipeline failed: {e}");
            Ok(helpers::internal_error(&e.to_string()))
        }
    }
}

async fn shared_summarizer() -> Result<&'static UrlSummarizer, SummarizerError> {
    SUMMARIZER
        .get_or_try_init(|| async {
            let config = AppConfig::from_env();
            UrlSummarizer::new(&config).await
        })
        .await
}

/// Reads the HTTP method from either proxy event format (REST `httpMethod`
/// or HTTP API v2 `requestContext.http.method`).
fn http_method(payload: &Value) -> &str {
    payload
        .get("httpMethod")
        .and_then(Value::as_str)
        .or_else(|| {
            payload
                .get("requestContext")
                .and_then(|ctx| ctx.get("http"))
                .and_then(|http| http.get("method"))
                .and_then(Value::as_str)
        })
        .unwrap_or_default()
}
