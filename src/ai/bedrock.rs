//! Bedrock runtime backend for text generation.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::primitives::Blob;
use serde_json::{Value, json};
use tracing::info;

use super::client::TextGenerator;
use crate::core::config::AppConfig;
use crate::errors::SummarizerError;

/// Anthropic messages format revision accepted by Bedrock.
const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Text generation through the Bedrock `InvokeModel` API.
pub struct BedrockGenerator {
    client: aws_sdk_bedrockruntime::Client,
    model_id: String,
}

impl BedrockGenerator {
    /// Builds the Bedrock client from the ambient AWS environment. The
    /// client is intended to live for the whole process.
    pub async fn new(config: &AppConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = &config.aws_region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        let shared_config = loader.load().await;

        Self {
            client: aws_sdk_bedrockruntime::Client::new(&shared_config),
            model_id: config.bedrock_model_id.clone(),
        }
    }
}

#[async_trait]
impl TextGenerator for BedrockGenerator {
    async fn generate(&self, prompt: &str, max_tokens: usize) -> Result<String, SummarizerError> {
        let body = json!({
            "anthropic_version": ANTHROPIC_VERSION,
            "max_tokens": max_tokens,
            "messages": [
                { "role": "user", "content": prompt }
            ],
        });

        info!(model_id = %self.model_id, max_tokens, "Invoking Bedrock model");

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body.to_string()))
            .send()
            .await
            .map_err(|e| {
                SummarizerError::Summarization(format!("Bedrock invocation failed: {e}"))
            })?;

        let payload: Value = serde_json::from_slice(response.body().as_ref()).map_err(|e| {
            SummarizerError::Summarization(format!("Failed to parse Bedrock response: {e}"))
        })?;

        first_text_segment(&payload).ok_or_else(|| {
            SummarizerError::Summarization("No text in Bedrock response".to_string())
        })
    }
}

/// Pulls the first text segment out of an Anthropic messages response.
fn first_text_segment(payload: &Value) -> Option<String> {
    payload
        .get("content")
        .and_then(Value::as_array)
        .and_then(|parts| parts.first())
        .and_then(|part| part.get("text"))
        .and_then(Value::as_str)
        .map(std::string::ToString::to_string)
}
