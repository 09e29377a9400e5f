use std::env;

/// Bedrock model used when `BEDROCK_MODEL_ID` is not set. Claude 3 Haiku
/// keeps per-request summarization cost low.
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bedrock_model_id: String,
    pub aws_region: Option<String>,
}

impl AppConfig {
    /// Reads configuration from the environment. Every knob has a fallback:
    /// the model id defaults to [`DEFAULT_MODEL_ID`] and an unset region is
    /// left to the SDK's default provider chain.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            bedrock_model_id: env::var("BEDROCK_MODEL_ID")
                .unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
            aws_region: env::var("AWS_REGION").ok(),
        }
    }
}
