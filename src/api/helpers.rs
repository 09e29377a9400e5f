//! Response builders for the Lambda handler.

use serde_json::{Value, json};

/// Headers attached to every response. The API is callable from any origin.
#[must_use]
pub fn cors_headers() -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Headers": "Content-Type, Authorization",
        "Access-Control-Allow-Methods": "POST, OPTIONS",
    })
}

/// Returns a response with the given status code and pre-serialized body.
#[must_use]
pub fn response(status_code: u16, body: String) -> Value {
    json!({
        "statusCode": status_code,
        "headers": cors_headers(),
        "body": body,
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    response(status_code, json!({ "error": message }).to_string())
}

/// Returns the single 500 shape every pipeline failure collapses to.
#[must_use]
pub fn internal_error(message: &str) -> Value {
    response(
        500,
        json!({ "error": "Internal server error", "message": message }).to_string(),
    )
}
