use url_summarizer::core::models::{
    ContentCategory, DEFAULT_MAX_LENGTH, SummarizeRequest, SummarizeResponse,
};

fn request_with(max_length: Option<i64>) -> SummarizeRequest {
    SummarizeRequest {
        url: "https://example.com".to_string(),
        max_length,
    }
}

#[test]
fn test_effective_max_length_defaults_absent_zero_and_negative() {
    assert_eq!(request_with(None).effective_max_length(), DEFAULT_MAX_LENGTH);
    assert_eq!(
        request_with(Some(0)).effective_max_length(),
        DEFAULT_MAX_LENGTH
    );
    assert_eq!(
        request_with(Some(-10)).effective_max_length(),
        DEFAULT_MAX_LENGTH
    );
    assert_eq!(request_with(Some(200)).effective_max_length(), 200);
}

#[test]
fn test_request_deserializes_camel_case() {
    let request: SummarizeRequest =
        serde_json::from_str(r#"{"url":"https://example.com","maxLength":300}"#).unwrap();
    assert_eq!(request.url, "https://example.com");
    assert_eq!(request.max_length, Some(300));

    let bare: SummarizeRequest = serde_json::from_str(r#"{"url":"https://example.com"}"#).unwrap();
    assert_eq!(bare.max_length, None);
}

#[test]
fn test_content_category_from_declared() {
    assert_eq!(
        ContentCategory::from_declared("text/html; charset=utf-8"),
        ContentCategory::Html
    );
    assert_eq!(
        ContentCategory::from_declared("application/pdf"),
        ContentCategory::Pdf
    );
    assert_eq!(
        ContentCategory::from_declared("text/plain"),
        ContentCategory::Text
    );
    // Anything unrecognized tags as text.
    assert_eq!(
        ContentCategory::from_declared("application/json"),
        ContentCategory::Text
    );
    assert_eq!(ContentCategory::from_declared(""), ContentCategory::Text);
}

#[test]
fn test_response_serializes_wire_format() {
    let response = SummarizeResponse {
        url: "https://example.com".to_string(),
        content_type: ContentCategory::Html,
        summary: "short".to_string(),
        original_length: 100,
        summary_length: 5,
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["url"], "https://example.com");
    assert_eq!(json["contentType"], "html");
    assert_eq!(json["summary"], "short");
    assert_eq!(json["originalLength"], 100);
    assert_eq!(json["summaryLength"], 5);
}

#[test]
fn test_category_tags_serialize_lowercase() {
    assert_eq!(
        serde_json::to_value(ContentCategory::Pdf).unwrap(),
        serde_json::json!("pdf")
    );
    assert_eq!(
        serde_json::to_value(ContentCategory::Text).unwrap(),
        serde_json::json!("text")
    );
}
