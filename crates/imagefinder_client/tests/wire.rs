use imagefinder_client::{crawl_endpoint, decode_payload, encode_uri_component, WireError, MISSING_STATUS};
use imagefinder_core::{CrawlStatus, ExchangeError};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn endpoint_encodes_target_like_a_browser() {
    assert_eq!(crawl_endpoint("http://x"), "main?url=http%3A%2F%2Fx");
    assert_eq!(
        crawl_endpoint("https://example.com/a b?q=1&r=(2)"),
        "main?url=https%3A%2F%2Fexample.com%2Fa%20b%3Fq%3D1%26r%3D(2)"
    );
}

#[test]
fn unreserved_marks_and_utf8_are_handled() {
    assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
    assert_eq!(encode_uri_component("ü"), "%C3%BC");
    assert_eq!(encode_uri_component("a+b"), "a%2Bb");
}

#[test]
fn completed_lists_are_decoded_twice_in_order() {
    let body = json!({
        "status": "completed",
        "message": "Crawling completed successfully.",
        "images": "[\"https://x.test/2.png\",\"https://x.test/1.png\"]",
        "logos": "[]",
    });

    let payload = decode_payload(Some(body)).expect("decode");
    assert_eq!(payload.status, CrawlStatus::Completed);
    assert_eq!(
        payload.images,
        Some(vec![
            "https://x.test/2.png".to_string(),
            "https://x.test/1.png".to_string()
        ])
    );
    assert_eq!(payload.logos, Some(Vec::new()));
}

#[test]
fn absent_null_and_empty_lists_are_all_none() {
    let body = json!({ "status": "completed", "images": null, "logos": "" });

    let payload = decode_payload(Some(body)).expect("decode");
    assert_eq!(payload.images, None);
    assert_eq!(payload.logos, None);
}

#[test]
fn error_message_is_kept() {
    let body = json!({ "status": "error", "message": "Invalid URL format." });

    let payload = decode_payload(Some(body)).expect("decode");
    assert_eq!(payload.status, CrawlStatus::Error);
    assert_eq!(payload.message.as_deref(), Some("Invalid URL format."));
}

#[test]
fn unknown_status_is_preserved() {
    let payload = decode_payload(Some(json!({ "status": "partial" }))).expect("decode");
    assert_eq!(payload.status, CrawlStatus::Unexpected("partial".to_string()));
}

#[test]
fn missing_status_or_body_is_unexpected() {
    let payload = decode_payload(Some(json!({}))).expect("decode");
    assert_eq!(payload.status, CrawlStatus::Unexpected(MISSING_STATUS.to_string()));

    let payload = decode_payload(None).expect("decode");
    assert_eq!(payload.status, CrawlStatus::Unexpected(MISSING_STATUS.to_string()));
}

#[test]
fn malformed_inner_list_is_a_parse_error() {
    let body = json!({ "status": "completed", "images": "[not json" });

    let err = decode_payload(Some(body)).unwrap_err();
    assert!(matches!(err, WireError::List { field: "images", .. }));
    assert!(matches!(ExchangeError::from(err), ExchangeError::Parse(_)));
}

#[test]
fn non_string_list_field_is_a_shape_error() {
    let body = json!({ "status": "completed", "images": ["a.png"] });

    let err = decode_payload(Some(body)).unwrap_err();
    assert!(matches!(err, WireError::Shape(_)));
}
