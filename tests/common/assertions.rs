//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}",
        expected, response.status,
    );
}

/// Assert response has an HTML content type
pub fn assert_html(response: &TestResponse) {
    let content_type = response
        .header("content-type")
        .expect("Response should have Content-Type");
    assert!(
        content_type.starts_with("text/html"),
        "Expected text/html, got {content_type}"
    );
}
