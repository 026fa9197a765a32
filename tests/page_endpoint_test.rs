//! End-to-end tests for the single page endpoint.

mod common;

use axum::http::{Method, StatusCode};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use common::{assert_html, assert_status, TestApp};

/// Extract the `src` attributes of all `<img>` elements, in document order.
fn img_sources(html: &str) -> Vec<String> {
    html.split("<img")
        .skip(1)
        .map(|tag| {
            tag.split("src=\"")
                .nth(1)
                .and_then(|rest| rest.split('"').next())
                .expect("img should have a src attribute")
                .to_string()
        })
        .collect()
}

fn png_dimensions(png: &[u8]) -> (u32, u32) {
    let w = u32::from_be_bytes(png[16..20].try_into().unwrap());
    let h = u32::from_be_bytes(png[20..24].try_into().unwrap());
    (w, h)
}

#[tokio::test]
async fn test_root_returns_the_report_page() {
    let app = TestApp::new();
    let response = app.get("/").await;

    assert_status(&response, StatusCode::OK);
    assert_html(&response);

    let html = response.text();
    assert_eq!(html.matches("<img").count(), 4);
}

#[tokio::test]
async fn test_images_are_well_formed_data_uris() {
    let app = TestApp::new();
    let html = app.get("/").await.text();

    let sources = img_sources(&html);
    assert_eq!(sources.len(), 4);
    for src in &sources {
        assert!(
            src.starts_with("data:image/png;base64,"),
            "unexpected src prefix: {}",
            &src[..src.len().min(40)]
        );
        let payload = src.trim_start_matches("data:image/png;base64,");
        let png = BASE64.decode(payload).expect("valid base64 payload");
        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
    }
}

#[tokio::test]
async fn test_charts_are_ordered_pie_bar_line_doughnut() {
    let app = TestApp::new();
    let html = app.get("/").await.text();

    // Titles appear as alt text in document order.
    let positions: Vec<usize> = [
        "Pie Chart - Nilai UTS",
        "Bar Chart - Nilai UAS",
        "Line Chart - Nilai Harian",
        "Doughnut Chart - Kehadiran",
    ]
    .iter()
    .map(|title| html.find(title).unwrap_or_else(|| panic!("missing {title}")))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    // Canvas sizes follow the kind: square for circular charts, wide for
    // the rest.
    let dimensions: Vec<(u32, u32)> = img_sources(&html)
        .iter()
        .map(|src| {
            let payload = src.trim_start_matches("data:image/png;base64,");
            png_dimensions(&BASE64.decode(payload).unwrap())
        })
        .collect();
    assert_eq!(
        dimensions,
        vec![(400, 400), (600, 400), (600, 400), (400, 400)]
    );
}

#[tokio::test]
async fn test_every_path_serves_the_same_page() {
    let app = TestApp::new();
    let root = app.get("/").await;
    assert_status(&root, StatusCode::OK);

    for path in ["/index.html", "/api/anything", "/deeply/nested/path?q=1"] {
        let response = app.get(path).await;
        assert_status(&response, StatusCode::OK);
        assert_html(&response);
        assert_eq!(response.body, root.body, "body differs for {path}");
    }
}

#[tokio::test]
async fn test_every_method_serves_the_same_page() {
    let app = TestApp::new();
    let root = app.get("/").await;

    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let response = app.request_with_method(method.clone(), "/").await;
        assert_status(&response, StatusCode::OK);
        assert_eq!(response.body, root.body, "body differs for {method}");
    }
}

#[tokio::test]
async fn test_responses_are_identical_across_requests() {
    let app = TestApp::new();
    let first = app.get("/").await;
    let second = app.get("/").await;
    assert_eq!(first.body, second.body);
}
