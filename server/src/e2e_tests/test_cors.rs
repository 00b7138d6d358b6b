//! Every response may be read from any origin.

use crate::e2e_tests::helpers::*;

#[tokio::test]
async fn test_cors_header_on_success_and_error() {
    let test = TestClient::new();

    for uri in [
        "/api/v1/bubble",
        "/api/v1/bubble?year=1800",
        "/api/v1/pie?country=USA",
        "/api/v1/radar?country=USA",
        "/api/v1/chord",
        "/api/v1/stacked_area?type=Invalid",
    ] {
        let resp = test.get(uri).await;
        assert_eq!(
            resp.headers
                .get("access-control-allow-origin")
                .map(|v| v.to_str().unwrap()),
            Some("*"),
            "{uri}"
        );
    }
}

#[tokio::test]
async fn test_json_content_type() {
    let test = TestClient::new();

    let resp = test.get("/api/v1/chord").await;

    assert_eq!(
        resp.headers.get("content-type").map(|v| v.to_str().unwrap()),
        Some("application/json")
    );
}
