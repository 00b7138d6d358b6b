//! Stacked area chart: category counts per year.

use serde_json::json;

use crate::e2e_tests::helpers::*;

#[tokio::test]
async fn test_stacked_area_technology_used() {
    let test = TestClient::new();

    let resp = test.get("/api/v1/stacked_area?type=Technology%20Used").await;

    assert_eq!(resp.code(), 200);
    assert_eq!(
        resp.data(),
        &json!([
            ["AI Navigation", 2001, 1],
            ["AI Navigation", 2002, 1],
            ["Nuclear Propulsion", 2000, 2],
            ["Reusable Rocket", 2001, 1],
            ["Solar Propulsion", 2000, 1],
        ])
    );
}

#[tokio::test]
async fn test_stacked_area_form_encoded_space() {
    let test = TestClient::new();

    let resp = test.get("/api/v1/stacked_area?type=Satellite+Type").await;

    assert_eq!(resp.code(), 200);
    assert_eq!(resp.rows().len(), 5);
}

#[tokio::test]
async fn test_stacked_area_invalid_type() {
    let test = TestClient::new();

    for uri in [
        "/api/v1/stacked_area?type=Invalid",
        "/api/v1/stacked_area?type=Mission%20Type",
        "/api/v1/stacked_area",
    ] {
        let resp = test.get(uri).await;
        assert_eq!(resp.status, 200);
        assert_eq!(resp.code(), 400, "{uri}");
        assert_eq!(resp.message(), "Invalid index");
        assert_eq!(resp.data(), &json!({}));
    }
}
