//! Radar chart: one summary row per country.

use serde_json::json;

use crate::e2e_tests::helpers::*;

#[tokio::test]
async fn test_radar_country() {
    let test = TestClient::new();

    let resp = test.get("/api/v1/radar?country=USA").await;

    assert_eq!(resp.code(), 200);
    assert_eq!(
        resp.data(),
        &json!([["USA", 3, 20.0, 90.0, 3.0, 120.0]])
    );
}

#[tokio::test]
async fn test_radar_single_mission() {
    let test = TestClient::new();

    let resp = test.get("/api/v1/radar?country=Russia").await;

    assert_eq!(resp.rows().len(), 1);
    // High maps to 5.
    assert_eq!(resp.rows()[0][4], json!(5.0));
}

#[tokio::test]
async fn test_radar_no_rows() {
    let test = TestClient::new();

    for uri in ["/api/v1/radar?country=Nonexistent", "/api/v1/radar"] {
        let resp = test.get(uri).await;
        assert_eq!(resp.code(), 200);
        assert_eq!(resp.data(), &json!([]));
    }
}
