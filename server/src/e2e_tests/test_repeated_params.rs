//! Repeated query keys: the first value wins and the envelope is always returned.

use serde_json::json;

use crate::e2e_tests::helpers::*;

#[tokio::test]
async fn test_bubble_repeated_year() {
    let test = TestClient::new();

    let resp = test.get("/api/v1/bubble?year=2001&year=2000").await;
    let expected = test.get("/api/v1/bubble?year=2001").await;

    assert_eq!(resp.status, 200);
    assert_eq!(resp.code(), 200);
    assert_eq!(resp.raw, expected.raw);
}

#[tokio::test]
async fn test_bubble_repeated_year_first_invalid() {
    let test = TestClient::new();

    let resp = test.get("/api/v1/bubble?year=1999&year=2000").await;

    assert_eq!(resp.status, 200);
    assert_eq!(resp.code(), 400);
    assert_eq!(resp.message(), "Invalid year");
    assert_eq!(resp.data(), &json!([]));
}

#[tokio::test]
async fn test_pie_repeated_country() {
    let test = TestClient::new();

    let resp = test.get("/api/v1/pie?country=India&country=USA").await;

    assert_eq!(resp.status, 200);
    assert_eq!(
        resp.data(),
        &json!([[["Unmanned", 1]], [["Communication", 1]], [["Solar Propulsion", 1]]])
    );
}

#[tokio::test]
async fn test_radar_and_chord_repeated_country() {
    let test = TestClient::new();

    let resp = test.get("/api/v1/radar?country=Russia&country=USA").await;
    assert_eq!(resp.code(), 200);
    assert_eq!(resp.rows()[0][0], json!("Russia"));

    let resp = test.get("/api/v1/chord?country=Russia&country=USA").await;
    assert_eq!(resp.code(), 200);
    assert_eq!(resp.data(), &json!([["Russia", "China"]]));
}

#[tokio::test]
async fn test_stacked_area_repeated_type() {
    let test = TestClient::new();

    let resp = test
        .get("/api/v1/stacked_area?type=Invalid&type=Satellite%20Type")
        .await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.code(), 400);
    assert_eq!(resp.data(), &json!({}));

    let resp = test
        .get("/api/v1/stacked_area?type=Satellite%20Type&type=Invalid")
        .await;
    assert_eq!(resp.code(), 200);
    assert_eq!(resp.rows().len(), 5);
}
