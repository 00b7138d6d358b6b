//! Test that repeating a request produces byte-identical responses.

use crate::e2e_tests::helpers::*;

const URIS: [&str; 7] = [
    "/api/v1/bubble?year=2000",
    "/api/v1/pie?country=USA",
    "/api/v1/radar?country=USA",
    "/api/v1/chord",
    "/api/v1/chord?country=USA",
    "/api/v1/stacked_area?type=Satellite%20Type",
    "/api/v1/stacked_area?type=Technology%20Used",
];

#[tokio::test]
async fn test_repeated_requests_identical() {
    let test = TestClient::new();

    for uri in URIS {
        let first = test.get(uri).await;
        let second = test.get(uri).await;
        assert_eq!(first.raw, second.raw, "response changed for {uri}");
    }
}

#[tokio::test]
async fn test_radar_does_not_disturb_other_queries() {
    let test = TestClient::with_gdp();

    let before = test.get("/api/v1/bubble?year=2000").await;
    for _ in 0..3 {
        test.get("/api/v1/radar?country=USA").await;
    }
    let after = test.get("/api/v1/bubble?year=2000").await;

    assert_eq!(before.raw, after.raw);
}
