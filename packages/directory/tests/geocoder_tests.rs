//! HTTP behavior of the Nominatim resolver: candidate parsing, the
//! empty-result case, error-status and timeout mapping, and the viewbox
//! hint.

use std::time::Duration;

use directory_core::common::GeocodeError;
use directory_core::kernel::traits::BaseGeocoder;
use directory_core::kernel::{BoundingBox, NominatimGeocoder};
use httpmock::prelude::*;

fn geocoder_for(server: &MockServer) -> NominatimGeocoder {
    NominatimGeocoder::new(server.base_url(), "DirectoryTest/1.0", Duration::from_secs(2))
}

#[tokio::test]
async fn parses_candidates_in_order() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/search")
                .query_param("q", "Redwood City, CA")
                .query_param("format", "json");
            then.status(200).json_body(serde_json::json!([
                {"lat": "37.4848", "lon": "-122.2281", "display_name": "Redwood City, CA"},
                {"lat": "37.5000", "lon": "-122.3000", "display_name": "Somewhere Else"}
            ]));
        })
        .await;

    let candidates = geocoder_for(&server)
        .resolve("Redwood City, CA", None)
        .await
        .expect("should resolve");

    mock.assert_async().await;
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].latitude, 37.4848);
    assert_eq!(candidates[0].longitude, -122.2281);
    assert_eq!(candidates[0].coordinates(), [37.4848, -122.2281]);
    assert_eq!(candidates[0].display_name, "Redwood City, CA");
}

#[tokio::test]
async fn empty_response_is_an_empty_candidate_list() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/search");
            then.status(200).json_body(serde_json::json!([]));
        })
        .await;

    let candidates = geocoder_for(&server)
        .resolve("123 Unknown Place", None)
        .await
        .expect("empty is not an error at the resolver level");
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn sends_viewbox_hint_when_bounds_given() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/search")
                .query_param("viewbox", "-122.521,37.1074,-122.085,37.7084");
            then.status(200).json_body(serde_json::json!([]));
        })
        .await;

    let bounds = BoundingBox {
        southwest: (37.1074, -122.521),
        northeast: (37.7084, -122.085),
    };
    geocoder_for(&server)
        .resolve("San Mateo", Some(bounds))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn error_status_maps_to_service_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/search");
            then.status(503);
        })
        .await;

    let result = geocoder_for(&server).resolve("Redwood City", None).await;
    assert!(matches!(result, Err(GeocodeError::Service(_))));
}

#[tokio::test]
async fn malformed_body_maps_to_service_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/search");
            then.status(200).body("not json");
        })
        .await;

    let result = geocoder_for(&server).resolve("Redwood City", None).await;
    assert!(matches!(result, Err(GeocodeError::Service(_))));
}

#[tokio::test]
async fn slow_resolver_times_out_as_service_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/search");
            then.status(200)
                .json_body(serde_json::json!([]))
                .delay(Duration::from_secs(5));
        })
        .await;

    let geocoder =
        NominatimGeocoder::new(server.base_url(), "DirectoryTest/1.0", Duration::from_millis(200));
    let result = geocoder.resolve("Redwood City", None).await;
    assert!(matches!(result, Err(GeocodeError::Service(_))));
}
