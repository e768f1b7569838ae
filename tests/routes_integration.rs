#![cfg(feature = "http-server")]

mod support;

use std::sync::Arc;

use rha_rust::api::{HourlyBucket, LocationId, ZoneBucket};
use rha_rust::db::repositories::LocalRepository;
use rha_rust::db::services;
use rha_rust::db::TripRepository;
use rha_rust::http::dto::{HealthResponse, IngestRequest, IngestResponse};
use rha_rust::http::{create_router, AppState};

use support::trip_at;

fn local_state() -> AppState {
    let repo = Arc::new(LocalRepository::new()) as Arc<dyn TripRepository>;
    AppState::new(repo)
}

#[test]
fn test_router_builds_with_local_state() {
    let _router = create_router(local_state());
}

#[tokio::test]
async fn test_state_shares_one_repository() {
    let state = local_state();
    let cloned = state.clone();

    services::replace_trips(state.repository.as_ref(), vec![trip_at(8, 2.0, 10.0, 5.0)])
        .await
        .unwrap();

    // Handler clones of the state observe the same store.
    assert_eq!(
        services::trip_count(cloned.repository.as_ref()).await.unwrap(),
        1
    );
}

#[test]
fn test_ingest_request_defaults_match_empty_body() {
    let parsed: IngestRequest = serde_json::from_str("{}").unwrap();
    let defaulted = IngestRequest::default();
    assert_eq!(parsed.source, defaulted.source);
    assert_eq!(parsed.trips, defaulted.trips);
    assert_eq!(parsed.seed, defaulted.seed);
}

#[test]
fn test_ingest_response_wire_format() {
    let response = IngestResponse {
        message: "Data ingestion completed".to_string(),
        trips_loaded: 1000,
        checksum: "abc123".to_string(),
    };
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["trips_loaded"], 1000);
    assert_eq!(json["message"], "Data ingestion completed");
}

#[test]
fn test_health_response_wire_format() {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: "connected".to_string(),
    };
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], "connected");
}

#[test]
fn test_analytics_dto_wire_format() {
    let hourly = HourlyBucket {
        hour: 8,
        trip_count: 2,
        avg_wait_time: 10.0,
        delay_percentage: 50.0,
    };
    let json = serde_json::to_value(&hourly).unwrap();
    assert_eq!(json["hour"], 8);
    assert_eq!(json["delay_percentage"], 50.0);

    let zone = ZoneBucket {
        location_id: LocationId::new(132),
        zone_name: "JFK Airport".to_string(),
        trip_count: 4,
        avg_wait_time: 7.5,
        delay_percentage: 25.0,
    };
    let json = serde_json::to_value(&zone).unwrap();
    // LocationId serializes transparently as its numeric value.
    assert_eq!(json["location_id"], 132);
    assert_eq!(json["zone_name"], "JFK Airport");
}
