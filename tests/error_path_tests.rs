//! Error path testing for configuration, ingestion, and storage failures.

mod support;

use std::io::Write;

use rha_rust::db::repositories::{FileRepository, LocalRepository};
use rha_rust::db::{
    RepositoryConfig, RepositoryError, RepositoryFactory, RepositoryType, TripRepository,
};
use rha_rust::services::ingest::{ingest, load_csv, validate_batch, IngestOptions};

use support::trip_at;

#[test]
fn test_unknown_repository_type_rejected() {
    let err = "mongodb".parse::<RepositoryType>().unwrap_err();
    assert!(err.contains("Unknown repository type"));
}

#[test]
fn test_missing_config_file_is_configuration_error() {
    let err = RepositoryConfig::from_file("/nonexistent/repository.toml").unwrap_err();
    assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
}

#[test]
fn test_factory_file_backend_without_path() {
    let err = RepositoryFactory::create(RepositoryType::File, None).unwrap_err();
    assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
}

#[test]
fn test_load_csv_missing_file() {
    let err = load_csv(std::path::Path::new("/nonexistent/trips.csv")).unwrap_err();
    assert!(matches!(err, RepositoryError::DataSourceError { .. }));
    assert_eq!(err.context().operation.as_deref(), Some("ingest_csv"));
}

#[test]
fn test_load_csv_wrong_header() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "a,b,c").unwrap();
    writeln!(file, "1,2,3").unwrap();

    let err = load_csv(file.path()).unwrap_err();
    assert!(matches!(err, RepositoryError::DataSourceError { .. }));
}

#[test]
fn test_validation_error_carries_record_position() {
    let mut bad = trip_at(8, 5.0, 10.0, 5.0);
    bad.fare_amount = -10.0;
    let records = vec![trip_at(8, 5.0, 10.0, 5.0), bad];

    let err = validate_batch(&records).unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
    let details = err.context().details.as_deref().unwrap();
    assert!(details.contains("record 2 of 2"), "details: {}", details);
}

#[tokio::test]
async fn test_validation_failure_leaves_store_untouched() {
    let repo = LocalRepository::new();
    ingest(
        &repo,
        IngestOptions {
            trips: 10,
            ..Default::default()
        },
    )
    .await
    .unwrap();

    // A CSV with an invalid record must not replace the existing set.
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "pickup_datetime,dropoff_datetime,pickup_location_id,dropoff_location_id,zone_name,passenger_count,trip_distance_miles,fare_amount,total_amount,payment_type,trip_duration_minutes,pickup_wait_time_minutes"
    )
    .unwrap();
    writeln!(
        file,
        "2024-01-15T08:30:00Z,2024-01-15T08:55:00Z,230,132,Times Sq/Theatre District,0,3.4,18.00,21.50,card,25.0,6.0"
    )
    .unwrap();

    let err = ingest(
        &repo,
        IngestOptions {
            source: Some(file.path().to_path_buf()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, RepositoryError::ValidationError { .. }));
    assert_eq!(repo.trip_count().await.unwrap(), 10);
}

#[test]
fn test_corrupt_store_file_surfaces_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trips.json");
    std::fs::write(&path, b"{{{{").unwrap();

    let err = FileRepository::open(&path).unwrap_err();
    assert!(matches!(err, RepositoryError::StorageError { .. }));
    assert!(err.is_retryable());
}
