//! Ingestion orchestration.
//!
//! Resolves an ingestion request to a record batch (generated sample or CSV
//! file), validates it at the boundary, fingerprints it, and replaces the
//! stored set. Validation is parse-and-validate at the edge: a single bad
//! record rejects the whole batch so the aggregates are never silently
//! skewed, and downstream code trusts the stored records completely.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::{IngestReport, LocationId};
use crate::db::checksum::trips_checksum;
use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult, TripRepository};
use crate::models::{PaymentType, TripRecord};

use super::sample_data::{generate_sample_trips, DEFAULT_SAMPLE_SIZE, DEFAULT_SEED};

/// What to ingest and how.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// CSV file to load; `None` generates the sample dataset.
    pub source: Option<PathBuf>,
    /// Sample size when generating.
    pub trips: usize,
    /// Generation seed when generating.
    pub seed: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            source: None,
            trips: DEFAULT_SAMPLE_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

/// Run one ingestion: resolve, validate, fingerprint, store.
///
/// Replaces the stored record set wholesale on success. On any error the
/// previous set is left untouched.
pub async fn ingest(
    repo: &dyn TripRepository,
    options: IngestOptions,
) -> RepositoryResult<IngestReport> {
    let (records, source) = match &options.source {
        Some(path) => (load_csv(path)?, path.display().to_string()),
        None => (
            generate_sample_trips(options.trips, options.seed),
            "sample".to_string(),
        ),
    };

    validate_batch(&records)?;

    let checksum = trips_checksum(&records)
        .map_err(|e| RepositoryError::internal(format!("Failed to fingerprint batch: {}", e)))?;

    let trips_loaded = repo.replace_trips(records).await?;
    log::info!("ingested {} trips from {}", trips_loaded, source);

    Ok(IngestReport {
        trips_loaded,
        checksum,
        source,
    })
}

/// One row of a trip CSV export.
///
/// Timestamps are RFC 3339; payment type is "card" or "cash". Record ids are
/// assigned here, not carried in the file.
#[derive(Debug, Deserialize)]
struct CsvTripRow {
    pickup_datetime: DateTime<Utc>,
    dropoff_datetime: DateTime<Utc>,
    pickup_location_id: i64,
    dropoff_location_id: i64,
    zone_name: String,
    passenger_count: u32,
    trip_distance_miles: f64,
    fare_amount: f64,
    total_amount: f64,
    payment_type: PaymentType,
    trip_duration_minutes: f64,
    pickup_wait_time_minutes: f64,
}

impl CsvTripRow {
    fn into_trip(self) -> TripRecord {
        TripRecord {
            id: Uuid::new_v4(),
            pickup_datetime: self.pickup_datetime,
            dropoff_datetime: self.dropoff_datetime,
            pickup_location_id: LocationId::new(self.pickup_location_id),
            dropoff_location_id: LocationId::new(self.dropoff_location_id),
            zone_name: self.zone_name,
            passenger_count: self.passenger_count,
            trip_distance_miles: self.trip_distance_miles,
            fare_amount: self.fare_amount,
            total_amount: self.total_amount,
            payment_type: self.payment_type,
            trip_duration_minutes: self.trip_duration_minutes,
            pickup_wait_time_minutes: self.pickup_wait_time_minutes,
        }
    }
}

/// Load a trip batch from a CSV file.
///
/// An unreachable or malformed source is a [`RepositoryError::DataSourceError`];
/// there are no partial reads.
pub fn load_csv(path: &Path) -> RepositoryResult<Vec<TripRecord>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        RepositoryError::data_source_with_context(
            format!("Cannot open trip source: {}", e),
            ErrorContext::new("ingest_csv").with_details(path.display().to_string()),
        )
    })?;

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<CsvTripRow>().enumerate() {
        let row = row.map_err(|e| {
            RepositoryError::data_source_with_context(
                format!("Malformed trip row: {}", e),
                ErrorContext::new("ingest_csv")
                    .with_entity("row")
                    .with_entity_id(index + 1)
                    .with_details(path.display().to_string()),
            )
        })?;
        records.push(row.into_trip());
    }

    Ok(records)
}

/// Check every record's field invariants; the first violation rejects the
/// whole batch.
pub fn validate_batch(records: &[TripRecord]) -> RepositoryResult<()> {
    for (index, record) in records.iter().enumerate() {
        if let Err(reason) = record.validate() {
            return Err(RepositoryError::validation_with_context(
                reason,
                ErrorContext::new("ingest")
                    .with_entity("trip")
                    .with_entity_id(record.id)
                    .with_details(format!("record {} of {}", index + 1, records.len())),
            ));
        }
    }
    Ok(())
}
