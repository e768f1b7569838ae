//! High-level service functions over the repository.
//!
//! These functions form the query boundary the HTTP handlers call into: each
//! reads the current record set and delegates to the pure aggregation code in
//! [`crate::services::analytics`]. An empty record set is a valid state and
//! yields zeroed summaries, never an error; callers distinguish "no data yet"
//! by checking `total_trips`.

use crate::api::{HourlyBucket, OverviewSummary, ZoneBucket};
use crate::models::TripRecord;
use crate::services::analytics;

use super::repository::{RepositoryResult, TripRepository};

/// Dataset-wide KPI snapshot from the current record set.
pub async fn get_overview(repo: &dyn TripRepository) -> RepositoryResult<OverviewSummary> {
    let trips = repo.fetch_trips().await?;
    Ok(analytics::compute_overview(&trips))
}

/// Per-hour breakdown, ascending by hour; only hours present in the data.
pub async fn get_hourly(repo: &dyn TripRepository) -> RepositoryResult<Vec<HourlyBucket>> {
    let trips = repo.fetch_trips().await?;
    Ok(analytics::compute_hourly(&trips))
}

/// Per-zone breakdown, ascending by location id.
pub async fn get_zones(repo: &dyn TripRepository) -> RepositoryResult<Vec<ZoneBucket>> {
    let trips = repo.fetch_trips().await?;
    Ok(analytics::compute_zones(&trips))
}

/// Number of records currently stored.
pub async fn trip_count(repo: &dyn TripRepository) -> RepositoryResult<usize> {
    repo.trip_count().await
}

/// Replace the stored record set. Input is assumed validated by the
/// ingestion service.
pub async fn replace_trips(
    repo: &dyn TripRepository,
    trips: Vec<TripRecord>,
) -> RepositoryResult<usize> {
    repo.replace_trips(trips).await
}

/// Check that the storage backend is reachable.
pub async fn health_check(repo: &dyn TripRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
