//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The analytics DTOs are re-exported from the api module since they already
//! derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{HourlyBucket, IngestReport, LocationId, OverviewSummary, ZoneBucket};

/// Request body for triggering an ingestion. The body is optional; an empty
/// request ingests the default sample dataset.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IngestRequest {
    /// CSV file to load instead of generating the sample dataset
    #[serde(default)]
    pub source: Option<String>,
    /// Sample size when generating (default: 1000)
    #[serde(default)]
    pub trips: Option<usize>,
    /// Generation seed when generating (default: 42)
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Response for a completed ingestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestResponse {
    /// Message about the operation
    pub message: String,
    /// Number of records now in the store
    pub trips_loaded: usize,
    /// SHA-256 fingerprint of the ingested batch
    pub checksum: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Storage backend status
    pub database: String,
}
