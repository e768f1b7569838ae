//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{body::Bytes, extract::State, Json};
use std::path::PathBuf;

use super::dto::{HealthResponse, IngestRequest, IngestResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::{HourlyBucket, OverviewSummary, ZoneBucket};
use crate::db::services as db_services;
use crate::services::ingest::{self, IngestOptions};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the storage
/// backend is usable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Ingestion
// =============================================================================

/// POST /v1/ingest
///
/// Populate the record store. With no body (or an empty one) this generates
/// the default sample dataset; a body may point at a CSV source or adjust
/// the sample size and seed.
pub async fn ingest_trips(
    State(state): State<AppState>,
    body: Bytes,
) -> HandlerResult<IngestResponse> {
    let request: IngestRequest = if body.is_empty() {
        IngestRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid ingest request: {}", e)))?
    };

    let defaults = IngestOptions::default();
    let options = IngestOptions {
        source: request.source.map(PathBuf::from),
        trips: request.trips.unwrap_or(defaults.trips),
        seed: request.seed.unwrap_or(defaults.seed),
    };

    let report = ingest::ingest(state.repository.as_ref(), options).await?;

    Ok(Json(IngestResponse {
        message: "Data ingestion completed".to_string(),
        trips_loaded: report.trips_loaded,
        checksum: report.checksum,
    }))
}

// =============================================================================
// Analytics Endpoints
// =============================================================================

/// GET /v1/analytics/overview
///
/// Get overall trip analytics and KPIs. An empty store yields a zeroed
/// summary, not an error.
pub async fn get_overview(State(state): State<AppState>) -> HandlerResult<OverviewSummary> {
    let data = db_services::get_overview(state.repository.as_ref()).await?;
    Ok(Json(data))
}

/// GET /v1/analytics/hourly
///
/// Get hourly wait time and delay patterns, ascending by hour.
pub async fn get_hourly(State(state): State<AppState>) -> HandlerResult<Vec<HourlyBucket>> {
    let data = db_services::get_hourly(state.repository.as_ref()).await?;
    Ok(Json(data))
}

/// GET /v1/analytics/zones
///
/// Get zone-wise performance analytics. Ranking is a consumer concern.
pub async fn get_zones(State(state): State<AppState>) -> HandlerResult<Vec<ZoneBucket>> {
    let data = db_services::get_zones(state.repository.as_ref()).await?;
    Ok(Json(data))
}
