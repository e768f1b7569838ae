//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};

/// Taxi zone identifier (NYC TLC location key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocationId(pub i64);

impl LocationId {
    pub fn new(value: i64) -> Self {
        LocationId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Dataset-wide KPI snapshot shown on the main dashboard view.
///
/// Recomputed on every query from the current record set; an empty set yields
/// all-zero figures rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewSummary {
    /// Number of trips in the current record set
    pub total_trips: usize,
    /// Mean trip duration in minutes, rounded to one decimal for display
    pub avg_trip_duration: f64,
    /// Mean pre-tip fare, rounded to two decimals for display
    pub avg_fare: f64,
    /// Sum of trip totals (fare + tip + taxes), rounded to two decimals
    pub total_revenue: f64,
    /// Trips whose pickup wait exceeded the delay threshold
    pub delayed_trips_count: usize,
    /// Delayed trips as a percentage of all trips, one decimal
    pub delay_percentage: f64,
    /// Mean pickup wait in minutes, one decimal
    pub avg_wait_time: f64,
}

impl OverviewSummary {
    /// The all-zero summary returned for an empty record set.
    pub fn empty() -> Self {
        Self {
            total_trips: 0,
            avg_trip_duration: 0.0,
            avg_fare: 0.0,
            total_revenue: 0.0,
            delayed_trips_count: 0,
            delay_percentage: 0.0,
            avg_wait_time: 0.0,
        }
    }
}

/// Aggregate over the trips picked up in one hour-of-day bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyBucket {
    /// Hour of day, 0-23
    pub hour: u32,
    /// Trips picked up in this hour
    pub trip_count: usize,
    /// Mean pickup wait in minutes, one decimal
    pub avg_wait_time: f64,
    /// Delayed trips as a percentage of this hour's trips, one decimal
    pub delay_percentage: f64,
}

/// Aggregate over the trips picked up in one taxi zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneBucket {
    /// Pickup zone identifier
    pub location_id: LocationId,
    /// Human-readable zone label
    pub zone_name: String,
    /// Trips picked up in this zone
    pub trip_count: usize,
    /// Mean pickup wait in minutes, one decimal
    pub avg_wait_time: f64,
    /// Delayed trips as a percentage of this zone's trips, one decimal
    pub delay_percentage: f64,
}

/// Outcome of a completed ingestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestReport {
    /// Number of records now in the store
    pub trips_loaded: usize,
    /// SHA-256 fingerprint of the ingested batch
    pub checksum: String,
    /// Where the batch came from ("sample" or the source path)
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_id_roundtrip() {
        let id = LocationId::new(132);
        assert_eq!(id.value(), 132);

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "132");
        let back: LocationId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_overview_empty_is_zeroed() {
        let summary = OverviewSummary::empty();
        assert_eq!(summary.total_trips, 0);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.delay_percentage, 0.0);
    }

    #[test]
    fn test_overview_serialization_field_names() {
        let summary = OverviewSummary::empty();
        let json = serde_json::to_value(&summary).unwrap();
        // The frontend depends on these exact keys.
        assert!(json.get("total_trips").is_some());
        assert!(json.get("avg_trip_duration").is_some());
        assert!(json.get("avg_fare").is_some());
        assert!(json.get("total_revenue").is_some());
        assert!(json.get("delayed_trips_count").is_some());
        assert!(json.get("delay_percentage").is_some());
        assert!(json.get("avg_wait_time").is_some());
    }

    #[test]
    fn test_hourly_bucket_serialization() {
        let bucket = HourlyBucket {
            hour: 8,
            trip_count: 12,
            avg_wait_time: 6.5,
            delay_percentage: 25.0,
        };
        let json = serde_json::to_value(&bucket).unwrap();
        assert_eq!(json["hour"], 8);
        assert_eq!(json["trip_count"], 12);
    }
}
