//! Trip record domain model.
//!
//! A [`TripRecord`] is one ride event with timing, location, and fare
//! attributes. Records are validated once at the ingestion boundary and
//! treated as trusted, immutable input everywhere else; the aggregation code
//! never re-checks field invariants.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::LocationId;

/// Pickup waits longer than this many minutes count as delayed.
pub const DELAY_THRESHOLD_MINUTES: f64 = 10.0;

/// How the rider paid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Card,
    Cash,
}

/// One ride event.
///
/// The hour-of-day bucket and the delayed flag are derived from the stored
/// fields rather than stored themselves, so a record cannot disagree with
/// its own timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    /// Unique record id, assigned at ingestion
    pub id: Uuid,
    pub pickup_datetime: DateTime<Utc>,
    pub dropoff_datetime: DateTime<Utc>,
    pub pickup_location_id: LocationId,
    pub dropoff_location_id: LocationId,
    /// Label of the pickup zone
    pub zone_name: String,
    pub passenger_count: u32,
    pub trip_distance_miles: f64,
    /// Metered fare before tip and taxes
    pub fare_amount: f64,
    /// Total charged, including tip and taxes
    pub total_amount: f64,
    pub payment_type: PaymentType,
    pub trip_duration_minutes: f64,
    pub pickup_wait_time_minutes: f64,
}

impl TripRecord {
    /// Hour-of-day bucket (0-23) this trip's pickup falls into.
    pub fn pickup_hour(&self) -> u32 {
        self.pickup_datetime.hour()
    }

    /// Whether the pickup wait exceeded [`DELAY_THRESHOLD_MINUTES`].
    pub fn is_delayed(&self) -> bool {
        self.pickup_wait_time_minutes > DELAY_THRESHOLD_MINUTES
    }

    /// Check field invariants.
    ///
    /// Returns the first violation found. Called once per record at the
    /// ingestion boundary; a violation rejects the whole batch.
    pub fn validate(&self) -> Result<(), String> {
        if self.zone_name.trim().is_empty() {
            return Err("zone_name must not be empty".to_string());
        }
        if self.passenger_count == 0 {
            return Err("passenger_count must be at least 1".to_string());
        }
        if self.dropoff_datetime < self.pickup_datetime {
            return Err("dropoff_datetime precedes pickup_datetime".to_string());
        }

        for (field, value) in [
            ("trip_distance_miles", self.trip_distance_miles),
            ("fare_amount", self.fare_amount),
            ("total_amount", self.total_amount),
            ("trip_duration_minutes", self.trip_duration_minutes),
            ("pickup_wait_time_minutes", self.pickup_wait_time_minutes),
        ] {
            if !value.is_finite() {
                return Err(format!("{} is not a finite number", field));
            }
            if value < 0.0 {
                return Err(format!("{} must be non-negative, got {}", field, value));
            }
        }

        Ok(())
    }
}
