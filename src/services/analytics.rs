//! Pure aggregation over trip records.
//!
//! Everything in this module is a deterministic function of the record slice
//! it is given: no I/O, no hidden state, recomputed on every query. Averages
//! are full-precision sums divided by counts; display rounding happens once
//! at the end, and per-bucket averages are never averaged again to produce
//! dataset-wide figures.

use std::collections::BTreeMap;

use crate::api::{HourlyBucket, LocationId, OverviewSummary, ZoneBucket};
use crate::models::TripRecord;

/// Round for display, half away from zero.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Compute the dataset-wide KPI snapshot.
///
/// An empty slice yields the all-zero summary; no average divides by zero.
pub fn compute_overview(trips: &[TripRecord]) -> OverviewSummary {
    let total_trips = trips.len();
    if total_trips == 0 {
        return OverviewSummary::empty();
    }

    let mut duration_sum = 0.0;
    let mut fare_sum = 0.0;
    let mut wait_sum = 0.0;
    let mut revenue_sum = 0.0;
    let mut delayed_count = 0usize;

    for trip in trips {
        duration_sum += trip.trip_duration_minutes;
        fare_sum += trip.fare_amount;
        wait_sum += trip.pickup_wait_time_minutes;
        revenue_sum += trip.total_amount;
        if trip.is_delayed() {
            delayed_count += 1;
        }
    }

    let n = total_trips as f64;
    OverviewSummary {
        total_trips,
        avg_trip_duration: round_to(duration_sum / n, 1),
        avg_fare: round_to(fare_sum / n, 2),
        total_revenue: round_to(revenue_sum, 2),
        delayed_trips_count: delayed_count,
        delay_percentage: round_to(delayed_count as f64 / n * 100.0, 1),
        avg_wait_time: round_to(wait_sum / n, 1),
    }
}

struct BucketAccumulator {
    trip_count: usize,
    wait_sum: f64,
    delayed_count: usize,
}

impl BucketAccumulator {
    fn new() -> Self {
        Self {
            trip_count: 0,
            wait_sum: 0.0,
            delayed_count: 0,
        }
    }

    fn add(&mut self, trip: &TripRecord) {
        self.trip_count += 1;
        self.wait_sum += trip.pickup_wait_time_minutes;
        if trip.is_delayed() {
            self.delayed_count += 1;
        }
    }

    fn avg_wait(&self) -> f64 {
        round_to(self.wait_sum / self.trip_count as f64, 1)
    }

    fn delay_percentage(&self) -> f64 {
        round_to(self.delayed_count as f64 / self.trip_count as f64 * 100.0, 1)
    }
}

/// Group trips by pickup hour.
///
/// Only hours present in the data are emitted, ascending 0..24. Every record
/// lands in exactly one bucket, so bucket counts sum to the record count.
pub fn compute_hourly(trips: &[TripRecord]) -> Vec<HourlyBucket> {
    let mut by_hour: BTreeMap<u32, BucketAccumulator> = BTreeMap::new();

    for trip in trips {
        by_hour
            .entry(trip.pickup_hour())
            .or_insert_with(BucketAccumulator::new)
            .add(trip);
    }

    by_hour
        .into_iter()
        .map(|(hour, acc)| HourlyBucket {
            hour,
            trip_count: acc.trip_count,
            avg_wait_time: acc.avg_wait(),
            delay_percentage: acc.delay_percentage(),
        })
        .collect()
}

/// Group trips by pickup zone.
///
/// Output is ascending by location id; the order is deterministic but carries
/// no ranking semantics (top-N views are a consumer concern). When one id
/// appears with different zone names, the name on the first record
/// encountered in input order wins.
pub fn compute_zones(trips: &[TripRecord]) -> Vec<ZoneBucket> {
    struct ZoneAccumulator {
        zone_name: String,
        bucket: BucketAccumulator,
    }

    let mut by_zone: BTreeMap<i64, ZoneAccumulator> = BTreeMap::new();

    for trip in trips {
        by_zone
            .entry(trip.pickup_location_id.value())
            .or_insert_with(|| ZoneAccumulator {
                zone_name: trip.zone_name.clone(),
                bucket: BucketAccumulator::new(),
            })
            .bucket
            .add(trip);
    }

    by_zone
        .into_iter()
        .map(|(location_id, acc)| ZoneBucket {
            location_id: LocationId::new(location_id),
            zone_name: acc.zone_name,
            trip_count: acc.bucket.trip_count,
            avg_wait_time: acc.bucket.avg_wait(),
            delay_percentage: acc.bucket.delay_percentage(),
        })
        .collect()
}

#[cfg(test)]
#[path = "analytics_tests.rs"]
mod tests;
