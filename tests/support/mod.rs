// Not every integration suite uses every helper.
#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use rha_rust::api::LocationId;
use rha_rust::models::{PaymentType, TripRecord};

/// Build a valid trip pinned to a pickup hour with the fields the
/// aggregates read; everything else gets fixed plausible values.
pub fn trip_at(hour: u32, wait: f64, fare: f64, duration: f64) -> TripRecord {
    trip_in_zone(hour, wait, fare, duration, 230, "Times Sq/Theatre District")
}

pub fn trip_in_zone(
    hour: u32,
    wait: f64,
    fare: f64,
    duration: f64,
    location_id: i64,
    zone_name: &str,
) -> TripRecord {
    let pickup = Utc.with_ymd_and_hms(2024, 1, 15, hour, 30, 0).unwrap();
    TripRecord {
        id: Uuid::new_v4(),
        pickup_datetime: pickup,
        dropoff_datetime: pickup + chrono::Duration::minutes(duration.ceil() as i64),
        pickup_location_id: LocationId::new(location_id),
        dropoff_location_id: LocationId::new(132),
        zone_name: zone_name.to_string(),
        passenger_count: 1,
        trip_distance_miles: 2.0,
        fare_amount: fare,
        total_amount: fare,
        payment_type: PaymentType::Card,
        trip_duration_minutes: duration,
        pickup_wait_time_minutes: wait,
    }
}
