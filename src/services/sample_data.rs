//! Synthetic trip dataset generation.
//!
//! Stands in for the NYC TLC feed in local and demo deployments. Generation
//! is fully deterministic for a given seed (ChaCha8 stream, no process
//! entropy), so two ingestions with the same parameters produce
//! byte-identical batches and the same ingest checksum.
//!
//! Distributions mirror the production feed's rough shape: exponential
//! pickup waits mostly under the delay threshold, normally distributed
//! durations, and fares derived from distance and time at NYC-like rates.

use chrono::{DateTime, TimeZone, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use super::analytics::round_to;
use crate::api::LocationId;
use crate::models::{PaymentType, TripRecord};

/// Default number of trips in a sample batch.
pub const DEFAULT_SAMPLE_SIZE: usize = 1000;

/// Default generation seed.
pub const DEFAULT_SEED: u64 = 42;

/// Fixed palette of pickup/dropoff zones (NYC TLC ids and names).
///
/// A subset of the real zone lookup table, enough for non-degenerate
/// variance across zones without shipping all 265 rows.
const ZONES: &[(i64, &str)] = &[
    (4, "Alphabet City"),
    (13, "Battery Park City"),
    (43, "Central Park"),
    (48, "Clinton East"),
    (68, "East Chelsea"),
    (79, "East Village"),
    (90, "Flatiron"),
    (100, "Garment District"),
    (107, "Gramercy"),
    (113, "Greenwich Village North"),
    (132, "JFK Airport"),
    (138, "LaGuardia Airport"),
    (161, "Midtown Center"),
    (162, "Midtown East"),
    (186, "Penn Station/Madison Sq West"),
    (230, "Times Sq/Theatre District"),
    (234, "Union Sq"),
    (236, "Upper East Side North"),
    (249, "West Village"),
    (263, "Yorkville West"),
];

const PASSENGER_WEIGHTS: [(u32, f64); 5] =
    [(1, 0.50), (2, 0.25), (3, 0.15), (4, 0.08), (5, 0.02)];

const CARD_PROBABILITY: f64 = 0.7;

const BASE_FARE: f64 = 3.00;
const PER_MILE_RATE: f64 = 2.50;
const PER_MINUTE_RATE: f64 = 0.50;

/// Generate a deterministic batch of plausible trips.
///
/// All records satisfy [`TripRecord::validate`]; the batch spans January
/// 2024 with pickups across all hours and zones from the fixed palette.
pub fn generate_sample_trips(count: usize, seed: u64) -> Vec<TripRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| generate_trip(&mut rng)).collect()
}

fn generate_trip(rng: &mut ChaCha8Rng) -> TripRecord {
    let pickup = sample_pickup_time(rng);

    // Trip duration 5-ish to 120 minutes, normal around 25.
    let duration = sample_normal(rng, 25.0, 15.0).max(5.0);
    let dropoff = pickup + chrono::Duration::seconds((duration * 60.0) as i64);

    // Pickup wait, mostly under the 10 minute delay threshold.
    let wait = sample_exponential(rng, 5.0);

    let distance = sample_exponential(rng, 3.0).max(0.1);

    let fare = BASE_FARE + distance * PER_MILE_RATE + duration * PER_MINUTE_RATE;
    // Tip and taxes land between 10% and 30% on top of the meter.
    let total = fare * (1.1 + 0.2 * rng.gen::<f64>());

    let (pickup_location_id, zone_name) = sample_zone(rng);
    let (dropoff_location_id, _) = sample_zone(rng);

    TripRecord {
        id: sample_uuid(rng),
        pickup_datetime: pickup,
        dropoff_datetime: dropoff,
        pickup_location_id,
        dropoff_location_id,
        zone_name: zone_name.to_string(),
        passenger_count: sample_passenger_count(rng),
        trip_distance_miles: round_to(distance, 2),
        fare_amount: round_to(fare, 2),
        total_amount: round_to(total, 2),
        payment_type: sample_payment_type(rng),
        trip_duration_minutes: round_to(duration, 1),
        pickup_wait_time_minutes: round_to(wait, 1),
    }
}

/// Random pickup second within January 2024.
fn sample_pickup_time(rng: &mut ChaCha8Rng) -> DateTime<Utc> {
    let day = rng.gen_range(1..=31);
    let hour = rng.gen_range(0..24);
    let minute = rng.gen_range(0..60);
    let second = rng.gen_range(0..60);
    // Always a single valid instant: components are in range and Utc has no gaps.
    Utc.with_ymd_and_hms(2024, 1, day, hour, minute, second)
        .unwrap()
}

fn sample_zone(rng: &mut ChaCha8Rng) -> (LocationId, &'static str) {
    let (id, name) = ZONES[rng.gen_range(0..ZONES.len())];
    (LocationId::new(id), name)
}

fn sample_passenger_count(rng: &mut ChaCha8Rng) -> u32 {
    let mut u = rng.gen::<f64>();
    for (count, weight) in PASSENGER_WEIGHTS {
        if u < weight {
            return count;
        }
        u -= weight;
    }
    PASSENGER_WEIGHTS[PASSENGER_WEIGHTS.len() - 1].0
}

fn sample_payment_type(rng: &mut ChaCha8Rng) -> PaymentType {
    if rng.gen::<f64>() < CARD_PROBABILITY {
        PaymentType::Card
    } else {
        PaymentType::Cash
    }
}

/// Record id drawn from the seeded stream so batches stay reproducible.
fn sample_uuid(rng: &mut ChaCha8Rng) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}

/// Box-Muller transform; one sample per call.
fn sample_normal(rng: &mut ChaCha8Rng, mean: f64, std_dev: f64) -> f64 {
    let u1 = rng.gen::<f64>().max(f64::MIN_POSITIVE);
    let u2 = rng.gen::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
    mean + std_dev * z
}

/// Inverse-CDF exponential sample with the given mean.
fn sample_exponential(rng: &mut ChaCha8Rng, mean: f64) -> f64 {
    let u = rng.gen::<f64>();
    -mean * (1.0 - u).ln()
}
