//! Property-based tests for the aggregation invariants.

mod support;

use proptest::prelude::*;

use rha_rust::models::TripRecord;
use rha_rust::services::analytics::{compute_hourly, compute_overview, compute_zones};

use support::trip_in_zone;

fn trip_strategy() -> impl Strategy<Value = TripRecord> {
    (
        0u32..24,
        0.0f64..60.0,
        0.0f64..100.0,
        5.0f64..120.0,
        prop::sample::select(vec![4i64, 43, 90, 132, 161, 230]),
    )
        .prop_map(|(hour, wait, fare, duration, zone)| {
            trip_in_zone(hour, wait, fare, duration, zone, "Test Zone")
        })
}

fn trips_strategy() -> impl Strategy<Value = Vec<TripRecord>> {
    prop::collection::vec(trip_strategy(), 0..60)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

proptest! {
    #[test]
    fn prop_hourly_buckets_conserve_records(trips in trips_strategy()) {
        let hourly = compute_hourly(&trips);
        let total: usize = hourly.iter().map(|b| b.trip_count).sum();
        prop_assert_eq!(total, trips.len());
    }

    #[test]
    fn prop_zone_buckets_conserve_records(trips in trips_strategy()) {
        let zones = compute_zones(&trips);
        let total: usize = zones.iter().map(|b| b.trip_count).sum();
        prop_assert_eq!(total, trips.len());
    }

    #[test]
    fn prop_revenue_is_exact_sum(trips in trips_strategy()) {
        let overview = compute_overview(&trips);
        let expected: f64 = trips.iter().map(|t| t.total_amount).sum();
        prop_assert_eq!(overview.total_revenue, round2(expected));
    }

    #[test]
    fn prop_overview_is_pure(trips in trips_strategy()) {
        prop_assert_eq!(compute_overview(&trips), compute_overview(&trips));
    }

    #[test]
    fn prop_adding_delayed_trip_never_lowers_delay_rate(
        trips in prop::collection::vec(trip_strategy(), 1..40),
        extra_wait in 10.1f64..120.0,
    ) {
        let before = compute_overview(&trips).delay_percentage;

        let mut extended = trips;
        extended.push(trip_in_zone(12, extra_wait, 10.0, 15.0, 161, "Test Zone"));
        let after = compute_overview(&extended).delay_percentage;

        prop_assert!(after >= before, "delay fell from {} to {}", before, after);
    }

    #[test]
    fn prop_hourly_output_is_sorted_and_dense(trips in trips_strategy()) {
        let hourly = compute_hourly(&trips);
        prop_assert!(hourly.windows(2).all(|w| w[0].hour < w[1].hour));
        // Sparse policy: a bucket only exists because a record landed in it.
        prop_assert!(hourly.iter().all(|b| b.trip_count > 0));
    }

    #[test]
    fn prop_percentages_are_bounded(trips in trips_strategy()) {
        let overview = compute_overview(&trips);
        prop_assert!((0.0..=100.0).contains(&overview.delay_percentage));

        for bucket in compute_hourly(&trips) {
            prop_assert!((0.0..=100.0).contains(&bucket.delay_percentage));
        }
        for bucket in compute_zones(&trips) {
            prop_assert!((0.0..=100.0).contains(&bucket.delay_percentage));
        }
    }
}

#[test]
fn test_empty_set_is_all_zero() {
    let overview = compute_overview(&[]);
    assert_eq!(overview.total_trips, 0);
    assert_eq!(overview.avg_trip_duration, 0.0);
    assert_eq!(overview.avg_fare, 0.0);
    assert_eq!(overview.avg_wait_time, 0.0);
    assert_eq!(overview.delay_percentage, 0.0);
    assert_eq!(overview.total_revenue, 0.0);
}
