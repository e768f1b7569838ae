//! Domain model for trip records.

pub mod trip;

pub use trip::{PaymentType, TripRecord, DELAY_THRESHOLD_MINUTES};
