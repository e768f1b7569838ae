//! Service layer for business logic and orchestration.
//!
//! This module contains the analytics computation, the sample dataset
//! generator, and the ingestion orchestration that ties them to the
//! repository layer.

pub mod analytics;

pub mod ingest;

pub mod sample_data;

pub use analytics::{compute_hourly, compute_overview, compute_zones};
pub use ingest::{ingest, load_csv, validate_batch, IngestOptions};
pub use sample_data::generate_sample_trips;
