//! # RHA Rust Backend
//!
//! Ride-hailing analytics engine.
//!
//! This crate provides the Rust backend for the Ride-Hailing Analytics (RHA)
//! dashboard. It ingests taxi-trip data (a generated sample dataset or a CSV
//! export), validates it at the boundary, and computes the descriptive
//! statistics the dashboard renders: an overview KPI snapshot, an hourly
//! breakdown, and a per-zone breakdown. The backend exposes a REST API via
//! Axum for the React frontend.
//!
//! ## Features
//!
//! - **Ingestion**: Generate a deterministic sample dataset or load trips
//!   from CSV, with whole-batch validation at the boundary
//! - **Analytics**: Overview, hourly, and zone aggregates recomputed on every
//!   query from the current record set
//! - **Storage**: Repository pattern with in-memory and JSON-file backends
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`models`]: Domain model for trip records and boundary validation
//! - [`db`]: Repository pattern and persistence layer
//! - [`services`]: Analytics computation, sample generation, ingestion
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod db;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
