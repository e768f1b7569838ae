//! Repository trait for trip record storage.
//!
//! The trait abstracts over storage backends so the service layer and the
//! HTTP handlers never care whether records live in memory or on disk.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::models::TripRecord;

/// Repository trait for the trip record store.
///
/// Ingestion is replace-wholesale: [`replace_trips`](TripRepository::replace_trips)
/// swaps the entire record set atomically, so concurrent readers observe either
/// the old or the new complete set, never a partial one.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait TripRepository: Send + Sync + std::fmt::Debug {
    /// Replace the stored record set with a new batch.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records now in the store
    /// * `Err(RepositoryError)` - If the backend fails to persist the batch
    async fn replace_trips(&self, trips: Vec<TripRecord>) -> RepositoryResult<usize>;

    /// Fetch the current full record set.
    ///
    /// Empty before any ingestion; callers must treat zero records as a
    /// valid, if degenerate, state.
    async fn fetch_trips(&self) -> RepositoryResult<Vec<TripRecord>>;

    /// Number of records currently stored.
    async fn trip_count(&self) -> RepositoryResult<usize>;

    /// Remove all stored records.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records removed
    async fn clear(&self) -> RepositoryResult<usize>;

    /// Check that the backend is reachable and usable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
