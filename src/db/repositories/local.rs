//! In-memory repository implementation.
//!
//! Holds the record set in a `parking_lot::RwLock`. This is the default
//! backend for local development and tests, and the reference for the
//! replace-wholesale semantics the trait requires.

use async_trait::async_trait;
use parking_lot::RwLock;

use super::super::repository::{RepositoryResult, TripRepository};
use crate::models::TripRecord;

/// In-memory trip store.
#[derive(Default, Debug)]
pub struct LocalRepository {
    trips: RwLock<Vec<TripRecord>>,
}

impl LocalRepository {
    /// Create an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with records (test helper).
    pub fn with_trips(trips: Vec<TripRecord>) -> Self {
        Self {
            trips: RwLock::new(trips),
        }
    }
}

#[async_trait]
impl TripRepository for LocalRepository {
    async fn replace_trips(&self, trips: Vec<TripRecord>) -> RepositoryResult<usize> {
        let count = trips.len();
        // Single assignment under the write lock keeps the swap atomic for readers.
        *self.trips.write() = trips;
        Ok(count)
    }

    async fn fetch_trips(&self) -> RepositoryResult<Vec<TripRecord>> {
        Ok(self.trips.read().clone())
    }

    async fn trip_count(&self) -> RepositoryResult<usize> {
        Ok(self.trips.read().len())
    }

    async fn clear(&self) -> RepositoryResult<usize> {
        let mut guard = self.trips.write();
        let removed = guard.len();
        guard.clear();
        Ok(removed)
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sample_data::generate_sample_trips;

    #[tokio::test]
    async fn test_empty_before_ingestion() {
        let repo = LocalRepository::new();
        assert_eq!(repo.trip_count().await.unwrap(), 0);
        assert!(repo.fetch_trips().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_replace_swaps_not_appends() {
        let repo = LocalRepository::new();
        let first = generate_sample_trips(10, 1);
        let second = generate_sample_trips(7, 2);

        repo.replace_trips(first).await.unwrap();
        assert_eq!(repo.trip_count().await.unwrap(), 10);

        repo.replace_trips(second).await.unwrap();
        assert_eq!(repo.trip_count().await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_clear_reports_removed_count() {
        let repo = LocalRepository::with_trips(generate_sample_trips(5, 1));
        assert_eq!(repo.clear().await.unwrap(), 5);
        assert_eq!(repo.trip_count().await.unwrap(), 0);
    }
}
