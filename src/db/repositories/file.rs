//! JSON-file-backed repository implementation.
//!
//! Persists the record set as a JSON array next to the process. State is
//! loaded once on open and mirrored in memory; `replace_trips` writes the new
//! batch to a temporary file and renames it over the old one, so a crash
//! mid-write leaves the previous set intact.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::super::repository::{ErrorContext, RepositoryError, RepositoryResult, TripRepository};
use crate::models::TripRecord;

/// Trip store persisted to a JSON file.
#[derive(Debug)]
pub struct FileRepository {
    path: PathBuf,
    trips: RwLock<Vec<TripRecord>>,
}

impl FileRepository {
    /// Open a file-backed repository, loading any previously stored records.
    ///
    /// A missing file is not an error: the store starts empty and the file is
    /// created on the first ingestion.
    pub fn open(path: impl Into<PathBuf>) -> RepositoryResult<Self> {
        let path = path.into();
        let trips = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                RepositoryError::storage_with_context(
                    format!("Stored trip set is not valid JSON: {}", e),
                    ErrorContext::new("open").with_details(path.display().to_string()),
                )
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(RepositoryError::storage_with_context(
                    format!("Failed to read trip store: {}", e),
                    ErrorContext::new("open").with_details(path.display().to_string()),
                ))
            }
        };

        log::debug!(
            "opened trip store at {} with {} records",
            path.display(),
            trips.len()
        );

        Ok(Self {
            path,
            trips: RwLock::new(trips),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, trips: &[TripRecord]) -> RepositoryResult<()> {
        let bytes = serde_json::to_vec(trips).map_err(|e| {
            RepositoryError::storage_with_context(
                format!("Failed to serialize trip set: {}", e),
                ErrorContext::new("persist"),
            )
        })?;

        let tmp = self.path.with_extension("tmp");
        let io_context = || ErrorContext::new("persist").with_details(self.path.display().to_string());

        fs::write(&tmp, bytes).map_err(|e| {
            RepositoryError::storage_with_context(
                format!("Failed to write trip store: {}", e),
                io_context(),
            )
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            RepositoryError::storage_with_context(
                format!("Failed to replace trip store: {}", e),
                io_context(),
            )
        })
    }
}

#[async_trait]
impl TripRepository for FileRepository {
    async fn replace_trips(&self, trips: Vec<TripRecord>) -> RepositoryResult<usize> {
        // Persist first; the in-memory set only changes once the file swap
        // succeeded, so memory and disk cannot diverge on error.
        self.persist(&trips)?;
        let count = trips.len();
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
        let removed = self.trips.read().len();
        self.persist(&[])?;
        self.trips.write().clear();
        Ok(removed)
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        // Usable when the backing file's directory exists and is writable;
        // probing with a metadata call keeps this cheap.
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => Ok(dir.exists()),
            _ => Ok(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sample_data::generate_sample_trips;

    #[tokio::test]
    async fn test_roundtrip_through_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trips.json");

        let trips = generate_sample_trips(25, 42);
        {
            let repo = FileRepository::open(&path).unwrap();
            repo.replace_trips(trips.clone()).await.unwrap();
        }

        let reopened = FileRepository::open(&path).unwrap();
        let loaded = reopened.fetch_trips().await.unwrap();
        assert_eq!(loaded, trips);
    }

    #[tokio::test]
    async fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileRepository::open(dir.path().join("absent.json")).unwrap();
        assert_eq!(repo.trip_count().await.unwrap(), 0);
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trips.json");
        fs::write(&path, b"not json").unwrap();

        let err = FileRepository::open(&path).unwrap_err();
        assert!(matches!(err, RepositoryError::StorageError { .. }));
    }

    #[tokio::test]
    async fn test_clear_truncates_backing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trips.json");

        let repo = FileRepository::open(&path).unwrap();
        repo.replace_trips(generate_sample_trips(5, 1)).await.unwrap();
        repo.clear().await.unwrap();

        let reopened = FileRepository::open(&path).unwrap();
        assert_eq!(reopened.trip_count().await.unwrap(), 0);
    }
}
