//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating and configuring repository
//! instances based on runtime configuration.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repositories::{FileRepository, LocalRepository};
use super::repository::{RepositoryError, RepositoryResult, TripRepository};

/// Environment variable selecting the storage backend.
pub const REPOSITORY_TYPE_ENV: &str = "REPOSITORY_TYPE";
/// Environment variable with the backing file path for the file backend.
pub const TRIP_STORE_PATH_ENV: &str = "TRIP_STORE_PATH";

const DEFAULT_STORE_PATH: &str = "trips.json";

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory repository
    Local,
    /// JSON-file-backed repository
    File,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("local", "file")
    ///
    /// # Returns
    /// * `Ok(RepositoryType)` if valid
    /// * `Err` if invalid
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            "file" | "json" => Ok(Self::File),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variables.
    ///
    /// Reads `REPOSITORY_TYPE`. Defaults to File if a store path is
    /// configured, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var(REPOSITORY_TYPE_ENV) {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var(TRIP_STORE_PATH_ENV).is_ok() {
            Self::File
        } else {
            Self::Local
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use rha_rust::db::{RepositoryFactory, RepositoryType};
///
/// let local = RepositoryFactory::create_local();
/// let file = RepositoryFactory::create_file("trips.json")?;
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Arguments
    /// * `repo_type` - Type of repository to create
    /// * `store_path` - Backing file path (required for the file backend)
    ///
    /// # Returns
    /// * `Ok(Arc<dyn TripRepository>)` - Boxed repository instance
    /// * `Err(RepositoryError)` - If creation fails
    pub fn create(
        repo_type: RepositoryType,
        store_path: Option<&Path>,
    ) -> RepositoryResult<Arc<dyn TripRepository>> {
        match repo_type {
            RepositoryType::Local => Ok(Self::create_local()),
            RepositoryType::File => {
                let path = store_path.ok_or_else(|| {
                    RepositoryError::configuration(
                        "File repository requires a store path".to_string(),
                    )
                })?;
                Ok(Self::create_file(path)? as Arc<dyn TripRepository>)
            }
        }
    }

    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn TripRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a file-backed repository.
    ///
    /// # Arguments
    /// * `path` - Path of the JSON store file
    pub fn create_file(path: impl Into<PathBuf>) -> RepositoryResult<Arc<FileRepository>> {
        Ok(Arc::new(FileRepository::open(path)?))
    }

    /// Create repository from environment configuration.
    ///
    /// Reads `REPOSITORY_TYPE` (and `TRIP_STORE_PATH` for the file backend)
    /// to determine which repository to create.
    pub fn from_env() -> RepositoryResult<Arc<dyn TripRepository>> {
        let repo_type = RepositoryType::from_env();
        let store_path = std::env::var(TRIP_STORE_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH));

        Self::create(repo_type, Some(&store_path))
    }

    /// Create repository from a TOML configuration file.
    ///
    /// # Arguments
    /// * `config_path` - Path to the repository.toml configuration file
    pub fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn TripRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config)
    }

    /// Create repository from a RepositoryConfig instance.
    pub fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn TripRepository>> {
        let repo_type = config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        Self::create(repo_type, Some(config.store_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_type_from_str() {
        assert_eq!(
            RepositoryType::from_str("local").unwrap(),
            RepositoryType::Local
        );
        assert_eq!(
            RepositoryType::from_str("file").unwrap(),
            RepositoryType::File
        );
        assert_eq!(
            RepositoryType::from_str("Json").unwrap(),
            RepositoryType::File
        );
        assert!(RepositoryType::from_str("postgres").is_err());
    }

    #[tokio::test]
    async fn test_create_local_repository() {
        let repo = RepositoryFactory::create_local();
        assert!(repo.health_check().await.unwrap());
    }

    #[test]
    fn test_file_backend_requires_path() {
        let err = RepositoryFactory::create(RepositoryType::File, None).unwrap_err();
        assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
    }

    #[tokio::test]
    async fn test_create_file_repository() {
        let dir = tempfile::tempdir().unwrap();
        let repo = RepositoryFactory::create_file(dir.path().join("trips.json")).unwrap();
        assert!(repo.health_check().await.unwrap());
    }
}
