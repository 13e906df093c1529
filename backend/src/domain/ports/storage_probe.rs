//! Port reporting on the backing store for the connectivity endpoint.

use async_trait::async_trait;

use super::RepositoryError;

/// What a successful probe learned about the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageStatus {
    /// Adapter kind, e.g. `postgres` or `memory`.
    pub backend: &'static str,
    pub database_name: Option<String>,
    /// Collections present in the store, sorted by name.
    pub collections: Vec<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageProbe: Send + Sync {
    /// Round-trip to the store and describe it.
    async fn probe(&self) -> Result<StorageStatus, RepositoryError>;
}
