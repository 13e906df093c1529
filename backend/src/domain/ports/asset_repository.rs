//! Port for asset persistence.

use async_trait::async_trait;

use crate::domain::{Asset, Stored};

use super::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetRepository: Send + Sync {
    async fn create(&self, asset: &Asset) -> Result<Stored<Asset>, RepositoryError>;

    async fn list(&self) -> Result<Vec<Stored<Asset>>, RepositoryError>;
}
