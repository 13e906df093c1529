//! PostgreSQL-backed [`AssetRepository`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AssetRepository, RepositoryError};
use crate::domain::{Asset, RecordId, Stored};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AssetRow, NewAssetRow};
use super::pool::DbPool;
use super::schema::asset;

#[derive(Debug, Clone)]
pub struct DieselAssetRepository {
    pool: DbPool,
}

impl DieselAssetRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssetRepository for DieselAssetRepository {
    async fn create(&self, value: &Asset) -> Result<Stored<Asset>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewAssetRow::from_domain(RecordId::random().into(), value);

        diesel::insert_into(asset::table)
            .values(&row)
            .returning(AssetRow::as_returning())
            .get_result::<AssetRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?
            .into_stored()
    }

    async fn list(&self) -> Result<Vec<Stored<Asset>>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<AssetRow> = asset::table
            .order((asset::created_at.asc(), asset::id.asc()))
            .select(AssetRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(AssetRow::into_stored).collect()
    }
}
