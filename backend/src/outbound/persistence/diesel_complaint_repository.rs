//! PostgreSQL-backed [`ComplaintRepository`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ComplaintFilter, ComplaintRepository, RepositoryError};
use crate::domain::{Complaint, RecordId, Stored};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ComplaintRow, NewComplaintRow};
use super::pool::DbPool;
use super::schema::complaint;

#[derive(Debug, Clone)]
pub struct DieselComplaintRepository {
    pool: DbPool,
}

impl DieselComplaintRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ComplaintRepository for DieselComplaintRepository {
    async fn create(&self, value: &Complaint) -> Result<Stored<Complaint>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewComplaintRow::from_domain(RecordId::random().into(), value);

        diesel::insert_into(complaint::table)
            .values(&row)
            .returning(ComplaintRow::as_returning())
            .get_result::<ComplaintRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?
            .into_stored()
    }

    async fn list(
        &self,
        filter: &ComplaintFilter,
    ) -> Result<Vec<Stored<Complaint>>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = complaint::table.into_boxed();
        if let Some(status) = filter.status.as_deref() {
            query = query.filter(complaint::status.eq(status));
        }

        let rows: Vec<ComplaintRow> = query
            .order((complaint::created_at.asc(), complaint::id.asc()))
            .select(ComplaintRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(ComplaintRow::into_stored).collect()
    }
}
