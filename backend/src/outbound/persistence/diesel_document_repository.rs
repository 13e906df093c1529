//! PostgreSQL-backed [`DocumentRepository`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{DocumentFilter, DocumentRepository, RepositoryError};
use crate::domain::{Document, RecordId, Stored};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{DocumentRow, NewDocumentRow};
use super::pool::DbPool;
use super::schema::document;

#[derive(Debug, Clone)]
pub struct DieselDocumentRepository {
    pool: DbPool,
}

impl DieselDocumentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentRepository for DieselDocumentRepository {
    async fn create(&self, value: &Document) -> Result<Stored<Document>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewDocumentRow::from_domain(RecordId::random().into(), value);

        diesel::insert_into(document::table)
            .values(&row)
            .returning(DocumentRow::as_returning())
            .get_result::<DocumentRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?
            .into_stored()
    }

    async fn list(
        &self,
        filter: &DocumentFilter,
    ) -> Result<Vec<Stored<Document>>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = document::table.into_boxed();
        if let Some(category) = filter.category.as_deref() {
            query = query.filter(document::category.eq(category));
        }

        let rows: Vec<DocumentRow> = query
            .order((document::created_at.asc(), document::id.asc()))
            .select(DocumentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(DocumentRow::into_stored).collect()
    }
}
