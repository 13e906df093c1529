//! PostgreSQL-backed [`NoticeRepository`].
//!
//! Tag filtering uses array containment (`tags @> ARRAY[$1]`), served by the
//! GIN index on `notice.tags`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{NoticeFilter, NoticeRepository, RepositoryError};
use crate::domain::{Notice, RecordId, Stored};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewNoticeRow, NoticeRow};
use super::pool::DbPool;
use super::schema::notice;

#[derive(Debug, Clone)]
pub struct DieselNoticeRepository {
    pool: DbPool,
}

impl DieselNoticeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoticeRepository for DieselNoticeRepository {
    async fn create(&self, value: &Notice) -> Result<Stored<Notice>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewNoticeRow::from_domain(RecordId::random().into(), value);

        diesel::insert_into(notice::table)
            .values(&row)
            .returning(NoticeRow::as_returning())
            .get_result::<NoticeRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?
            .into_stored()
    }

    async fn list(&self, filter: &NoticeFilter) -> Result<Vec<Stored<Notice>>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = notice::table.into_boxed();
        if let Some(tag) = filter.tag.as_deref() {
            query = query.filter(notice::tags.contains(vec![tag.to_owned()]));
        }

        let rows: Vec<NoticeRow> = query
            .select(NoticeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(NoticeRow::into_stored).collect()
    }
}
