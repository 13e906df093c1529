//! PostgreSQL-backed [`ResidentRepository`].
//!
//! The unique index on `resident.email` makes `insert_if_absent` a single
//! `INSERT ... ON CONFLICT DO NOTHING`, so concurrent logins for one email
//! create at most one row.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RepositoryError, ResidentRepository};
use crate::domain::{EmailAddress, RecordId, Resident, Stored};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewResidentRow, ResidentRow};
use super::pool::DbPool;
use super::schema::resident;

#[derive(Debug, Clone)]
pub struct DieselResidentRepository {
    pool: DbPool,
}

impl DieselResidentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResidentRepository for DieselResidentRepository {
    async fn insert_if_absent(&self, value: &Resident) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewResidentRow::from_domain(RecordId::random().into(), value);

        let inserted = diesel::insert_into(resident::table)
            .values(&row)
            .on_conflict(resident::email)
            .do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(inserted > 0)
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Stored<Resident>>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = resident::table
            .filter(resident::email.eq(email.as_str()))
            .select(ResidentRow::as_select())
            .first::<ResidentRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(ResidentRow::into_stored).transpose()
    }
}
