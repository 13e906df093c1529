//! PostgreSQL-backed [`ReservationRepository`].
//!
//! The overlap lookup pushes the half-open interval test into SQL:
//! `start_time < $end AND end_time > $start` for the same asset.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RepositoryError, ReservationFilter, ReservationRepository};
use crate::domain::{RecordId, Reservation, ReservationWindow, Stored};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewReservationRow, ReservationRow};
use super::pool::DbPool;
use super::schema::reservation;

#[derive(Debug, Clone)]
pub struct DieselReservationRepository {
    pool: DbPool,
}

impl DieselReservationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for DieselReservationRepository {
    async fn create(&self, value: &Reservation) -> Result<Stored<Reservation>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewReservationRow::from_domain(RecordId::random().into(), value);

        diesel::insert_into(reservation::table)
            .values(&row)
            .returning(ReservationRow::as_returning())
            .get_result::<ReservationRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?
            .into_stored()
    }

    async fn list(
        &self,
        filter: &ReservationFilter,
    ) -> Result<Vec<Stored<Reservation>>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = reservation::table.into_boxed();
        if let Some(asset_name) = filter.asset_name.as_deref() {
            query = query.filter(reservation::asset_name.eq(asset_name));
        }
        if let Some(requested_by) = filter.requested_by.as_deref() {
            query = query.filter(reservation::requested_by.eq(requested_by));
        }

        let rows: Vec<ReservationRow> = query
            .order((reservation::start_time.asc(), reservation::id.asc()))
            .select(ReservationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(ReservationRow::into_stored).collect()
    }

    async fn find_overlapping(
        &self,
        asset_name: &str,
        window: &ReservationWindow,
    ) -> Result<Option<Stored<Reservation>>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = reservation::table
            .filter(reservation::asset_name.eq(asset_name))
            .filter(reservation::start_time.lt(window.end()))
            .filter(reservation::end_time.gt(window.start()))
            .order(reservation::start_time.asc())
            .select(ReservationRow::as_select())
            .first::<ReservationRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(ReservationRow::into_stored).transpose()
    }
}
