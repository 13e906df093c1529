//! PostgreSQL-backed [`MaintenanceRepository`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{MaintenanceFilter, MaintenanceRepository, RepositoryError};
use crate::domain::{MaintenanceRequest, MaintenanceStatus, RecordId, Stored};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{MaintenanceRow, MaintenanceStatusUpdate, NewMaintenanceRow};
use super::pool::DbPool;
use super::schema::maintenancerequest;

#[derive(Debug, Clone)]
pub struct DieselMaintenanceRepository {
    pool: DbPool,
}

impl DieselMaintenanceRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MaintenanceRepository for DieselMaintenanceRepository {
    async fn create(
        &self,
        ticket: &MaintenanceRequest,
    ) -> Result<Stored<MaintenanceRequest>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewMaintenanceRow::from_domain(RecordId::random().into(), ticket);

        diesel::insert_into(maintenancerequest::table)
            .values(&row)
            .returning(MaintenanceRow::as_returning())
            .get_result::<MaintenanceRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?
            .into_stored()
    }

    async fn list(
        &self,
        filter: &MaintenanceFilter,
    ) -> Result<Vec<Stored<MaintenanceRequest>>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = maintenancerequest::table.into_boxed();
        if let Some(status) = filter.status.as_deref() {
            query = query.filter(maintenancerequest::status.eq(status));
        }
        if let Some(requested_by) = filter.requested_by.as_deref() {
            query = query.filter(maintenancerequest::requested_by.eq(requested_by));
        }

        let rows: Vec<MaintenanceRow> = query
            .order((
                maintenancerequest::created_at.asc(),
                maintenancerequest::id.asc(),
            ))
            .select(MaintenanceRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(MaintenanceRow::into_stored).collect()
    }

    async fn update_status(
        &self,
        id: &RecordId,
        status: MaintenanceStatus,
        at: DateTime<Utc>,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = MaintenanceStatusUpdate {
            status: status.as_str(),
            updated_at: at,
        };

        let matched = diesel::update(maintenancerequest::table.find(*id.as_uuid()))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(matched > 0)
    }
}
