//! Maintenance ticket service implementing [`MaintenanceCommand`].

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{MaintenanceCommand, MaintenanceFilter, MaintenanceRepository};
use crate::domain::{Error, MaintenanceRequest, MaintenanceStatus, RecordId, Stored};

/// Files, lists and updates maintenance tickets.
#[derive(Clone)]
pub struct MaintenanceService<R> {
    tickets: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> MaintenanceService<R> {
    /// Create a service; `clock` stamps status updates.
    pub fn new(tickets: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { tickets, clock }
    }
}

fn ticket_not_found(id: &str) -> Error {
    Error::not_found(format!("maintenance ticket {id} not found"))
}

#[async_trait]
impl<R> MaintenanceCommand for MaintenanceService<R>
where
    R: MaintenanceRepository,
{
    async fn create(
        &self,
        ticket: MaintenanceRequest,
    ) -> Result<Stored<MaintenanceRequest>, Error> {
        let stored = self.tickets.create(&ticket).await?;
        info!(
            id = %stored.id,
            category = stored.value.category(),
            "maintenance ticket filed"
        );
        Ok(stored)
    }

    async fn list(
        &self,
        filter: MaintenanceFilter,
    ) -> Result<Vec<Stored<MaintenanceRequest>>, Error> {
        Ok(self.tickets.list(&filter).await?)
    }

    async fn update_status(&self, id: &str, status: MaintenanceStatus) -> Result<(), Error> {
        let record_id: RecordId = id.parse().map_err(|_| ticket_not_found(id))?;
        let updated = self
            .tickets
            .update_status(&record_id, status, self.clock.utc())
            .await?;
        if !updated {
            return Err(ticket_not_found(id));
        }
        info!(id = %record_id, status = %status, "maintenance ticket status updated");
        Ok(())
    }
}

#[cfg(test)]
#[path = "maintenance_service_tests.rs"]
mod tests;
