//! Driving port for maintenance tickets.

use async_trait::async_trait;

use crate::domain::{Error, MaintenanceRequest, MaintenanceStatus, Stored};

use super::MaintenanceFilter;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MaintenanceCommand: Send + Sync {
    /// File a new ticket.
    async fn create(&self, ticket: MaintenanceRequest)
    -> Result<Stored<MaintenanceRequest>, Error>;

    async fn list(&self, filter: MaintenanceFilter)
    -> Result<Vec<Stored<MaintenanceRequest>>, Error>;

    /// Move ticket `id` to `status`.
    ///
    /// `id` is the raw path segment; an id that is not a record id is
    /// reported as not found.
    async fn update_status(&self, id: &str, status: MaintenanceStatus) -> Result<(), Error>;
}
