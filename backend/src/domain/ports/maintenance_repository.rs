//! Port for maintenance ticket persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{MaintenanceRequest, MaintenanceStatus, RecordId, Stored};

use super::RepositoryError;

/// Equality filter over maintenance tickets. Empty means everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceFilter {
    /// Compared with the status wire string.
    pub status: Option<String>,
    pub requested_by: Option<String>,
}

impl MaintenanceFilter {
    pub fn matches(&self, ticket: &MaintenanceRequest) -> bool {
        self.status
            .as_deref()
            .is_none_or(|status| ticket.status().as_str() == status)
            && self
                .requested_by
                .as_deref()
                .is_none_or(|email| ticket.requested_by() == email)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    async fn create(
        &self,
        ticket: &MaintenanceRequest,
    ) -> Result<Stored<MaintenanceRequest>, RepositoryError>;

    async fn list(
        &self,
        filter: &MaintenanceFilter,
    ) -> Result<Vec<Stored<MaintenanceRequest>>, RepositoryError>;

    /// Set the status and `updated_at` of ticket `id`.
    ///
    /// Returns `false` when no ticket has that id.
    async fn update_status(
        &self,
        id: &RecordId,
        status: MaintenanceStatus,
        at: DateTime<Utc>,
    ) -> Result<bool, RepositoryError>;
}
