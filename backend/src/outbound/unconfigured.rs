//! Adapter used when no record store is configured.
//!
//! Every operation fails with [`RepositoryError::Unavailable`], which the
//! HTTP layer answers with `503 Service Unavailable`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{
    AssetRepository, ComplaintFilter, ComplaintRepository, DocumentFilter, DocumentRepository,
    MaintenanceFilter, MaintenanceRepository, NoticeFilter, NoticeRepository, PaymentFilter,
    PaymentRepository, RepositoryError, ReservationFilter, ReservationRepository,
    ResidentRepository, StorageProbe, StorageStatus,
};
use crate::domain::{
    Asset, Complaint, Document, EmailAddress, MaintenanceRequest, MaintenanceStatus, Notice,
    Payment, RecordId, Reservation, ReservationWindow, Resident, Stored,
};

/// Stand-in store that refuses every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredStore;

fn unavailable<T>() -> Result<T, RepositoryError> {
    Err(RepositoryError::unavailable("database not configured"))
}

#[async_trait]
impl ResidentRepository for UnconfiguredStore {
    async fn insert_if_absent(&self, _resident: &Resident) -> Result<bool, RepositoryError> {
        unavailable()
    }

    async fn find_by_email(
        &self,
        _email: &EmailAddress,
    ) -> Result<Option<Stored<Resident>>, RepositoryError> {
        unavailable()
    }
}

#[async_trait]
impl MaintenanceRepository for UnconfiguredStore {
    async fn create(
        &self,
        _ticket: &MaintenanceRequest,
    ) -> Result<Stored<MaintenanceRequest>, RepositoryError> {
        unavailable()
    }

    async fn list(
        &self,
        _filter: &MaintenanceFilter,
    ) -> Result<Vec<Stored<MaintenanceRequest>>, RepositoryError> {
        unavailable()
    }

    async fn update_status(
        &self,
        _id: &RecordId,
        _status: MaintenanceStatus,
        _at: DateTime<Utc>,
    ) -> Result<bool, RepositoryError> {
        unavailable()
    }
}

#[async_trait]
impl PaymentRepository for UnconfiguredStore {
    async fn create(&self, _payment: &Payment) -> Result<Stored<Payment>, RepositoryError> {
        unavailable()
    }

    async fn list(&self, _filter: &PaymentFilter) -> Result<Vec<Stored<Payment>>, RepositoryError> {
        unavailable()
    }
}

#[async_trait]
impl NoticeRepository for UnconfiguredStore {
    async fn create(&self, _notice: &Notice) -> Result<Stored<Notice>, RepositoryError> {
        unavailable()
    }

    async fn list(&self, _filter: &NoticeFilter) -> Result<Vec<Stored<Notice>>, RepositoryError> {
        unavailable()
    }
}

#[async_trait]
impl AssetRepository for UnconfiguredStore {
    async fn create(&self, _asset: &Asset) -> Result<Stored<Asset>, RepositoryError> {
        unavailable()
    }

    async fn list(&self) -> Result<Vec<Stored<Asset>>, RepositoryError> {
        unavailable()
    }
}

#[async_trait]
impl ReservationRepository for UnconfiguredStore {
    async fn create(
        &self,
        _reservation: &Reservation,
    ) -> Result<Stored<Reservation>, RepositoryError> {
        unavailable()
    }

    async fn list(
        &self,
        _filter: &ReservationFilter,
    ) -> Result<Vec<Stored<Reservation>>, RepositoryError> {
        unavailable()
    }

    async fn find_overlapping(
        &self,
        _asset_name: &str,
        _window: &ReservationWindow,
    ) -> Result<Option<Stored<Reservation>>, RepositoryError> {
        unavailable()
    }
}

#[async_trait]
impl ComplaintRepository for UnconfiguredStore {
    async fn create(&self, _complaint: &Complaint) -> Result<Stored<Complaint>, RepositoryError> {
        unavailable()
    }

    async fn list(
        &self,
        _filter: &ComplaintFilter,
    ) -> Result<Vec<Stored<Complaint>>, RepositoryError> {
        unavailable()
    }
}

#[async_trait]
impl DocumentRepository for UnconfiguredStore {
    async fn create(&self, _document: &Document) -> Result<Stored<Document>, RepositoryError> {
        unavailable()
    }

    async fn list(
        &self,
        _filter: &DocumentFilter,
    ) -> Result<Vec<Stored<Document>>, RepositoryError> {
        unavailable()
    }
}

#[async_trait]
impl StorageProbe for UnconfiguredStore {
    async fn probe(&self) -> Result<StorageStatus, RepositoryError> {
        unavailable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_call_reports_unavailable() {
        let store = UnconfiguredStore;
        let probe = store.probe().await.expect_err("unconfigured");
        let assets = AssetRepository::list(&store).await.expect_err("unconfigured");
        assert!(probe.is_unavailable());
        assert!(matches!(assets, RepositoryError::Unavailable { .. }));
    }
}
