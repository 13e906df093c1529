//! In-process record store.
//!
//! Backs the service when `SOCIETY_STORAGE=memory` and drives the HTTP
//! integration tests. Every collection is a vector behind a Tokio `RwLock`;
//! records come back in insertion order. Contents vanish with the process.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use tokio::sync::RwLock;

use crate::domain::ports::{
    AssetRepository, ComplaintFilter, ComplaintRepository, DocumentFilter, DocumentRepository,
    MaintenanceFilter, MaintenanceRepository, NoticeFilter, NoticeRepository, PaymentFilter,
    PaymentRepository, RepositoryError, ReservationFilter, ReservationRepository,
    ResidentRepository, StorageProbe, StorageStatus,
};
use crate::domain::{
    Asset, Collection, Complaint, Document, EmailAddress, MaintenanceRequest, MaintenanceStatus,
    Notice, Payment, RecordId, Reservation, ReservationWindow, Resident, Stored,
};

/// One collection of records.
struct Table<T> {
    rows: RwLock<Vec<Stored<T>>>,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    async fn insert(&self, value: &T, now: DateTime<Utc>) -> Stored<T> {
        let stored = Stored::new(RecordId::random(), now, value.clone());
        self.rows.write().await.push(stored.clone());
        stored
    }

    async fn select(&self, predicate: impl Fn(&T) -> bool) -> Vec<Stored<T>> {
        self.rows
            .read()
            .await
            .iter()
            .filter(|row| predicate(&row.value))
            .cloned()
            .collect()
    }

    async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

/// Every repository port over process memory.
pub struct MemoryStore {
    clock: Arc<dyn Clock>,
    residents: Table<Resident>,
    maintenance: Table<MaintenanceRequest>,
    payments: Table<Payment>,
    notices: Table<Notice>,
    assets: Table<Asset>,
    reservations: Table<Reservation>,
    complaints: Table<Complaint>,
    documents: Table<Document>,
}

impl MemoryStore {
    /// Create an empty store; `clock` stamps `created_at` and `updated_at`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            residents: Table::new(),
            maintenance: Table::new(),
            payments: Table::new(),
            notices: Table::new(),
            assets: Table::new(),
            reservations: Table::new(),
            complaints: Table::new(),
            documents: Table::new(),
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    /// Number of records held for `collection`.
    pub async fn count(&self, collection: Collection) -> usize {
        match collection {
            Collection::Resident => self.residents.len().await,
            Collection::MaintenanceRequest => self.maintenance.len().await,
            Collection::Payment => self.payments.len().await,
            Collection::Notice => self.notices.len().await,
            Collection::Asset => self.assets.len().await,
            Collection::Reservation => self.reservations.len().await,
            Collection::Complaint => self.complaints.len().await,
            Collection::Document => self.documents.len().await,
        }
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl ResidentRepository for MemoryStore {
    async fn insert_if_absent(&self, resident: &Resident) -> Result<bool, RepositoryError> {
        // Hold the write lock across check and insert.
        let mut rows = self.residents.rows.write().await;
        if rows
            .iter()
            .any(|row| row.value.email() == resident.email())
        {
            return Ok(false);
        }
        rows.push(Stored::new(RecordId::random(), self.now(), resident.clone()));
        Ok(true)
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Stored<Resident>>, RepositoryError> {
        Ok(self
            .residents
            .select(|resident| resident.email() == email)
            .await
            .into_iter()
            .next())
    }
}

#[async_trait]
impl MaintenanceRepository for MemoryStore {
    async fn create(
        &self,
        ticket: &MaintenanceRequest,
    ) -> Result<Stored<MaintenanceRequest>, RepositoryError> {
        Ok(self.maintenance.insert(ticket, self.now()).await)
    }

    async fn list(
        &self,
        filter: &MaintenanceFilter,
    ) -> Result<Vec<Stored<MaintenanceRequest>>, RepositoryError> {
        Ok(self.maintenance.select(|ticket| filter.matches(ticket)).await)
    }

    async fn update_status(
        &self,
        id: &RecordId,
        status: MaintenanceStatus,
        at: DateTime<Utc>,
    ) -> Result<bool, RepositoryError> {
        let mut rows = self.maintenance.rows.write().await;
        let Some(row) = rows.iter_mut().find(|row| row.id == *id) else {
            return Ok(false);
        };
        row.value.set_status(status);
        row.updated_at = Some(at);
        Ok(true)
    }
}

#[async_trait]
impl PaymentRepository for MemoryStore {
    async fn create(&self, payment: &Payment) -> Result<Stored<Payment>, RepositoryError> {
        Ok(self.payments.insert(payment, self.now()).await)
    }

    async fn list(&self, filter: &PaymentFilter) -> Result<Vec<Stored<Payment>>, RepositoryError> {
        Ok(self.payments.select(|payment| filter.matches(payment)).await)
    }
}

#[async_trait]
impl NoticeRepository for MemoryStore {
    async fn create(&self, notice: &Notice) -> Result<Stored<Notice>, RepositoryError> {
        Ok(self.notices.insert(notice, self.now()).await)
    }

    async fn list(&self, filter: &NoticeFilter) -> Result<Vec<Stored<Notice>>, RepositoryError> {
        Ok(self.notices.select(|notice| filter.matches(notice)).await)
    }
}

#[async_trait]
impl AssetRepository for MemoryStore {
    async fn create(&self, asset: &Asset) -> Result<Stored<Asset>, RepositoryError> {
        Ok(self.assets.insert(asset, self.now()).await)
    }

    async fn list(&self) -> Result<Vec<Stored<Asset>>, RepositoryError> {
        Ok(self.assets.select(|_| true).await)
    }
}

#[async_trait]
impl ReservationRepository for MemoryStore {
    async fn create(
        &self,
        reservation: &Reservation,
    ) -> Result<Stored<Reservation>, RepositoryError> {
        Ok(self.reservations.insert(reservation, self.now()).await)
    }

    async fn list(
        &self,
        filter: &ReservationFilter,
    ) -> Result<Vec<Stored<Reservation>>, RepositoryError> {
        Ok(self
            .reservations
            .select(|reservation| filter.matches(reservation))
            .await)
    }

    async fn find_overlapping(
        &self,
        asset_name: &str,
        window: &ReservationWindow,
    ) -> Result<Option<Stored<Reservation>>, RepositoryError> {
        Ok(self
            .reservations
            .select(|reservation| reservation.conflicts_with(asset_name, window))
            .await
            .into_iter()
            .next())
    }
}

#[async_trait]
impl ComplaintRepository for MemoryStore {
    async fn create(&self, complaint: &Complaint) -> Result<Stored<Complaint>, RepositoryError> {
        Ok(self.complaints.insert(complaint, self.now()).await)
    }

    async fn list(
        &self,
        filter: &ComplaintFilter,
    ) -> Result<Vec<Stored<Complaint>>, RepositoryError> {
        Ok(self.complaints.select(|complaint| filter.matches(complaint)).await)
    }
}

#[async_trait]
impl DocumentRepository for MemoryStore {
    async fn create(&self, document: &Document) -> Result<Stored<Document>, RepositoryError> {
        Ok(self.documents.insert(document, self.now()).await)
    }

    async fn list(
        &self,
        filter: &DocumentFilter,
    ) -> Result<Vec<Stored<Document>>, RepositoryError> {
        Ok(self.documents.select(|document| filter.matches(document)).await)
    }
}

#[async_trait]
impl StorageProbe for MemoryStore {
    async fn probe(&self) -> Result<StorageStatus, RepositoryError> {
        let mut collections = Vec::new();
        for collection in Collection::ALL {
            if self.count(collection).await > 0 {
                collections.push(collection.as_str().to_owned());
            }
        }
        collections.sort_unstable();
        Ok(StorageStatus {
            backend: "memory",
            database_name: None,
            collections,
        })
    }
}
