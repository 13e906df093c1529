//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    AssetRepository, ComplaintRepository, DocumentRepository, LoginService, MaintenanceCommand,
    MaintenanceRepository, NoticeRepository, PaymentRepository, ReservationCommand,
    ReservationRepository, ResidentRepository, StorageProbe,
};
use crate::domain::{MaintenanceService, ReservationService, ResidentLoginService};

/// Parameter object bundling every port the handlers call.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub login: Arc<dyn LoginService>,
    pub maintenance: Arc<dyn MaintenanceCommand>,
    pub payments: Arc<dyn PaymentRepository>,
    pub notices: Arc<dyn NoticeRepository>,
    pub assets: Arc<dyn AssetRepository>,
    pub reservations: Arc<dyn ReservationCommand>,
    pub complaints: Arc<dyn ComplaintRepository>,
    pub documents: Arc<dyn DocumentRepository>,
    pub storage: Arc<dyn StorageProbe>,
}

impl HttpStatePorts {
    /// Wire every port to one store implementing all repositories, with the
    /// domain services layered on top.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use society_backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use society_backend::outbound::memory::MemoryStore;
    ///
    /// let clock = Arc::new(DefaultClock);
    /// let store = Arc::new(MemoryStore::new(clock.clone()));
    /// let state = HttpState::new(HttpStatePorts::backed_by(store, clock));
    /// assert!(!state.database_url_set);
    /// ```
    pub fn backed_by<S>(store: Arc<S>, clock: Arc<dyn Clock>) -> Self
    where
        S: ResidentRepository
            + MaintenanceRepository
            + PaymentRepository
            + NoticeRepository
            + AssetRepository
            + ReservationRepository
            + ComplaintRepository
            + DocumentRepository
            + StorageProbe
            + 'static,
    {
        Self {
            login: Arc::new(ResidentLoginService::new(store.clone())),
            maintenance: Arc::new(MaintenanceService::new(store.clone(), clock)),
            payments: store.clone(),
            notices: store.clone(),
            assets: store.clone(),
            reservations: Arc::new(ReservationService::new(store.clone())),
            complaints: store.clone(),
            documents: store.clone(),
            storage: store,
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub maintenance: Arc<dyn MaintenanceCommand>,
    pub payments: Arc<dyn PaymentRepository>,
    pub notices: Arc<dyn NoticeRepository>,
    pub assets: Arc<dyn AssetRepository>,
    pub reservations: Arc<dyn ReservationCommand>,
    pub complaints: Arc<dyn ComplaintRepository>,
    pub documents: Arc<dyn DocumentRepository>,
    pub storage: Arc<dyn StorageProbe>,
    /// Whether a database URL was supplied, reported by `GET /test`.
    pub database_url_set: bool,
}

impl HttpState {
    /// Construct state from a ports bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            login,
            maintenance,
            payments,
            notices,
            assets,
            reservations,
            complaints,
            documents,
            storage,
        } = ports;
        Self {
            login,
            maintenance,
            payments,
            notices,
            assets,
            reservations,
            complaints,
            documents,
            storage,
            database_url_set: false,
        }
    }

    /// Record whether a database URL was configured.
    #[must_use]
    pub fn with_database_url_set(mut self, set: bool) -> Self {
        self.database_url_set = set;
        self
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
