//! Builders for the HTTP state from the resolved storage backend.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::{info, warn};

use society_backend::domain::{MaintenanceService, ReservationService, ResidentLoginService};
use society_backend::inbound::http::state::{HttpState, HttpStatePorts};
use society_backend::outbound::memory::MemoryStore;
use society_backend::outbound::persistence::{
    DbPool, DieselAssetRepository, DieselComplaintRepository, DieselDocumentRepository,
    DieselMaintenanceRepository, DieselNoticeRepository, DieselPaymentRepository,
    DieselReservationRepository, DieselResidentRepository, DieselStorageProbe, PoolConfig,
    run_migrations,
};
use society_backend::outbound::unconfigured::UnconfiguredStore;

use super::config::{ServerConfig, StorageBackend};

/// Wire every port to its Diesel adapter over one pool.
fn postgres_ports(pool: &DbPool, clock: Arc<dyn Clock>) -> HttpStatePorts {
    HttpStatePorts {
        login: Arc::new(ResidentLoginService::new(Arc::new(
            DieselResidentRepository::new(pool.clone()),
        ))),
        maintenance: Arc::new(MaintenanceService::new(
            Arc::new(DieselMaintenanceRepository::new(pool.clone())),
            clock,
        )),
        payments: Arc::new(DieselPaymentRepository::new(pool.clone())),
        notices: Arc::new(DieselNoticeRepository::new(pool.clone())),
        assets: Arc::new(DieselAssetRepository::new(pool.clone())),
        reservations: Arc::new(ReservationService::new(Arc::new(
            DieselReservationRepository::new(pool.clone()),
        ))),
        complaints: Arc::new(DieselComplaintRepository::new(pool.clone())),
        documents: Arc::new(DieselDocumentRepository::new(pool.clone())),
        storage: Arc::new(DieselStorageProbe::new(pool.clone())),
    }
}

/// Build handler state for the configured backend.
///
/// Migrations run before the pool is handed out. When they fail the server
/// still starts: the pool stays in place so handlers answer 503 until the
/// database is reachable.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the connection pool cannot be built.
pub(super) async fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let ports = match config.storage() {
        StorageBackend::Postgres {
            database_url,
            pool_max_size,
        } => {
            match run_migrations(database_url).await {
                Ok(applied) => info!(count = applied.len(), "database schema up to date"),
                Err(error) => warn!(%error, "migrations skipped; database unreachable"),
            }
            let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(*pool_max_size))
                .await
                .map_err(|err| std::io::Error::other(err.to_string()))?;
            info!(max_size = pool_max_size, "using postgres record store");
            postgres_ports(&pool, clock)
        }
        StorageBackend::Memory => {
            info!("using in-memory record store; data is lost on exit");
            HttpStatePorts::backed_by(Arc::new(MemoryStore::new(clock.clone())), clock)
        }
        StorageBackend::Unconfigured => {
            warn!("no database url configured; record endpoints will answer 503");
            HttpStatePorts::backed_by(Arc::new(UnconfiguredStore), clock)
        }
    };
    Ok(HttpState::new(ports).with_database_url_set(config.database_url_set))
}
