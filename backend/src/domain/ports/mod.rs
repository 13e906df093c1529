//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`StorageProbe`]) are implemented by outbound
//! adapters. Driving ports ([`LoginService`], [`MaintenanceCommand`],
//! [`ReservationCommand`]) are implemented by domain services and called by
//! inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod asset_repository;
mod complaint_repository;
mod document_repository;
mod login_service;
mod maintenance_command;
mod maintenance_repository;
mod notice_repository;
mod payment_repository;
mod repository_error;
mod reservation_command;
mod reservation_repository;
mod resident_repository;
mod storage_probe;

pub use asset_repository::AssetRepository;
#[cfg(test)]
pub use asset_repository::MockAssetRepository;
pub use complaint_repository::{ComplaintFilter, ComplaintRepository};
#[cfg(test)]
pub use complaint_repository::MockComplaintRepository;
pub use document_repository::{DocumentFilter, DocumentRepository};
#[cfg(test)]
pub use document_repository::MockDocumentRepository;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{LoginOutcome, LoginRequest, LoginService};
pub use maintenance_command::MaintenanceCommand;
#[cfg(test)]
pub use maintenance_command::MockMaintenanceCommand;
#[cfg(test)]
pub use maintenance_repository::MockMaintenanceRepository;
pub use maintenance_repository::{MaintenanceFilter, MaintenanceRepository};
#[cfg(test)]
pub use notice_repository::MockNoticeRepository;
pub use notice_repository::{NoticeFilter, NoticeRepository};
#[cfg(test)]
pub use payment_repository::MockPaymentRepository;
pub use payment_repository::{PaymentFilter, PaymentRepository};
pub use repository_error::RepositoryError;
#[cfg(test)]
pub use reservation_command::MockReservationCommand;
pub use reservation_command::ReservationCommand;
#[cfg(test)]
pub use reservation_repository::MockReservationRepository;
pub use reservation_repository::{ReservationFilter, ReservationRepository};
#[cfg(test)]
pub use resident_repository::MockResidentRepository;
pub use resident_repository::ResidentRepository;
#[cfg(test)]
pub use storage_probe::MockStorageProbe;
pub use storage_probe::{StorageProbe, StorageStatus};

#[cfg(test)]
mod tests;
