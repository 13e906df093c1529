//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! One table per collection, named exactly as the collection. Repository
//! implementations only translate between Diesel rows and domain types; rows
//! read back are re-validated through the entity constructors so a bad row
//! surfaces as a query error rather than an invalid entity.
//!
//! # Example
//!
//! ```ignore
//! use society_backend::outbound::persistence::{DbPool, DieselNoticeRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/society")).await?;
//! let notices = DieselNoticeRepository::new(pool);
//! ```

mod diesel_asset_repository;
mod diesel_complaint_repository;
mod diesel_document_repository;
mod diesel_error_mapping;
mod diesel_maintenance_repository;
mod diesel_notice_repository;
mod diesel_payment_repository;
mod diesel_reservation_repository;
mod diesel_resident_repository;
mod diesel_storage_probe;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_asset_repository::DieselAssetRepository;
pub use diesel_complaint_repository::DieselComplaintRepository;
pub use diesel_document_repository::DieselDocumentRepository;
pub use diesel_maintenance_repository::DieselMaintenanceRepository;
pub use diesel_notice_repository::DieselNoticeRepository;
pub use diesel_payment_repository::DieselPaymentRepository;
pub use diesel_reservation_repository::DieselReservationRepository;
pub use diesel_resident_repository::DieselResidentRepository;
pub use diesel_storage_probe::DieselStorageProbe;
pub use migrations::run_migrations;
pub use pool::{DbPool, PoolConfig, PoolError};
