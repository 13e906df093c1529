//! Domain primitives, entities and services.
//!
//! Purpose: define the community records (residents, maintenance tickets,
//! payments, notices, assets, reservations, complaints, documents), their
//! validation rules and the services that carry behaviour beyond a plain
//! store round-trip. Nothing here depends on HTTP or SQL.
//!
//! Public surface:
//! - Entities and their drafts, e.g. [`Reservation`] / [`ReservationDraft`].
//! - [`EntityValidationError`] raised by every entity constructor.
//! - [`Stored`], [`RecordId`] and [`Collection`] for persisted records.
//! - [`Error`] / [`ErrorCode`], the transport-agnostic failure payload.
//! - Services: [`ResidentLoginService`], [`MaintenanceService`],
//!   [`ReservationService`].

pub mod asset;
pub(crate) mod choices;
pub mod complaint;
pub mod document;
pub mod email;
pub mod error;
pub mod login_service;
pub mod maintenance;
pub mod maintenance_service;
pub mod notice;
pub mod payment;
pub mod ports;
pub mod record;
pub mod reservation;
pub mod reservation_service;
pub mod resident;
pub mod trace_id;
pub mod validation;

pub use self::asset::{Asset, AssetDraft};
pub use self::choices::{Choice, ParseChoiceError};
pub use self::complaint::{Complaint, ComplaintDraft, ComplaintStatus};
pub use self::document::{Document, DocumentDraft};
pub use self::email::EmailAddress;
pub use self::error::{
    DomainError, DomainErrorValidationError, Error, ErrorCode, ErrorValidationError,
};
pub use self::login_service::ResidentLoginService;
pub use self::maintenance::{
    GENERAL_CATEGORY, MaintenanceDraft, MaintenancePriority, MaintenanceRequest,
    MaintenanceStatus, infer_maintenance_category,
};
pub use self::maintenance_service::MaintenanceService;
pub use self::notice::{DEFAULT_NOTICE_LANGUAGE, Notice, NoticeDraft};
pub use self::payment::{Payment, PaymentDraft, PaymentStatus};
pub use self::record::{Collection, RecordId, Stored};
pub use self::reservation::{Reservation, ReservationDraft, ReservationStatus, ReservationWindow};
pub use self::reservation_service::ReservationService;
pub use self::resident::{Resident, ResidentDraft, ResidentRole};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::EntityValidationError;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use society_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::conflict("already booked"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
