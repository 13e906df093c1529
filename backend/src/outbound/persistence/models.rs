//! Internal Diesel row structs for the record tables.
//!
//! Rows never leave the persistence layer. Reading a row rebuilds the domain
//! entity through its validating constructor, so a row written by another
//! tool that breaks an entity rule surfaces as a query error.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::ports::RepositoryError;
use crate::domain::{
    Asset, AssetDraft, Collection, Complaint, ComplaintDraft, Document, DocumentDraft,
    EntityValidationError, MaintenanceDraft, MaintenanceRequest, Notice, NoticeDraft, Payment,
    PaymentDraft, RecordId, Reservation, ReservationDraft, Resident, ResidentDraft, Stored,
};

use super::schema::{
    asset, complaint, document, maintenancerequest, notice, payment, reservation, resident,
};

fn invalid_row(collection: Collection) -> impl FnOnce(EntityValidationError) -> RepositoryError {
    move |err| RepositoryError::query(format!("stored {collection} row is invalid: {err}"))
}

fn stored<T>(
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    value: T,
) -> Stored<T> {
    Stored {
        id: RecordId::from_uuid(id),
        created_at,
        updated_at,
        value,
    }
}

// ---------------------------------------------------------------------------
// Residents
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = resident)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ResidentRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub apartment: String,
    pub phone: Option<String>,
    pub role: String,
    pub share_contact: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ResidentRow {
    pub(crate) fn into_stored(self) -> Result<Stored<Resident>, RepositoryError> {
        let value = Resident::new(ResidentDraft {
            name: Some(self.name),
            email: Some(self.email),
            apartment: Some(self.apartment),
            phone: self.phone,
            role: Some(self.role),
            share_contact: Some(self.share_contact),
        })
        .map_err(invalid_row(Collection::Resident))?;
        Ok(stored(self.id, self.created_at, self.updated_at, value))
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = resident)]
pub(crate) struct NewResidentRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub apartment: &'a str,
    pub phone: Option<&'a str>,
    pub role: &'a str,
    pub share_contact: bool,
}

impl<'a> NewResidentRow<'a> {
    pub(crate) fn from_domain(id: Uuid, value: &'a Resident) -> Self {
        Self {
            id,
            name: value.name(),
            email: value.email().as_str(),
            apartment: value.apartment(),
            phone: value.phone(),
            role: value.role().as_str(),
            share_contact: value.share_contact(),
        }
    }
}

// ---------------------------------------------------------------------------
// Maintenance tickets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = maintenancerequest)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MaintenanceRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub requested_by: String,
    pub category: String,
    pub status: String,
    pub priority: String,
    pub assigned_to: Option<String>,
    pub apartment: Option<String>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl MaintenanceRow {
    pub(crate) fn into_stored(self) -> Result<Stored<MaintenanceRequest>, RepositoryError> {
        let value = MaintenanceRequest::new(MaintenanceDraft {
            title: Some(self.title),
            description: Some(self.description),
            requested_by: Some(self.requested_by),
            category: Some(self.category),
            status: Some(self.status),
            priority: Some(self.priority),
            assigned_to: self.assigned_to,
            apartment: self.apartment,
            images: Some(self.images),
        })
        .map_err(invalid_row(Collection::MaintenanceRequest))?;
        Ok(stored(self.id, self.created_at, self.updated_at, value))
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = maintenancerequest)]
pub(crate) struct NewMaintenanceRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub description: &'a str,
    pub requested_by: &'a str,
    pub category: &'a str,
    pub status: &'a str,
    pub priority: &'a str,
    pub assigned_to: Option<&'a str>,
    pub apartment: Option<&'a str>,
    pub images: &'a [String],
}

impl<'a> NewMaintenanceRow<'a> {
    pub(crate) fn from_domain(id: Uuid, value: &'a MaintenanceRequest) -> Self {
        Self {
            id,
            title: value.title(),
            description: value.description(),
            requested_by: value.requested_by(),
            category: value.category(),
            status: value.status().as_str(),
            priority: value.priority().as_str(),
            assigned_to: value.assigned_to(),
            apartment: value.apartment(),
            images: value.images(),
        }
    }
}

/// Status change applied by `update_status`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = maintenancerequest)]
pub(crate) struct MaintenanceStatusUpdate<'a> {
    pub status: &'a str,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Payments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = payment)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PaymentRow {
    pub id: Uuid,
    pub user_email: String,
    pub amount: f64,
    pub purpose: String,
    pub month: Option<String>,
    pub status: String,
    pub receipt_no: Option<String>,
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl PaymentRow {
    pub(crate) fn into_stored(self) -> Result<Stored<Payment>, RepositoryError> {
        let value = Payment::new(PaymentDraft {
            user_email: Some(self.user_email),
            amount: Some(self.amount),
            purpose: Some(self.purpose),
            month: self.month,
            status: Some(self.status),
            receipt_no: self.receipt_no,
            remarks: self.remarks,
        })
        .map_err(invalid_row(Collection::Payment))?;
        Ok(stored(self.id, self.created_at, self.updated_at, value))
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = payment)]
pub(crate) struct NewPaymentRow<'a> {
    pub id: Uuid,
    pub user_email: &'a str,
    pub amount: f64,
    pub purpose: &'a str,
    pub month: Option<&'a str>,
    pub status: &'a str,
    pub receipt_no: Option<&'a str>,
    pub remarks: Option<&'a str>,
}

impl<'a> NewPaymentRow<'a> {
    pub(crate) fn from_domain(id: Uuid, value: &'a Payment) -> Self {
        Self {
            id,
            user_email: value.user_email().as_str(),
            amount: value.amount(),
            purpose: value.purpose(),
            month: value.month(),
            status: value.status().as_str(),
            receipt_no: value.receipt_no(),
            remarks: value.remarks(),
        }
    }
}

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = notice)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct NoticeRow {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub posted_by: String,
    pub tags: Vec<String>,
    pub attachments: Vec<String>,
    pub pinned: bool,
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl NoticeRow {
    pub(crate) fn into_stored(self) -> Result<Stored<Notice>, RepositoryError> {
        let value = Notice::new(NoticeDraft {
            title: Some(self.title),
            body: Some(self.body),
            posted_by: Some(self.posted_by),
            tags: Some(self.tags),
            attachments: Some(self.attachments),
            pinned: Some(self.pinned),
            language: Some(self.language),
        })
        .map_err(invalid_row(Collection::Notice))?;
        Ok(stored(self.id, self.created_at, self.updated_at, value))
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = notice)]
pub(crate) struct NewNoticeRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub body: &'a str,
    pub posted_by: &'a str,
    pub tags: &'a [String],
    pub attachments: &'a [String],
    pub pinned: bool,
    pub language: &'a str,
}

impl<'a> NewNoticeRow<'a> {
    pub(crate) fn from_domain(id: Uuid, value: &'a Notice) -> Self {
        Self {
            id,
            title: value.title(),
            body: value.body(),
            posted_by: value.posted_by(),
            tags: value.tags(),
            attachments: value.attachments(),
            pinned: value.pinned(),
            language: value.language(),
        }
    }
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = asset)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AssetRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub rules: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl AssetRow {
    pub(crate) fn into_stored(self) -> Result<Stored<Asset>, RepositoryError> {
        let value = Asset::new(AssetDraft {
            name: Some(self.name),
            description: self.description,
            rules: self.rules,
        })
        .map_err(invalid_row(Collection::Asset))?;
        Ok(stored(self.id, self.created_at, self.updated_at, value))
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = asset)]
pub(crate) struct NewAssetRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub rules: Option<&'a str>,
}

impl<'a> NewAssetRow<'a> {
    pub(crate) fn from_domain(id: Uuid, value: &'a Asset) -> Self {
        Self {
            id,
            name: value.name(),
            description: value.description(),
            rules: value.rules(),
        }
    }
}

// ---------------------------------------------------------------------------
// Reservations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reservation)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ReservationRow {
    pub id: Uuid,
    pub asset_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub requested_by: String,
    pub status: String,
    pub purpose: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ReservationRow {
    pub(crate) fn into_stored(self) -> Result<Stored<Reservation>, RepositoryError> {
        let value = Reservation::new(ReservationDraft {
            asset_name: Some(self.asset_name),
            start_time: Some(self.start_time.to_rfc3339()),
            end_time: Some(self.end_time.to_rfc3339()),
            requested_by: Some(self.requested_by),
            status: Some(self.status),
            purpose: self.purpose,
        })
        .map_err(invalid_row(Collection::Reservation))?;
        Ok(stored(self.id, self.created_at, self.updated_at, value))
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reservation)]
pub(crate) struct NewReservationRow<'a> {
    pub id: Uuid,
    pub asset_name: &'a str,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub requested_by: &'a str,
    pub status: &'a str,
    pub purpose: Option<&'a str>,
}

impl<'a> NewReservationRow<'a> {
    pub(crate) fn from_domain(id: Uuid, value: &'a Reservation) -> Self {
        Self {
            id,
            asset_name: value.asset_name(),
            start_time: value.start_time(),
            end_time: value.end_time(),
            requested_by: value.requested_by(),
            status: value.status().as_str(),
            purpose: value.purpose(),
        }
    }
}

// ---------------------------------------------------------------------------
// Complaints
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = complaint)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ComplaintRow {
    pub id: Uuid,
    pub message: String,
    pub anonymous: bool,
    pub user_email: Option<String>,
    pub status: String,
    pub response: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ComplaintRow {
    pub(crate) fn into_stored(self) -> Result<Stored<Complaint>, RepositoryError> {
        let value = Complaint::new(ComplaintDraft {
            message: Some(self.message),
            anonymous: Some(self.anonymous),
            user_email: self.user_email,
            status: Some(self.status),
            response: self.response,
        })
        .map_err(invalid_row(Collection::Complaint))?;
        Ok(stored(self.id, self.created_at, self.updated_at, value))
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = complaint)]
pub(crate) struct NewComplaintRow<'a> {
    pub id: Uuid,
    pub message: &'a str,
    pub anonymous: bool,
    pub user_email: Option<&'a str>,
    pub status: &'a str,
    pub response: Option<&'a str>,
}

impl<'a> NewComplaintRow<'a> {
    pub(crate) fn from_domain(id: Uuid, value: &'a Complaint) -> Self {
        Self {
            id,
            message: value.message(),
            anonymous: value.anonymous(),
            user_email: value.user_email(),
            status: value.status().as_str(),
            response: value.response(),
        }
    }
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = document)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DocumentRow {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub uploaded_by: String,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl DocumentRow {
    pub(crate) fn into_stored(self) -> Result<Stored<Document>, RepositoryError> {
        let value = Document::new(DocumentDraft {
            title: Some(self.title),
            url: Some(self.url),
            uploaded_by: Some(self.uploaded_by),
            category: self.category,
        })
        .map_err(invalid_row(Collection::Document))?;
        Ok(stored(self.id, self.created_at, self.updated_at, value))
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = document)]
pub(crate) struct NewDocumentRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub url: &'a str,
    pub uploaded_by: &'a str,
    pub category: Option<&'a str>,
}

impl<'a> NewDocumentRow<'a> {
    pub(crate) fn from_domain(id: Uuid, value: &'a Document) -> Self {
        Self {
            id,
            title: value.title(),
            url: value.url(),
            uploaded_by: value.uploaded_by(),
            category: value.category(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Row conversion edge cases.

    use rstest::rstest;

    use super::*;

    fn complaint_row(anonymous: bool, email: Option<&str>) -> ComplaintRow {
        ComplaintRow {
            id: Uuid::new_v4(),
            message: "Noise".to_owned(),
            anonymous,
            user_email: email.map(str::to_owned),
            status: "open".to_owned(),
            response: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[rstest]
    fn reservation_row_round_trips_times() {
        let start = Utc::now();
        let end = start + chrono::Duration::hours(1);
        let row = ReservationRow {
            id: Uuid::new_v4(),
            asset_name: "gym".to_owned(),
            start_time: start,
            end_time: end,
            requested_by: "a@x.com".to_owned(),
            status: "approved".to_owned(),
            purpose: None,
            created_at: start,
            updated_at: None,
        };
        let stored = row.into_stored().expect("valid row");
        assert_eq!(stored.value.start_time(), start);
        assert_eq!(stored.value.end_time(), end);
        assert_eq!(stored.value.status().as_str(), "approved");
    }

    #[rstest]
    fn anonymous_row_never_exposes_email() {
        let stored = complaint_row(true, Some("a@x.com"))
            .into_stored()
            .expect("valid row");
        assert!(stored.value.user_email().is_none());
    }

    #[rstest]
    fn unknown_status_is_a_query_error() {
        let mut row = complaint_row(false, None);
        row.status = "archived".to_owned();
        let err = row.into_stored().expect_err("invalid status");
        assert!(matches!(err, RepositoryError::Query { .. }));
        assert!(err.to_string().contains("complaint"));
    }

    #[rstest]
    fn insert_row_borrows_domain_fields() {
        let stored = complaint_row(false, Some("a@x.com"))
            .into_stored()
            .expect("valid row");
        let id = Uuid::new_v4();
        let new_row = NewComplaintRow::from_domain(id, &stored.value);
        assert_eq!(new_row.id, id);
        assert_eq!(new_row.user_email, Some("a@x.com"));
        assert_eq!(new_row.status, "open");
    }
}
