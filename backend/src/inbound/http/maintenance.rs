//! Maintenance ticket handlers.
//!
//! ```text
//! POST  /maintenance
//! GET   /maintenance?status=open&email=a@x.com
//! PATCH /maintenance/{id}/status?status=resolved
//! ```

use actix_web::{get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::MaintenanceFilter;
use crate::domain::{MaintenanceDraft, MaintenanceRequest, MaintenanceStatus, Stored};
use crate::inbound::http::ApiResult;
use crate::inbound::http::bodies::{CreatedBody, OkBody, RecordStamp};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, filter_value, parse_choice};

/// New maintenance ticket.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct MaintenanceRequestBody {
    #[schema(example = "Kitchen tap leaking")]
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(example = "asha@example.com")]
    pub requested_by: Option<String>,
    /// Inferred from title and description when omitted.
    pub category: Option<String>,
    #[schema(example = "open")]
    pub status: Option<String>,
    #[schema(example = "medium")]
    pub priority: Option<String>,
    pub assigned_to: Option<String>,
    pub apartment: Option<String>,
    pub images: Option<Vec<String>>,
}

impl From<MaintenanceRequestBody> for MaintenanceDraft {
    fn from(value: MaintenanceRequestBody) -> Self {
        Self {
            title: value.title,
            description: value.description,
            requested_by: value.requested_by,
            category: value.category,
            status: value.status,
            priority: value.priority,
            assigned_to: value.assigned_to,
            apartment: value.apartment,
            images: value.images,
        }
    }
}

/// Stored maintenance ticket.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceRecordBody {
    pub id: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub title: String,
    pub description: String,
    pub requested_by: String,
    pub category: String,
    pub status: String,
    pub priority: String,
    pub assigned_to: Option<String>,
    pub apartment: Option<String>,
    pub images: Vec<String>,
}

impl From<Stored<MaintenanceRequest>> for MaintenanceRecordBody {
    fn from(value: Stored<MaintenanceRequest>) -> Self {
        let RecordStamp {
            id,
            created_at,
            updated_at,
        } = RecordStamp::from(&value);
        let ticket = value.value;
        Self {
            id,
            created_at,
            updated_at,
            title: ticket.title().to_owned(),
            description: ticket.description().to_owned(),
            requested_by: ticket.requested_by().to_owned(),
            category: ticket.category().to_owned(),
            status: ticket.status().to_string(),
            priority: ticket.priority().to_string(),
            assigned_to: ticket.assigned_to().map(str::to_owned),
            apartment: ticket.apartment().map(str::to_owned),
            images: ticket.images().to_vec(),
        }
    }
}

/// Filters for `GET /maintenance`.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct MaintenanceListQuery {
    /// Exact status match.
    pub status: Option<String>,
    /// Exact `requested_by` match.
    pub email: Option<String>,
}

/// New status for `PATCH /maintenance/{id}/status`.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct StatusQuery {
    /// One of `open`, `in_progress`, `resolved`, `closed`.
    pub status: Option<String>,
}

/// File a maintenance ticket.
#[utoipa::path(
    post,
    path = "/maintenance",
    request_body = MaintenanceRequestBody,
    responses(
        (status = 200, description = "Ticket filed", body = CreatedBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["maintenance"],
    operation_id = "createMaintenanceRequest"
)]
#[post("/maintenance")]
pub async fn create_ticket(
    state: web::Data<HttpState>,
    payload: web::Json<MaintenanceRequestBody>,
) -> ApiResult<web::Json<CreatedBody>> {
    let ticket = MaintenanceRequest::new(payload.into_inner().into())?;
    let stored = state.maintenance.create(ticket).await?;
    Ok(web::Json(CreatedBody::from(&stored)))
}

/// List maintenance tickets.
#[utoipa::path(
    get,
    path = "/maintenance",
    params(MaintenanceListQuery),
    responses(
        (status = 200, description = "Matching tickets", body = [MaintenanceRecordBody]),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["maintenance"],
    operation_id = "listMaintenanceRequests"
)]
#[get("/maintenance")]
pub async fn list_tickets(
    state: web::Data<HttpState>,
    query: web::Query<MaintenanceListQuery>,
) -> ApiResult<web::Json<Vec<MaintenanceRecordBody>>> {
    let MaintenanceListQuery { status, email } = query.into_inner();
    let filter = MaintenanceFilter {
        status: filter_value(status),
        requested_by: filter_value(email),
    };
    let tickets = state.maintenance.list(filter).await?;
    Ok(web::Json(tickets.into_iter().map(Into::into).collect()))
}

/// Change a ticket's status.
#[utoipa::path(
    patch,
    path = "/maintenance/{id}/status",
    params(
        ("id" = String, Path, description = "Ticket identifier"),
        StatusQuery
    ),
    responses(
        (status = 200, description = "Status updated", body = OkBody),
        (status = 400, description = "Unknown status", body = ErrorSchema),
        (status = 404, description = "No such ticket", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["maintenance"],
    operation_id = "updateMaintenanceStatus"
)]
#[patch("/maintenance/{id}/status")]
pub async fn update_ticket_status(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<StatusQuery>,
) -> ApiResult<web::Json<OkBody>> {
    let status: MaintenanceStatus =
        parse_choice(query.into_inner().status, FieldName::new("status"))?;
    state
        .maintenance
        .update_status(&path.into_inner(), status)
        .await?;
    Ok(web::Json(OkBody { ok: true }))
}
