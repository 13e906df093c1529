//! Complaint handlers.
//!
//! ```text
//! POST /complaints
//! GET  /complaints?status=open
//! ```
//!
//! An anonymous complaint never reaches the store with an email attached,
//! even when the request body carries one.

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::ComplaintFilter;
use crate::domain::{Complaint, ComplaintDraft, Stored};
use crate::inbound::http::ApiResult;
use crate::inbound::http::bodies::{CreatedBody, RecordStamp};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::filter_value;

/// New complaint.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ComplaintRequestBody {
    #[schema(example = "Loud music after 11pm")]
    pub message: Option<String>,
    pub anonymous: Option<bool>,
    /// Discarded when `anonymous` is true.
    pub user_email: Option<String>,
    #[schema(example = "open")]
    pub status: Option<String>,
    pub response: Option<String>,
}

impl From<ComplaintRequestBody> for ComplaintDraft {
    fn from(value: ComplaintRequestBody) -> Self {
        Self {
            message: value.message,
            anonymous: value.anonymous,
            user_email: value.user_email,
            status: value.status,
            response: value.response,
        }
    }
}

/// Stored complaint. `user_email` is omitted entirely when absent.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComplaintRecordBody {
    pub id: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub message: String,
    pub anonymous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    pub status: String,
    pub response: Option<String>,
}

impl From<Stored<Complaint>> for ComplaintRecordBody {
    fn from(value: Stored<Complaint>) -> Self {
        let RecordStamp {
            id,
            created_at,
            updated_at,
        } = RecordStamp::from(&value);
        let complaint = value.value;
        Self {
            id,
            created_at,
            updated_at,
            message: complaint.message().to_owned(),
            anonymous: complaint.anonymous(),
            user_email: complaint.user_email().map(str::to_owned),
            status: complaint.status().to_string(),
            response: complaint.response().map(str::to_owned),
        }
    }
}

/// Filters for `GET /complaints`.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ComplaintListQuery {
    /// Exact status match.
    pub status: Option<String>,
}

/// Lodge a complaint.
#[utoipa::path(
    post,
    path = "/complaints",
    request_body = ComplaintRequestBody,
    responses(
        (status = 200, description = "Complaint lodged", body = CreatedBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["complaints"],
    operation_id = "createComplaint"
)]
#[post("/complaints")]
pub async fn create_complaint(
    state: web::Data<HttpState>,
    payload: web::Json<ComplaintRequestBody>,
) -> ApiResult<web::Json<CreatedBody>> {
    let complaint = Complaint::new(payload.into_inner().into())?;
    let stored = state.complaints.create(&complaint).await?;
    Ok(web::Json(CreatedBody::from(&stored)))
}

/// List complaints.
#[utoipa::path(
    get,
    path = "/complaints",
    params(ComplaintListQuery),
    responses(
        (status = 200, description = "Matching complaints", body = [ComplaintRecordBody]),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["complaints"],
    operation_id = "listComplaints"
)]
#[get("/complaints")]
pub async fn list_complaints(
    state: web::Data<HttpState>,
    query: web::Query<ComplaintListQuery>,
) -> ApiResult<web::Json<Vec<ComplaintRecordBody>>> {
    let filter = ComplaintFilter {
        status: filter_value(query.into_inner().status),
    };
    let complaints = state.complaints.list(&filter).await?;
    Ok(web::Json(complaints.into_iter().map(Into::into).collect()))
}
