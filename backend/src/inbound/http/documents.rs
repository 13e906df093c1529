//! Document handlers.
//!
//! ```text
//! POST /documents
//! GET  /documents?category=minutes
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::DocumentFilter;
use crate::domain::{Document, DocumentDraft, Stored};
use crate::inbound::http::ApiResult;
use crate::inbound::http::bodies::{CreatedBody, RecordStamp};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::filter_value;

/// New document link.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct DocumentRequestBody {
    #[schema(example = "AGM minutes 2025")]
    pub title: Option<String>,
    #[schema(example = "https://files.example.com/agm-2025.pdf")]
    pub url: Option<String>,
    #[schema(example = "minutes")]
    pub category: Option<String>,
    pub uploaded_by: Option<String>,
}

impl From<DocumentRequestBody> for DocumentDraft {
    fn from(value: DocumentRequestBody) -> Self {
        Self {
            title: value.title,
            url: value.url,
            uploaded_by: value.uploaded_by,
            category: value.category,
        }
    }
}

/// Stored document link.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DocumentRecordBody {
    pub id: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub title: String,
    pub url: String,
    pub category: Option<String>,
    pub uploaded_by: String,
}

impl From<Stored<Document>> for DocumentRecordBody {
    fn from(value: Stored<Document>) -> Self {
        let RecordStamp {
            id,
            created_at,
            updated_at,
        } = RecordStamp::from(&value);
        let document = value.value;
        Self {
            id,
            created_at,
            updated_at,
            title: document.title().to_owned(),
            url: document.url().to_owned(),
            category: document.category().map(str::to_owned),
            uploaded_by: document.uploaded_by().to_owned(),
        }
    }
}

/// Filters for `GET /documents`.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct DocumentListQuery {
    /// Exact category match.
    pub category: Option<String>,
}

/// Publish a document link.
#[utoipa::path(
    post,
    path = "/documents",
    request_body = DocumentRequestBody,
    responses(
        (status = 200, description = "Document published", body = CreatedBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["documents"],
    operation_id = "createDocument"
)]
#[post("/documents")]
pub async fn create_document(
    state: web::Data<HttpState>,
    payload: web::Json<DocumentRequestBody>,
) -> ApiResult<web::Json<CreatedBody>> {
    let document = Document::new(payload.into_inner().into())?;
    let stored = state.documents.create(&document).await?;
    Ok(web::Json(CreatedBody::from(&stored)))
}

/// List documents.
#[utoipa::path(
    get,
    path = "/documents",
    params(DocumentListQuery),
    responses(
        (status = 200, description = "Matching documents", body = [DocumentRecordBody]),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["documents"],
    operation_id = "listDocuments"
)]
#[get("/documents")]
pub async fn list_documents(
    state: web::Data<HttpState>,
    query: web::Query<DocumentListQuery>,
) -> ApiResult<web::Json<Vec<DocumentRecordBody>>> {
    let filter = DocumentFilter {
        category: filter_value(query.into_inner().category),
    };
    let documents = state.documents.list(&filter).await?;
    Ok(web::Json(documents.into_iter().map(Into::into).collect()))
}
