//! Service banner, storage connectivity probe and collection listing.
//!
//! ```text
//! GET /
//! GET /test
//! GET /schema
//! ```

use actix_web::{get, web};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::Collection;
use crate::inbound::http::state::HttpState;

/// Banner returned by `GET /`.
pub const SERVICE_BANNER: &str = "Apartment Society Management API running";

/// Collections reported by `GET /test` are capped at this many names.
const PROBE_COLLECTION_LIMIT: usize = 10;

#[derive(Debug, Serialize, ToSchema)]
pub struct BannerBody {
    #[schema(example = "Apartment Society Management API running")]
    pub message: &'static str,
}

/// Liveness banner.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is running", body = BannerBody)),
    tags = ["meta"],
    operation_id = "banner"
)]
#[get("/")]
pub async fn banner() -> web::Json<BannerBody> {
    web::Json(BannerBody {
        message: SERVICE_BANNER,
    })
}

/// Storage connectivity summary.
///
/// Always answers 200; failures are described in the body.
#[derive(Debug, Serialize, ToSchema)]
pub struct StorageReportBody {
    #[schema(example = "running")]
    pub backend: &'static str,
    /// `connected`, `not configured`, or `error: ...`.
    #[schema(example = "connected")]
    pub database: String,
    /// Adapter kind when the probe succeeded, e.g. `postgres` or `memory`.
    pub storage: Option<&'static str>,
    /// `set` or `not set`.
    pub database_url: &'static str,
    pub database_name: Option<String>,
    #[schema(example = "Connected")]
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

/// Probe the record store.
#[utoipa::path(
    get,
    path = "/test",
    responses((status = 200, description = "Storage status summary", body = StorageReportBody)),
    tags = ["meta"],
    operation_id = "probeStorage"
)]
#[get("/test")]
pub async fn probe_storage(state: web::Data<HttpState>) -> web::Json<StorageReportBody> {
    let database_url = if state.database_url_set {
        "set"
    } else {
        "not set"
    };
    let report = match state.storage.probe().await {
        Ok(status) => StorageReportBody {
            backend: "running",
            database: "connected".to_owned(),
            storage: Some(status.backend),
            database_url,
            database_name: status.database_name,
            connection_status: "Connected",
            collections: status
                .collections
                .into_iter()
                .take(PROBE_COLLECTION_LIMIT)
                .collect(),
        },
        Err(err) => {
            let database = if err.is_unavailable() && !state.database_url_set {
                "not configured".to_owned()
            } else {
                warn!(error = %err, "storage probe failed");
                format!("error: {err}")
            };
            StorageReportBody {
                backend: "running",
                database,
                storage: None,
                database_url,
                database_name: None,
                connection_status: "Not Connected",
                collections: Vec::new(),
            }
        }
    };
    web::Json(report)
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SchemaBody {
    #[schema(example = json!(["resident", "maintenancerequest"]))]
    pub collections: Vec<&'static str>,
}

/// Known collection names.
#[utoipa::path(
    get,
    path = "/schema",
    responses((status = 200, description = "Collection names", body = SchemaBody)),
    tags = ["meta"],
    operation_id = "listCollections"
)]
#[get("/schema")]
pub async fn list_collections() -> web::Json<SchemaBody> {
    web::Json(SchemaBody {
        collections: Collection::ALL.iter().map(Collection::as_str).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockStorageProbe, RepositoryError, StorageStatus};
    use crate::inbound::http::test_utils::{memory_state, state_with_probe};
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn get_json(state: HttpState, uri: &str) -> Value {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(banner)
                .service(probe_storage)
                .service(list_collections),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert!(res.status().is_success());
        test::read_body_json(res).await
    }

    #[rstest]
    #[actix_web::test]
    async fn banner_is_static() {
        let body = get_json(memory_state(), "/").await;
        assert_eq!(body, json!({ "message": SERVICE_BANNER }));
    }

    #[rstest]
    #[actix_web::test]
    async fn schema_lists_every_collection_in_order() {
        let body = get_json(memory_state(), "/schema").await;
        assert_eq!(
            body["collections"],
            json!([
                "resident",
                "maintenancerequest",
                "payment",
                "notice",
                "asset",
                "reservation",
                "complaint",
                "document"
            ])
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn probe_caps_collection_names() {
        let mut probe = MockStorageProbe::new();
        probe.expect_probe().returning(|| {
            Ok(StorageStatus {
                backend: "postgres",
                database_name: Some("society".to_owned()),
                collections: (0..12).map(|i| format!("table_{i:02}")).collect(),
            })
        });
        let body = get_json(state_with_probe(probe).with_database_url_set(true), "/test").await;
        assert_eq!(body["database"], "connected");
        assert_eq!(body["storage"], "postgres");
        assert_eq!(body["database_url"], "set");
        assert_eq!(body["database_name"], "society");
        assert_eq!(body["connection_status"], "Connected");
        assert_eq!(body["collections"].as_array().map(Vec::len), Some(10));
    }

    #[rstest]
    #[actix_web::test]
    async fn probe_reports_missing_configuration_without_failing() {
        let mut probe = MockStorageProbe::new();
        probe
            .expect_probe()
            .returning(|| Err(RepositoryError::unavailable("database not configured")));
        let body = get_json(state_with_probe(probe), "/test").await;
        assert_eq!(body["backend"], "running");
        assert_eq!(body["database"], "not configured");
        assert_eq!(body["database_url"], "not set");
        assert_eq!(body["connection_status"], "Not Connected");
        assert_eq!(body["collections"], json!([]));
    }

    #[rstest]
    #[actix_web::test]
    async fn probe_reports_connection_errors() {
        let mut probe = MockStorageProbe::new();
        probe
            .expect_probe()
            .returning(|| Err(RepositoryError::connection("refused")));
        let body = get_json(state_with_probe(probe).with_database_url_set(true), "/test").await;
        let database = body["database"].as_str().expect("database string");
        assert!(database.starts_with("error: "), "{database}");
        assert!(body["database_name"].is_null());
    }
}
