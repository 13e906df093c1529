//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every community endpoint and the health probes, plus
//! the error schema wrappers from [`crate::inbound::http::schemas`]. Swagger
//! UI serves it at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::{
    assets, auth, complaints, documents, health, maintenance, meta, notices, payments,
    reservations,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Society backend API",
        description = "Records for a residential community: residents, maintenance tickets, payments, notices, amenity reservations, complaints and documents."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        meta::banner,
        meta::probe_storage,
        meta::list_collections,
        auth::login,
        maintenance::create_ticket,
        maintenance::list_tickets,
        maintenance::update_ticket_status,
        payments::create_payment,
        payments::list_payments,
        notices::create_notice,
        notices::list_notices,
        assets::create_asset,
        assets::list_assets,
        reservations::create_reservation,
        reservations::list_reservations,
        complaints::create_complaint,
        complaints::list_complaints,
        documents::create_document,
        documents::list_documents,
        health::ready,
        health::live,
    ),
    components(schemas(ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "meta", description = "Banner, storage probe and collection list"),
        (name = "auth", description = "Email-keyed login upsert"),
        (name = "maintenance", description = "Maintenance tickets"),
        (name = "payments", description = "Dues and fee payments"),
        (name = "notices", description = "Community notice board"),
        (name = "assets", description = "Bookable amenities"),
        (name = "reservations", description = "Amenity bookings with overlap checks"),
        (name = "complaints", description = "Complaints, optionally anonymous"),
        (name = "documents", description = "Shared document links"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    fn error_schema_has_code_and_message() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
    }

    #[rstest]
    #[case("/maintenance")]
    #[case("/maintenance/{id}/status")]
    #[case("/reservations")]
    #[case("/auth/login")]
    #[case("/schema")]
    #[case("/health/ready")]
    fn documents_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }
}
