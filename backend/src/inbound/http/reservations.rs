//! Reservation handlers.
//!
//! ```text
//! POST /reservations
//! GET  /reservations?asset=Clubhouse&email=a@x.com
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::ReservationFilter;
use crate::domain::{Reservation, ReservationDraft, Stored};
use crate::inbound::http::ApiResult;
use crate::inbound::http::bodies::{CreatedBody, RecordStamp};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{filter_value, render_timestamp};

/// New reservation.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ReservationRequestBody {
    #[schema(example = "Clubhouse")]
    pub asset_name: Option<String>,
    /// RFC 3339, or ISO 8601 without offset read as UTC.
    #[schema(example = "2025-11-02T10:00:00Z")]
    pub start_time: Option<String>,
    #[schema(example = "2025-11-02T11:00:00Z")]
    pub end_time: Option<String>,
    #[schema(example = "asha@example.com")]
    pub requested_by: Option<String>,
    #[schema(example = "pending")]
    pub status: Option<String>,
    pub purpose: Option<String>,
}

impl From<ReservationRequestBody> for ReservationDraft {
    fn from(value: ReservationRequestBody) -> Self {
        Self {
            asset_name: value.asset_name,
            start_time: value.start_time,
            end_time: value.end_time,
            requested_by: value.requested_by,
            status: value.status,
            purpose: value.purpose,
        }
    }
}

/// Stored reservation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservationRecordBody {
    pub id: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub asset_name: String,
    pub start_time: String,
    pub end_time: String,
    pub requested_by: String,
    pub status: String,
    pub purpose: Option<String>,
}

impl From<Stored<Reservation>> for ReservationRecordBody {
    fn from(value: Stored<Reservation>) -> Self {
        let RecordStamp {
            id,
            created_at,
            updated_at,
        } = RecordStamp::from(&value);
        let reservation = value.value;
        Self {
            id,
            created_at,
            updated_at,
            asset_name: reservation.asset_name().to_owned(),
            start_time: render_timestamp(reservation.start_time()),
            end_time: render_timestamp(reservation.end_time()),
            requested_by: reservation.requested_by().to_owned(),
            status: reservation.status().to_string(),
            purpose: reservation.purpose().map(str::to_owned),
        }
    }
}

/// Filters for `GET /reservations`.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ReservationListQuery {
    /// Exact `asset_name` match.
    pub asset: Option<String>,
    /// Exact `requested_by` match.
    pub email: Option<String>,
}

/// Book an asset, refusing overlapping windows.
#[utoipa::path(
    post,
    path = "/reservations",
    request_body = ReservationRequestBody,
    responses(
        (status = 200, description = "Reservation created", body = CreatedBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Window overlaps an existing reservation", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["reservations"],
    operation_id = "createReservation"
)]
#[post("/reservations")]
pub async fn create_reservation(
    state: web::Data<HttpState>,
    payload: web::Json<ReservationRequestBody>,
) -> ApiResult<web::Json<CreatedBody>> {
    let reservation = Reservation::new(payload.into_inner().into())?;
    let stored = state.reservations.reserve(reservation).await?;
    Ok(web::Json(CreatedBody::from(&stored)))
}

/// List reservations.
#[utoipa::path(
    get,
    path = "/reservations",
    params(ReservationListQuery),
    responses(
        (status = 200, description = "Matching reservations", body = [ReservationRecordBody]),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["reservations"],
    operation_id = "listReservations"
)]
#[get("/reservations")]
pub async fn list_reservations(
    state: web::Data<HttpState>,
    query: web::Query<ReservationListQuery>,
) -> ApiResult<web::Json<Vec<ReservationRecordBody>>> {
    let ReservationListQuery { asset, email } = query.into_inner();
    let filter = ReservationFilter {
        asset_name: filter_value(asset),
        requested_by: filter_value(email),
    };
    let reservations = state.reservations.list(filter).await?;
    Ok(web::Json(reservations.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{community_app, memory_state};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn booking(asset: &str, start: &str, end: &str) -> Value {
        json!({
            "asset_name": asset,
            "start_time": format!("2025-11-02T{start}:00Z"),
            "end_time": format!("2025-11-02T{end}:00Z"),
            "requested_by": "a@x.com",
        })
    }

    #[rstest]
    #[case("10:30", "11:30", StatusCode::CONFLICT)]
    #[case("11:00", "12:00", StatusCode::OK)]
    #[case("09:00", "10:00", StatusCode::OK)]
    #[case("09:00", "12:00", StatusCode::CONFLICT)]
    #[actix_web::test]
    async fn overlap_against_ten_to_eleven(
        #[case] start: &str,
        #[case] end: &str,
        #[case] expected: StatusCode,
    ) {
        let app = test::init_service(community_app(memory_state())).await;
        let first = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/reservations")
                .set_json(booking("gym", "10:00", "11:00"))
                .to_request(),
        )
        .await;
        assert_eq!(first.status(), StatusCode::OK);

        let second = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/reservations")
                .set_json(booking("gym", start, end))
                .to_request(),
        )
        .await;
        assert_eq!(second.status(), expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn conflict_body_names_the_existing_booking() {
        let app = test::init_service(community_app(memory_state())).await;
        let created: CreatedBody = test::call_and_read_body_json(
            &app,
            test::TestRequest::post()
                .uri("/reservations")
                .set_json(booking("gym", "10:00", "11:00"))
                .to_request(),
        )
        .await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/reservations")
                .set_json(booking("gym", "10:30", "11:30"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["code"], "conflict");
        assert_eq!(body["details"]["conflicting_id"], created.id.as_str());
    }

    #[rstest]
    #[actix_web::test]
    async fn other_assets_do_not_conflict_and_filters_apply() {
        let app = test::init_service(community_app(memory_state())).await;
        for asset in ["gym", "pool"] {
            let res = test::call_service(
                &app,
                test::TestRequest::post()
                    .uri("/reservations")
                    .set_json(booking(asset, "10:00", "11:00"))
                    .to_request(),
            )
            .await;
            assert_eq!(res.status(), StatusCode::OK);
        }

        let pool: Vec<Value> = test::call_and_read_body_json(
            &app,
            test::TestRequest::get()
                .uri("/reservations?asset=pool&email=a@x.com")
                .to_request(),
        )
        .await;
        let [record] = pool.as_slice() else {
            panic!("expected one reservation, got {pool:?}");
        };
        assert_eq!(record["asset_name"], "pool");
        assert_eq!(record["start_time"], "2025-11-02T10:00:00.000Z");
        assert_eq!(record["status"], "pending");
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_time_is_rejected() {
        let app = test::init_service(community_app(memory_state())).await;
        let mut body = booking("gym", "10:00", "11:00");
        body["end_time"] = json!("tomorrow");
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/reservations")
                .set_json(body)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["details"]["field"], "end_time");
        assert_eq!(body["details"]["code"], "invalid_timestamp");
    }
}
