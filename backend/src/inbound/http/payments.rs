//! Payment handlers.
//!
//! ```text
//! POST /payments
//! GET  /payments?email=a@x.com&month=2025-11&status=success
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::PaymentFilter;
use crate::domain::{Payment, PaymentDraft, Stored};
use crate::inbound::http::ApiResult;
use crate::inbound::http::bodies::{CreatedBody, RecordStamp};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::filter_value;

/// New payment.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct PaymentRequestBody {
    #[schema(example = "asha@example.com")]
    pub user_email: Option<String>,
    #[schema(example = 2500.0)]
    pub amount: Option<f64>,
    #[schema(example = "maintenance dues")]
    pub purpose: Option<String>,
    #[schema(example = "2025-11")]
    pub month: Option<String>,
    #[schema(example = "pending")]
    pub status: Option<String>,
    pub receipt_no: Option<String>,
    pub remarks: Option<String>,
}

impl From<PaymentRequestBody> for PaymentDraft {
    fn from(value: PaymentRequestBody) -> Self {
        Self {
            user_email: value.user_email,
            amount: value.amount,
            purpose: value.purpose,
            month: value.month,
            status: value.status,
            receipt_no: value.receipt_no,
            remarks: value.remarks,
        }
    }
}

/// Stored payment.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentRecordBody {
    pub id: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub user_email: String,
    pub amount: f64,
    pub purpose: String,
    pub month: Option<String>,
    pub status: String,
    pub receipt_no: Option<String>,
    pub remarks: Option<String>,
}

impl From<Stored<Payment>> for PaymentRecordBody {
    fn from(value: Stored<Payment>) -> Self {
        let RecordStamp {
            id,
            created_at,
            updated_at,
        } = RecordStamp::from(&value);
        let payment = value.value;
        Self {
            id,
            created_at,
            updated_at,
            user_email: payment.user_email().to_string(),
            amount: payment.amount(),
            purpose: payment.purpose().to_owned(),
            month: payment.month().map(str::to_owned),
            status: payment.status().to_string(),
            receipt_no: payment.receipt_no().map(str::to_owned),
            remarks: payment.remarks().map(str::to_owned),
        }
    }
}

/// Filters for `GET /payments`.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PaymentListQuery {
    /// Exact `user_email` match.
    pub email: Option<String>,
    /// Exact billing month match, e.g. `2025-11`.
    pub month: Option<String>,
    /// Exact status match.
    pub status: Option<String>,
}

/// Record a payment.
#[utoipa::path(
    post,
    path = "/payments",
    request_body = PaymentRequestBody,
    responses(
        (status = 200, description = "Payment recorded", body = CreatedBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["payments"],
    operation_id = "createPayment"
)]
#[post("/payments")]
pub async fn create_payment(
    state: web::Data<HttpState>,
    payload: web::Json<PaymentRequestBody>,
) -> ApiResult<web::Json<CreatedBody>> {
    let payment = Payment::new(payload.into_inner().into())?;
    let stored = state.payments.create(&payment).await?;
    Ok(web::Json(CreatedBody::from(&stored)))
}

/// List payments.
#[utoipa::path(
    get,
    path = "/payments",
    params(PaymentListQuery),
    responses(
        (status = 200, description = "Matching payments", body = [PaymentRecordBody]),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["payments"],
    operation_id = "listPayments"
)]
#[get("/payments")]
pub async fn list_payments(
    state: web::Data<HttpState>,
    query: web::Query<PaymentListQuery>,
) -> ApiResult<web::Json<Vec<PaymentRecordBody>>> {
    let PaymentListQuery {
        email,
        month,
        status,
    } = query.into_inner();
    let filter = PaymentFilter {
        user_email: filter_value(email),
        month: filter_value(month),
        status: filter_value(status),
    };
    let payments = state.payments.list(&filter).await?;
    Ok(web::Json(payments.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{community_app, memory_state};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[actix_web::test]
    async fn payment_round_trips_every_field() {
        let app = test::init_service(community_app(memory_state())).await;
        let input = json!({
            "user_email": "a@x.com",
            "amount": -120.5,
            "purpose": "refund",
            "month": "2025-11",
            "status": "success",
            "receipt_no": "R-19",
            "remarks": "overpaid in October",
        });
        let created: CreatedBody = test::call_and_read_body_json(
            &app,
            test::TestRequest::post()
                .uri("/payments")
                .set_json(&input)
                .to_request(),
        )
        .await;

        let listed: Vec<Value> = test::call_and_read_body_json(
            &app,
            test::TestRequest::get()
                .uri("/payments?email=a@x.com&month=2025-11&status=success")
                .to_request(),
        )
        .await;
        let [record] = listed.as_slice() else {
            panic!("expected one payment, got {listed:?}");
        };
        assert_eq!(record["id"], created.id.as_str());
        for (field, value) in input.as_object().expect("object").iter() {
            assert_eq!(&record[field], value, "field {field}");
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn month_filter_excludes_other_months() {
        let app = test::init_service(community_app(memory_state())).await;
        test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/payments")
                .set_json(json!({
                    "user_email": "a@x.com",
                    "amount": 10.0,
                    "purpose": "dues",
                    "month": "2025-10",
                }))
                .to_request(),
        )
        .await;
        let listed: Vec<Value> = test::call_and_read_body_json(
            &app,
            test::TestRequest::get()
                .uri("/payments?month=2025-11")
                .to_request(),
        )
        .await;
        assert!(listed.is_empty());
    }

    #[rstest]
    #[case(json!({ "amount": 1.0, "purpose": "dues" }), "user_email")]
    #[case(json!({ "user_email": "a@x.com", "purpose": "dues" }), "amount")]
    #[case(json!({ "user_email": "a@x.com", "amount": 1.0, "purpose": "dues", "status": "paid" }), "status")]
    #[actix_web::test]
    async fn invalid_payment_names_the_field(#[case] body: Value, #[case] field: &str) {
        let app = test::init_service(community_app(memory_state())).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/payments")
                .set_json(body)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["details"]["field"], field);
    }

    #[rstest]
    #[actix_web::test]
    async fn wrong_json_type_is_a_bad_request() {
        let app = test::init_service(community_app(memory_state())).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/payments")
                .set_json(json!({ "user_email": "a@x.com", "amount": "lots", "purpose": "dues" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["code"], "invalid_body");
    }
}
