//! Login upsert handler.
//!
//! ```text
//! POST /auth/login {"email":"a@x.com","name":"Asha","apartment":"B-204"}
//! ```
//!
//! No credential is checked: the email alone identifies the resident.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::EmailAddress;
use crate::domain::ports::LoginRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Login request body.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct LoginRequestBody {
    #[schema(example = "asha@example.com")]
    pub email: Option<String>,
    pub name: Option<String>,
    pub apartment: Option<String>,
}

/// Login response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponseBody {
    pub ok: bool,
    pub email: String,
}

/// Sign in by email, registering the resident on first use.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequestBody,
    responses(
        (status = 200, description = "Signed in", body = LoginResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequestBody>,
) -> ApiResult<web::Json<LoginResponseBody>> {
    let LoginRequestBody {
        email,
        name,
        apartment,
    } = payload.into_inner();
    let email = EmailAddress::required(email, "email")?;
    let outcome = state
        .login
        .login(LoginRequest {
            email,
            name,
            apartment,
        })
        .await?;
    Ok(web::Json(LoginResponseBody {
        ok: true,
        email: outcome.email.into(),
    }))
}
