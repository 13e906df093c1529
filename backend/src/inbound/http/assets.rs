//! Shared asset handlers.
//!
//! ```text
//! POST /assets
//! GET  /assets
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Asset, AssetDraft, Stored};
use crate::inbound::http::ApiResult;
use crate::inbound::http::bodies::{CreatedBody, RecordStamp};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// New asset.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AssetRequestBody {
    #[schema(example = "Clubhouse")]
    pub name: Option<String>,
    pub description: Option<String>,
    pub rules: Option<String>,
}

impl From<AssetRequestBody> for AssetDraft {
    fn from(value: AssetRequestBody) -> Self {
        Self {
            name: value.name,
            description: value.description,
            rules: value.rules,
        }
    }
}

/// Stored asset.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssetRecordBody {
    pub id: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub rules: Option<String>,
}

impl From<Stored<Asset>> for AssetRecordBody {
    fn from(value: Stored<Asset>) -> Self {
        let RecordStamp {
            id,
            created_at,
            updated_at,
        } = RecordStamp::from(&value);
        let asset = value.value;
        Self {
            id,
            created_at,
            updated_at,
            name: asset.name().to_owned(),
            description: asset.description().map(str::to_owned),
            rules: asset.rules().map(str::to_owned),
        }
    }
}

/// Register an asset.
#[utoipa::path(
    post,
    path = "/assets",
    request_body = AssetRequestBody,
    responses(
        (status = 200, description = "Asset registered", body = CreatedBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["assets"],
    operation_id = "createAsset"
)]
#[post("/assets")]
pub async fn create_asset(
    state: web::Data<HttpState>,
    payload: web::Json<AssetRequestBody>,
) -> ApiResult<web::Json<CreatedBody>> {
    let asset = Asset::new(payload.into_inner().into())?;
    let stored = state.assets.create(&asset).await?;
    Ok(web::Json(CreatedBody::from(&stored)))
}

/// List every asset.
#[utoipa::path(
    get,
    path = "/assets",
    responses(
        (status = 200, description = "All assets", body = [AssetRecordBody]),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["assets"],
    operation_id = "listAssets"
)]
#[get("/assets")]
pub async fn list_assets(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<AssetRecordBody>>> {
    let assets = state.assets.list().await?;
    Ok(web::Json(assets.into_iter().map(Into::into).collect()))
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
    async fn asset_round_trip() {
        let app = test::init_service(community_app(memory_state())).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/assets")
                .set_json(json!({ "name": "Gym", "rules": "No outdoor shoes" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);

        let listed: Vec<Value> =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/assets").to_request())
                .await;
        let [record] = listed.as_slice() else {
            panic!("expected one asset, got {listed:?}");
        };
        assert_eq!(record["name"], "Gym");
        assert_eq!(record["rules"], "No outdoor shoes");
        assert!(record["description"].is_null());
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({ "name": "  " }))]
    #[actix_web::test]
    async fn nameless_asset_is_rejected(#[case] body: Value) {
        let app = test::init_service(community_app(memory_state())).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/assets")
                .set_json(body)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
