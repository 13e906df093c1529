//! Notice board handlers.
//!
//! ```text
//! POST /notices
//! GET  /notices?tag=water
//! ```
//!
//! Listing is newest first; records created in the same instant are ordered
//! by id so the response is stable.

use std::cmp::Reverse;

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::NoticeFilter;
use crate::domain::{Notice, NoticeDraft, Stored};
use crate::inbound::http::ApiResult;
use crate::inbound::http::bodies::{CreatedBody, RecordStamp};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::filter_value;

/// New notice.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct NoticeRequestBody {
    #[schema(example = "Water supply interruption")]
    pub title: Option<String>,
    pub body: Option<String>,
    #[schema(example = "committee@example.com")]
    pub posted_by: Option<String>,
    /// Treated as a set; duplicates are dropped.
    pub tags: Option<Vec<String>>,
    pub attachments: Option<Vec<String>>,
    pub pinned: Option<bool>,
    #[schema(example = "en")]
    pub language: Option<String>,
}

impl From<NoticeRequestBody> for NoticeDraft {
    fn from(value: NoticeRequestBody) -> Self {
        Self {
            title: value.title,
            body: value.body,
            posted_by: value.posted_by,
            tags: value.tags,
            attachments: value.attachments,
            pinned: value.pinned,
            language: value.language,
        }
    }
}

/// Stored notice.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NoticeRecordBody {
    pub id: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub title: String,
    pub body: String,
    pub posted_by: String,
    pub tags: Vec<String>,
    pub attachments: Vec<String>,
    pub pinned: bool,
    pub language: String,
}

impl From<Stored<Notice>> for NoticeRecordBody {
    fn from(value: Stored<Notice>) -> Self {
        let RecordStamp {
            id,
            created_at,
            updated_at,
        } = RecordStamp::from(&value);
        let notice = value.value;
        Self {
            id,
            created_at,
            updated_at,
            title: notice.title().to_owned(),
            body: notice.body().to_owned(),
            posted_by: notice.posted_by().to_owned(),
            tags: notice.tags().to_vec(),
            attachments: notice.attachments().to_vec(),
            pinned: notice.pinned(),
            language: notice.language().to_owned(),
        }
    }
}

/// Filters for `GET /notices`.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct NoticeListQuery {
    /// Only notices carrying this tag.
    pub tag: Option<String>,
}

/// Order notices newest first.
fn newest_first(notices: &mut [Stored<Notice>]) {
    notices.sort_by_key(|notice| (Reverse(notice.created_at), Reverse(*notice.id.as_uuid())));
}

/// Post a notice.
#[utoipa::path(
    post,
    path = "/notices",
    request_body = NoticeRequestBody,
    responses(
        (status = 200, description = "Notice posted", body = CreatedBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["notices"],
    operation_id = "createNotice"
)]
#[post("/notices")]
pub async fn create_notice(
    state: web::Data<HttpState>,
    payload: web::Json<NoticeRequestBody>,
) -> ApiResult<web::Json<CreatedBody>> {
    let notice = Notice::new(payload.into_inner().into())?;
    let stored = state.notices.create(&notice).await?;
    Ok(web::Json(CreatedBody::from(&stored)))
}

/// List notices, newest first.
#[utoipa::path(
    get,
    path = "/notices",
    params(NoticeListQuery),
    responses(
        (status = 200, description = "Matching notices", body = [NoticeRecordBody]),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["notices"],
    operation_id = "listNotices"
)]
#[get("/notices")]
pub async fn list_notices(
    state: web::Data<HttpState>,
    query: web::Query<NoticeListQuery>,
) -> ApiResult<web::Json<Vec<NoticeRecordBody>>> {
    let filter = NoticeFilter {
        tag: filter_value(query.into_inner().tag),
    };
    let mut notices = state.notices.list(&filter).await?;
    newest_first(&mut notices);
    Ok(web::Json(notices.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockNoticeRepository, NoticeRepository};
    use crate::domain::RecordId;
    use crate::inbound::http::test_utils::{community_app, memory_state};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use chrono::{DateTime, TimeZone, Utc};
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 2, 9, minute, 0)
            .single()
            .expect("valid timestamp")
    }

    fn stored_notice(title: &str, minute: u32) -> Stored<Notice> {
        let notice = Notice::new(NoticeDraft {
            title: Some(title.to_owned()),
            body: Some("Details".to_owned()),
            posted_by: Some("office@x.com".to_owned()),
            ..NoticeDraft::default()
        })
        .expect("valid notice");
        Stored::new(RecordId::random(), at(minute), notice)
    }

    #[rstest]
    #[::core::prelude::v1::test]
    fn newest_first_reverses_creation_order() {
        let mut notices = vec![
            stored_notice("t1", 1),
            stored_notice("t3", 3),
            stored_notice("t2", 2),
        ];
        newest_first(&mut notices);
        let titles: Vec<&str> = notices.iter().map(|n| n.value.title()).collect();
        assert_eq!(titles, ["t3", "t2", "t1"]);
    }

    #[rstest]
    #[actix_web::test]
    async fn list_is_sorted_even_when_the_store_is_not() {
        let mut repo = MockNoticeRepository::new();
        repo.expect_list().returning(|_| {
            Ok(vec![
                stored_notice("t1", 1),
                stored_notice("t2", 2),
                stored_notice("t3", 3),
            ])
        });
        let mut state = memory_state();
        state.notices = Arc::new(repo) as Arc<dyn NoticeRepository>;

        let app = test::init_service(community_app(state)).await;
        let listed: Vec<NoticeRecordBody> =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/notices").to_request())
                .await;
        let titles: Vec<&str> = listed.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["t3", "t2", "t1"]);
    }

    #[rstest]
    #[actix_web::test]
    async fn defaults_and_tag_filter() {
        let app = test::init_service(community_app(memory_state())).await;
        for (title, tags) in [("Water", json!(["water", "urgent", "water"])), ("Party", json!(["social"]))] {
            let res = test::call_service(
                &app,
                test::TestRequest::post()
                    .uri("/notices")
                    .set_json(json!({
                        "title": title,
                        "body": "See board",
                        "posted_by": "office@x.com",
                        "tags": tags,
                    }))
                    .to_request(),
            )
            .await;
            assert_eq!(res.status(), StatusCode::OK);
        }

        let listed: Vec<Value> = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/notices?tag=water").to_request(),
        )
        .await;
        let [record] = listed.as_slice() else {
            panic!("expected one notice, got {listed:?}");
        };
        assert_eq!(record["title"], "Water");
        assert_eq!(record["tags"], json!(["water", "urgent"]));
        assert_eq!(record["pinned"], false);
        assert_eq!(record["language"], "en");
    }

    #[rstest]
    #[actix_web::test]
    async fn missing_body_is_rejected() {
        let app = test::init_service(community_app(memory_state())).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/notices")
                .set_json(json!({ "title": "Water", "posted_by": "office@x.com" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["details"]["field"], "body");
    }
}
