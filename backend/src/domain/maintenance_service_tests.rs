//! Tests for the maintenance service.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use mockable::MockClock;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::MaintenanceDraft;
use crate::domain::ports::{MockMaintenanceRepository, RepositoryError};

fn fixed_clock() -> Arc<dyn Clock> {
    let mut clock = MockClock::new();
    clock.expect_utc().returning(|| {
        Utc.with_ymd_and_hms(2025, 11, 2, 9, 0, 0)
            .single()
            .expect("valid timestamp")
    });
    Arc::new(clock)
}

#[fixture]
fn ticket() -> MaintenanceRequest {
    MaintenanceRequest::new(MaintenanceDraft {
        title: Some("Leaking tap".to_owned()),
        description: Some("Kitchen".to_owned()),
        requested_by: Some("a@x.com".to_owned()),
        ..MaintenanceDraft::default()
    })
    .expect("valid ticket")
}

#[rstest]
#[tokio::test]
async fn create_returns_stored_ticket(ticket: MaintenanceRequest) {
    let mut repo = MockMaintenanceRepository::new();
    repo.expect_create()
        .times(1)
        .returning(|ticket| Ok(Stored::new(RecordId::random(), Utc::now(), ticket.clone())));

    let service = MaintenanceService::new(Arc::new(repo), fixed_clock());
    let stored = service.create(ticket.clone()).await.expect("created");

    assert_eq!(stored.value, ticket);
}

#[rstest]
#[tokio::test]
async fn update_status_stamps_clock_time() {
    let id = RecordId::random();
    let mut repo = MockMaintenanceRepository::new();
    repo.expect_update_status()
        .withf(move |candidate, status, at| {
            *candidate == id
                && *status == MaintenanceStatus::Resolved
                && at.to_rfc3339() == "2025-11-02T09:00:00+00:00"
        })
        .times(1)
        .return_once(|_, _, _| Ok(true));

    let service = MaintenanceService::new(Arc::new(repo), fixed_clock());
    service
        .update_status(&id.to_string(), MaintenanceStatus::Resolved)
        .await
        .expect("status updated");
}

#[rstest]
#[tokio::test]
async fn update_status_reports_missing_ticket() {
    let mut repo = MockMaintenanceRepository::new();
    repo.expect_update_status()
        .return_once(|_, _, _| Ok(false));

    let service = MaintenanceService::new(Arc::new(repo), fixed_clock());
    let err = service
        .update_status(&RecordId::random().to_string(), MaintenanceStatus::Closed)
        .await
        .expect_err("missing ticket");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[case("12345")]
#[case("")]
#[tokio::test]
async fn unparsable_id_is_not_found_without_touching_store(#[case] id: &str) {
    let mut repo = MockMaintenanceRepository::new();
    repo.expect_update_status().times(0);

    let service = MaintenanceService::new(Arc::new(repo), fixed_clock());
    let err = service
        .update_status(id, MaintenanceStatus::Open)
        .await
        .expect_err("bad id");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn list_propagates_store_failures() {
    let mut repo = MockMaintenanceRepository::new();
    repo.expect_list()
        .return_once(|_| Err(RepositoryError::query("relation missing")));

    let service = MaintenanceService::new(Arc::new(repo), fixed_clock());
    let err = service
        .list(MaintenanceFilter::default())
        .await
        .expect_err("query fails");

    assert_eq!(err.code(), ErrorCode::InternalError);
}
