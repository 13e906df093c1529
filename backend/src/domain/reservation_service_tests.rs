//! Tests for the reservation service.

use std::sync::Arc;

use chrono::Utc;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockReservationRepository, RepositoryError};
use crate::domain::{ErrorCode, RecordId, ReservationDraft};

fn reservation(start: &str, end: &str) -> Reservation {
    Reservation::new(ReservationDraft {
        asset_name: Some("gym".to_owned()),
        start_time: Some(start.to_owned()),
        end_time: Some(end.to_owned()),
        requested_by: Some("a@x.com".to_owned()),
        ..ReservationDraft::default()
    })
    .expect("valid reservation")
}

#[fixture]
fn existing() -> Stored<Reservation> {
    Stored::new(
        RecordId::random(),
        Utc::now(),
        reservation("2025-11-02T10:00:00Z", "2025-11-02T11:00:00Z"),
    )
}

#[rstest]
#[tokio::test]
async fn overlapping_request_is_a_conflict(existing: Stored<Reservation>) {
    let existing_id = existing.id.to_string();
    let mut repo = MockReservationRepository::new();
    repo.expect_find_overlapping()
        .withf(|asset, _| asset == "gym")
        .times(1)
        .return_once(move |_, _| Ok(Some(existing)));
    repo.expect_create().times(0);

    let service = ReservationService::new(Arc::new(repo));
    let err = service
        .reserve(reservation("2025-11-02T10:30:00Z", "2025-11-02T11:30:00Z"))
        .await
        .expect_err("overlap");

    assert_eq!(err.code(), ErrorCode::Conflict);
    let details = err.details().expect("conflict details");
    assert_eq!(details["conflicting_id"], existing_id.as_str());
}

#[rstest]
#[tokio::test]
async fn free_window_is_booked() {
    let mut repo = MockReservationRepository::new();
    repo.expect_find_overlapping()
        .times(1)
        .return_once(|_, _| Ok(None));
    repo.expect_create()
        .times(1)
        .returning(|reservation| Ok(Stored::new(RecordId::random(), Utc::now(), reservation.clone())));

    let service = ReservationService::new(Arc::new(repo));
    let stored = service
        .reserve(reservation("2025-11-02T11:00:00Z", "2025-11-02T12:00:00Z"))
        .await
        .expect("booked");

    assert_eq!(stored.value.asset_name(), "gym");
}

#[rstest]
#[tokio::test]
async fn lookup_failure_skips_insert() {
    let mut repo = MockReservationRepository::new();
    repo.expect_find_overlapping()
        .return_once(|_, _| Err(RepositoryError::connection("refused")));
    repo.expect_create().times(0);

    let service = ReservationService::new(Arc::new(repo));
    let err = service
        .reserve(reservation("2025-11-02T09:00:00Z", "2025-11-02T10:00:00Z"))
        .await
        .expect_err("store offline");

    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
}
