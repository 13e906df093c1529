//! Filter matching shared by the in-memory adapter.

use rstest::rstest;

use super::*;
use crate::domain::{
    Complaint, ComplaintDraft, Document, DocumentDraft, MaintenanceDraft, MaintenanceRequest,
    Notice, NoticeDraft, Payment, PaymentDraft, Reservation, ReservationDraft,
};

fn ticket(status: &str, requested_by: &str) -> MaintenanceRequest {
    MaintenanceRequest::new(MaintenanceDraft {
        title: Some("Broken switch".to_owned()),
        description: Some("Hallway".to_owned()),
        requested_by: Some(requested_by.to_owned()),
        status: Some(status.to_owned()),
        ..MaintenanceDraft::default()
    })
    .expect("valid ticket")
}

#[rstest]
#[case(MaintenanceFilter::default(), true)]
#[case(MaintenanceFilter { status: Some("open".into()), requested_by: None }, true)]
#[case(MaintenanceFilter { status: Some("closed".into()), requested_by: None }, false)]
#[case(MaintenanceFilter { status: Some("open".into()), requested_by: Some("a@x.com".into()) }, true)]
#[case(MaintenanceFilter { status: None, requested_by: Some("b@x.com".into()) }, false)]
#[case(MaintenanceFilter { status: Some("OPEN".into()), requested_by: None }, false)]
fn maintenance_filter_is_equality(#[case] filter: MaintenanceFilter, #[case] expected: bool) {
    assert_eq!(filter.matches(&ticket("open", "a@x.com")), expected);
}

#[rstest]
fn payment_filter_combines_fields() {
    let payment = Payment::new(PaymentDraft {
        user_email: Some("a@x.com".to_owned()),
        amount: Some(1200.0),
        purpose: Some("dues".to_owned()),
        month: Some("2025-11".to_owned()),
        status: Some("success".to_owned()),
        ..PaymentDraft::default()
    })
    .expect("valid payment");

    let matching = PaymentFilter {
        user_email: Some("a@x.com".to_owned()),
        month: Some("2025-11".to_owned()),
        status: Some("success".to_owned()),
    };
    assert!(matching.matches(&payment));

    let wrong_month = PaymentFilter {
        month: Some("2025-10".to_owned()),
        ..matching
    };
    assert!(!wrong_month.matches(&payment));
}

#[rstest]
#[case(None, true)]
#[case(Some("water"), true)]
#[case(Some("events"), false)]
fn notice_filter_checks_membership(#[case] tag: Option<&str>, #[case] expected: bool) {
    let notice = Notice::new(NoticeDraft {
        title: Some("Water cut".to_owned()),
        body: Some("Sunday".to_owned()),
        posted_by: Some("office".to_owned()),
        tags: Some(vec!["water".to_owned(), "urgent".to_owned()]),
        ..NoticeDraft::default()
    })
    .expect("valid notice");
    let filter = NoticeFilter {
        tag: tag.map(str::to_owned),
    };
    assert_eq!(filter.matches(&notice), expected);
}

#[rstest]
fn reservation_filter_matches_asset_and_requester() {
    let reservation = Reservation::new(ReservationDraft {
        asset_name: Some("gym".to_owned()),
        start_time: Some("2025-11-02T10:00:00Z".to_owned()),
        end_time: Some("2025-11-02T11:00:00Z".to_owned()),
        requested_by: Some("a@x.com".to_owned()),
        ..ReservationDraft::default()
    })
    .expect("valid reservation");
    let by_asset = ReservationFilter {
        asset_name: Some("gym".to_owned()),
        requested_by: None,
    };
    let by_other = ReservationFilter {
        asset_name: None,
        requested_by: Some("b@x.com".to_owned()),
    };
    assert!(by_asset.matches(&reservation));
    assert!(!by_other.matches(&reservation));
}

#[rstest]
fn complaint_and_document_filters() {
    let complaint = Complaint::new(ComplaintDraft {
        message: Some("Noise".to_owned()),
        ..ComplaintDraft::default()
    })
    .expect("valid complaint");
    let document = Document::new(DocumentDraft {
        title: Some("Minutes".to_owned()),
        url: Some("https://x.com/m.pdf".to_owned()),
        uploaded_by: Some("office".to_owned()),
        category: None,
    })
    .expect("valid document");

    assert!(ComplaintFilter { status: Some("open".to_owned()) }.matches(&complaint));
    assert!(!DocumentFilter { category: Some("minutes".to_owned()) }.matches(&document));
    assert!(DocumentFilter::default().matches(&document));
}
