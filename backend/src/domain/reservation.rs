//! Amenity reservations and their time windows.

use chrono::{DateTime, Utc};

use super::choices::define_choice;
use super::validation::{EntityValidationError, choice_or_default, required_text, required_timestamp};

define_choice! {
    /// Approval state of a reservation.
    ///
    /// `pending` may move to `approved`, `rejected` or `cancelled`; no
    /// operation performs those transitions yet.
    pub enum ReservationStatus {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
        Cancelled => "cancelled",
    }
    default = Pending;
}

/// Half-open booking interval `[start, end)`.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use society_backend::domain::ReservationWindow;
///
/// let at = |h| Utc.with_ymd_and_hms(2025, 11, 2, h, 0, 0).unwrap();
/// let morning = ReservationWindow::new(at(10), at(11));
/// assert!(morning.overlaps(&ReservationWindow::new(at(10), at(12))));
/// assert!(!morning.overlaps(&ReservationWindow::new(at(11), at(12))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl ReservationWindow {
    /// Build a window. `end` is not required to follow `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Half-open intersection test: touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// Untrusted input for [`Reservation::new`].
#[derive(Debug, Clone, Default)]
pub struct ReservationDraft {
    pub asset_name: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub requested_by: Option<String>,
    pub status: Option<String>,
    pub purpose: Option<String>,
}

/// A booking of a named asset for a time window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    asset_name: String,
    window: ReservationWindow,
    requested_by: String,
    status: ReservationStatus,
    purpose: Option<String>,
}

impl Reservation {
    pub fn new(draft: ReservationDraft) -> Result<Self, EntityValidationError> {
        let asset_name = required_text(draft.asset_name, "asset_name")?;
        let start = required_timestamp(draft.start_time, "start_time")?;
        let end = required_timestamp(draft.end_time, "end_time")?;
        Ok(Self {
            asset_name,
            window: ReservationWindow::new(start, end),
            requested_by: required_text(draft.requested_by, "requested_by")?,
            status: choice_or_default(draft.status, "status")?,
            purpose: draft.purpose,
        })
    }

    pub fn asset_name(&self) -> &str {
        &self.asset_name
    }

    pub fn window(&self) -> ReservationWindow {
        self.window
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.window.start
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.window.end
    }

    pub fn requested_by(&self) -> &str {
        &self.requested_by
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    pub fn purpose(&self) -> Option<&str> {
        self.purpose.as_deref()
    }

    /// Whether this booking collides with `window` on the same asset.
    pub fn conflicts_with(&self, asset_name: &str, window: &ReservationWindow) -> bool {
        self.asset_name == asset_name && self.window.overlaps(window)
    }
}
