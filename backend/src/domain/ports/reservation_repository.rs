//! Port for reservation persistence and overlap lookups.

use async_trait::async_trait;

use crate::domain::{Reservation, ReservationWindow, Stored};

use super::RepositoryError;

/// Equality filter over reservations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationFilter {
    pub asset_name: Option<String>,
    pub requested_by: Option<String>,
}

impl ReservationFilter {
    pub fn matches(&self, reservation: &Reservation) -> bool {
        self.asset_name
            .as_deref()
            .is_none_or(|asset| reservation.asset_name() == asset)
            && self
                .requested_by
                .as_deref()
                .is_none_or(|email| reservation.requested_by() == email)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn create(
        &self,
        reservation: &Reservation,
    ) -> Result<Stored<Reservation>, RepositoryError>;

    async fn list(
        &self,
        filter: &ReservationFilter,
    ) -> Result<Vec<Stored<Reservation>>, RepositoryError>;

    /// Any reservation of `asset_name` whose window overlaps `window`,
    /// whatever its status.
    async fn find_overlapping(
        &self,
        asset_name: &str,
        window: &ReservationWindow,
    ) -> Result<Option<Stored<Reservation>>, RepositoryError>;
}
