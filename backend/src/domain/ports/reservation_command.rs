//! Driving port for amenity reservations.

use async_trait::async_trait;

use crate::domain::{Error, Reservation, Stored};

use super::ReservationFilter;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationCommand: Send + Sync {
    /// Book an asset, failing with a conflict when the window overlaps an
    /// existing reservation of the same asset.
    async fn reserve(&self, reservation: Reservation) -> Result<Stored<Reservation>, Error>;

    async fn list(&self, filter: ReservationFilter) -> Result<Vec<Stored<Reservation>>, Error>;
}
