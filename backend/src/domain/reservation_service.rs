//! Conflict-checked reservation service implementing [`ReservationCommand`].
//!
//! The overlap check and the insert are two separate store calls. Two
//! concurrent requests for the same asset and overlapping windows can both
//! pass the check; adapters do not close that gap.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{ReservationCommand, ReservationFilter, ReservationRepository};
use crate::domain::{Error, Reservation, Stored};

/// Books assets, refusing overlapping windows.
#[derive(Clone)]
pub struct ReservationService<R> {
    reservations: Arc<R>,
}

impl<R> ReservationService<R> {
    pub fn new(reservations: Arc<R>) -> Self {
        Self { reservations }
    }
}

fn overlap_conflict(existing: &Stored<Reservation>) -> Error {
    Error::conflict(format!(
        "{} is already reserved for an overlapping time",
        existing.value.asset_name()
    ))
    .with_details(json!({
        "code": "reservation_overlap",
        "conflicting_id": existing.id.to_string(),
        "start_time": existing.value.start_time().to_rfc3339(),
        "end_time": existing.value.end_time().to_rfc3339(),
    }))
}

#[async_trait]
impl<R> ReservationCommand for ReservationService<R>
where
    R: ReservationRepository,
{
    async fn reserve(&self, reservation: Reservation) -> Result<Stored<Reservation>, Error> {
        let window = reservation.window();
        if let Some(existing) = self
            .reservations
            .find_overlapping(reservation.asset_name(), &window)
            .await?
        {
            info!(
                asset = reservation.asset_name(),
                conflicting_id = %existing.id,
                "reservation rejected: overlapping window"
            );
            return Err(overlap_conflict(&existing));
        }
        let stored = self.reservations.create(&reservation).await?;
        info!(id = %stored.id, asset = stored.value.asset_name(), "reservation booked");
        Ok(stored)
    }

    async fn list(&self, filter: ReservationFilter) -> Result<Vec<Stored<Reservation>>, Error> {
        Ok(self.reservations.list(&filter).await?)
    }
}

#[cfg(test)]
#[path = "reservation_service_tests.rs"]
mod tests;
