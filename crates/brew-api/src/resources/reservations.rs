//! # Reservation Endpoints
//!
//! Table reservations for the coffee shop.

use brew_core::types::Reservation;
use tracing::info;

use crate::client::CafeClient;
use crate::error::ApiResult;

/// Accessor for `/reservations`.
#[derive(Debug)]
pub struct ReservationsApi<'a> {
    client: &'a CafeClient,
}

impl<'a> ReservationsApi<'a> {
    pub(crate) fn new(client: &'a CafeClient) -> Self {
        ReservationsApi { client }
    }

    /// Fetches the authenticated user's reservations.
    pub async fn list(&self) -> ApiResult<Vec<Reservation>> {
        self.client.get("/reservations").await
    }

    /// Books a table. The backend assigns `reservation_id` and `created_at`.
    pub async fn create(&self, reservation: &Reservation) -> ApiResult<Reservation> {
        let created: Reservation = self.client.post("/reservations", reservation).await?;
        info!(
            reservation_id = ?created.reservation_id,
            date = %created.reservation_date,
            "Reservation booked"
        );
        Ok(created)
    }
}
