//! # Reservation Commands
//!
//! Table booking. The form arrives as strings; the guest count is parsed
//! into a typed number here, and a bad form never reaches the network.

use tracing::debug;

use brew_core::types::Reservation;
use brew_core::validation::{parse_guest_count, validate_required};

use crate::error::ShellError;
use crate::state::AppState;

/// Raw reservation form fields as the screen collects them.
#[derive(Debug, Clone)]
pub struct ReservationForm {
    pub user_id: String,
    /// Date string, e.g. "2026-09-01".
    pub date: String,
    /// Time string, e.g. "18:30".
    pub time: String,
    /// Guest count as typed, e.g. "2".
    pub guests: String,
    pub special_requests: Option<String>,
}

/// Books a table.
///
/// ## Returns
/// The created reservation, with the backend-assigned id and timestamp.
pub async fn create_reservation(
    state: &AppState,
    form: &ReservationForm,
) -> Result<Reservation, ShellError> {
    debug!("create_reservation command");

    let reservation = Reservation {
        reservation_id: None,
        user_id: validate_required("user", &form.user_id)?,
        reservation_date: validate_required("date", &form.date)?,
        reservation_time: validate_required("time", &form.time)?,
        number_of_people: parse_guest_count(&form.guests)?,
        special_requests: form
            .special_requests
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from),
        created_at: None,
    };

    let created = state.api().reservations().create(&reservation).await?;
    Ok(created)
}

/// Fetches the authenticated user's reservations.
pub async fn list_reservations(state: &AppState) -> Result<Vec<Reservation>, ShellError> {
    debug!("list_reservations command");
    let reservations = state.api().reservations().list().await?;
    Ok(reservations)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::sync::Arc;

    fn test_state() -> AppState {
        let session = Arc::new(brew_api::SessionStore::in_memory());
        let client = brew_api::CafeClient::new(&brew_api::ApiConfig::default(), session)
            .expect("default config is valid");
        AppState::new(client)
    }

    fn form() -> ReservationForm {
        ReservationForm {
            user_id: "u-1".to_string(),
            date: "2026-09-01".to_string(),
            time: "18:30".to_string(),
            guests: "2".to_string(),
            special_requests: None,
        }
    }

    #[tokio::test]
    async fn test_rejects_blank_date_without_network() {
        let state = test_state();
        let mut bad = form();
        bad.date = "  ".to_string();

        let err = create_reservation(&state, &bad).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("date"));
    }

    #[tokio::test]
    async fn test_rejects_guest_count_out_of_range_without_network() {
        let state = test_state();

        let mut bad = form();
        bad.guests = "0".to_string();
        let err = create_reservation(&state, &bad).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let mut bad = form();
        bad.guests = "9".to_string();
        let err = create_reservation(&state, &bad).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_rejects_non_numeric_guest_count_without_network() {
        let state = test_state();
        let mut bad = form();
        bad.guests = "two".to_string();

        let err = create_reservation(&state, &bad).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
