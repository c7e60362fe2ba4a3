//! # Order Commands
//!
//! Order history, receipts, and checkout.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Flow                                     │
//! │                                                                         │
//! │  checkout()                                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Cart empty? ──── yes ──► CartError, cart untouched                     │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  Build NewOrder (duplicates grouped into quantities, total recomputed)  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  POST /orders ─── fails ──► error surfaced, CART KEPT (user retries)    │
//! │       │ ok                                                              │
//! │       ▼                                                                 │
//! │  clear cart, return the created order (the receipt)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use brew_core::types::{NewOrder, Order};

use crate::error::ShellError;
use crate::state::AppState;

/// Fetches the authenticated user's order history.
pub async fn list_orders(state: &AppState) -> Result<Vec<Order>, ShellError> {
    debug!("list_orders command");
    let orders = state.api().orders().list().await?;
    Ok(orders)
}

/// Fetches one order for the receipt screen.
pub async fn get_order(state: &AppState, order_id: &str) -> Result<Order, ShellError> {
    debug!(order_id = %order_id, "get_order command");
    let order = state.api().orders().get(order_id).await?;
    Ok(order)
}

/// Submits the current cart as an order.
///
/// The cart is cleared only after the backend accepts the order; on any
/// failure it is left intact so the user can retry.
pub async fn checkout(state: &AppState) -> Result<Order, ShellError> {
    debug!("checkout command");

    let new_order = state.cart().with_cart(NewOrder::from_cart)?;

    let order = state.api().orders().create(&new_order).await?;

    state.cart().with_cart_mut(|c| c.clear());
    info!(order_id = %order.order_id, "Checkout complete, cart cleared");

    Ok(order)
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

    #[tokio::test]
    async fn test_checkout_rejects_empty_cart_without_network() {
        let state = test_state();
        let err = checkout(&state).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
    }
}
