//! # Cart Commands
//!
//! Cart manipulation. Every mutation returns the updated view so the screen
//! can re-render without a second call.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Placed  │       │
//! │  │  Cart    │     │          │     │  Screen  │     │  Order   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart        checkout                           │
//! │                   remove_from_cart   (order.rs, clears on success)      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                    │
//! │                                                      (back to empty)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use brew_core::types::Product;
use brew_core::{Cart, CartItem, Money};

use crate::error::ShellError;
use crate::state::AppState;

/// Cart response including items and the recomputed total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItem>,

    /// Sum of the frozen unit prices, as a wire decimal ("7.50" ⇒ 7.5).
    #[serde(with = "brew_core::money::decimal")]
    pub total: Money,

    /// Number of entries (duplicates counted separately).
    pub count: usize,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        CartView {
            items: cart.items().to_vec(),
            total: cart.total(),
            count: cart.len(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(state: &AppState) -> CartView {
    debug!("get_cart command");
    state.cart().with_cart(|c| CartView::from(c))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Fetches the product so the snapshot carries the current price
/// - Always appends: adding the same product twice yields two entries
/// - Adding never fails once the product is fetched; the backend is the
///   authority on stock at order time
///
/// ## Returns
/// Updated cart view.
pub async fn add_to_cart(state: &AppState, product_id: &str) -> Result<CartView, ShellError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = state.api().products().get(product_id).await?;
    Ok(push_snapshot(state, &product))
}

/// Snapshots a fetched product into the cart.
fn push_snapshot(state: &AppState, product: &Product) -> CartView {
    if !product.in_stock() {
        warn!(name = %product.name, "Adding product with no reported stock");
    }

    let view = state.cart().with_cart_mut(|c| {
        c.add(product);
        CartView::from(&*c)
    });

    debug!(count = view.count, total = %view.total, "Cart updated");
    view
}

/// Removes the earliest-added entry for the given product.
///
/// Removing something that is not in the cart is a no-op, not an error.
///
/// ## Returns
/// Updated cart view.
pub fn remove_from_cart(state: &AppState, product_id: &str) -> CartView {
    debug!(product_id = %product_id, "remove_from_cart command");

    state.cart().with_cart_mut(|c| {
        let removed = c.remove(product_id);
        if !removed {
            debug!(product_id = %product_id, "Product was not in the cart");
        }
        CartView::from(&*c)
    })
}

/// Clears all items from the cart.
///
/// ## When Used
/// - User empties the cart manually
/// - After checkout succeeds (order.rs calls this path internally)
///
/// ## Returns
/// Empty cart view.
pub fn clear_cart(state: &AppState) -> CartView {
    debug!("clear_cart command");

    state.cart().with_cart_mut(|c| {
        c.clear();
        CartView::from(&*c)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use brew_core::types::Product;
    use chrono::Utc;

    fn test_state() -> AppState {
        let session = std::sync::Arc::new(brew_api::SessionStore::in_memory());
        let client = brew_api::CafeClient::new(&brew_api::ApiConfig::default(), session)
            .expect("default config is valid");
        AppState::new(client)
    }

    fn product(id: &str, name: &str, cents: i64) -> Product {
        Product {
            product_id: id.to_string(),
            name: name.to_string(),
            category_id: "c-1".to_string(),
            price: Money::from_cents(cents),
            image: String::new(),
            quantity: 10,
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_get_cart_starts_empty() {
        let state = test_state();
        let view = get_cart(&state);
        assert_eq!(view.count, 0);
        assert!(view.total.is_zero());
    }

    #[test]
    fn test_add_appends_even_without_stock() {
        let state = test_state();
        let mut sold_out = product("p-1", "Espresso", 350);
        sold_out.quantity = 0;

        let view = push_snapshot(&state, &sold_out);
        assert_eq!(view.count, 1);
        assert_eq!(view.total, Money::from_cents(350));
    }

    #[test]
    fn test_remove_returns_updated_view() {
        let state = test_state();
        state.cart().with_cart_mut(|c| {
            c.add(&product("p-1", "Espresso", 350));
            c.add(&product("p-2", "Mocha", 400));
        });

        let view = remove_from_cart(&state, "p-1");
        assert_eq!(view.count, 1);
        assert_eq!(view.total, Money::from_cents(400));
    }

    #[test]
    fn test_remove_missing_is_a_no_op() {
        let state = test_state();
        state
            .cart()
            .with_cart_mut(|c| c.add(&product("p-1", "Espresso", 350)));

        let view = remove_from_cart(&state, "p-404");
        assert_eq!(view.count, 1);
    }

    #[test]
    fn test_clear_cart_empties() {
        let state = test_state();
        state.cart().with_cart_mut(|c| {
            c.add(&product("p-1", "Espresso", 350));
            c.add(&product("p-1", "Espresso", 350));
        });

        let view = clear_cart(&state);
        assert_eq!(view.count, 0);
        assert!(view.total.is_zero());
    }

    #[test]
    fn test_cart_view_serializes_decimal_total() {
        let state = test_state();
        state
            .cart()
            .with_cart_mut(|c| c.add(&product("p-1", "Espresso", 350)));

        let json = serde_json::to_value(get_cart(&state)).unwrap();
        assert_eq!(json["total"], 3.5);
        assert_eq!(json["count"], 1);
        assert_eq!(json["items"][0]["productId"], "p-1");
    }
}
