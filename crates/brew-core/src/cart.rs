//! # Cart State Container
//!
//! The in-memory shopping cart: the single source of truth shared across
//! screens, mutated only through the operations defined here.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Screen Action            Shell Command            Cart State Change    │
//! │  ─────────────            ─────────────            ─────────────────    │
//! │                                                                         │
//! │  Tap Product ────────────► add_to_cart() ────────► items.push(snapshot)│
//! │                                                                         │
//! │  Tap Remove ─────────────► remove_from_cart() ───► remove FIRST match  │
//! │                                                                         │
//! │  Tap Clear / Checkout ───► clear_cart() ─────────► items.clear()       │
//! │                                                                         │
//! │  View Cart ──────────────► get_cart() ───────────► (read only)         │
//! │                                                                         │
//! │  NOTE: All operations are total functions over the in-memory state.     │
//! │        Adding never dedupes: the same product twice means two entries.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Insertion order is preserved
//! - The sequence length changes only via the three operations
//! - Every operation completes fully before the next begins (the handle's
//!   mutex serializes mutations)

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{OrderItem, Product};

// =============================================================================
// Cart Item
// =============================================================================

/// An entry in the shopping cart.
///
/// ## Snapshot Semantics
/// The item is a copy of the product taken at the moment of adding. If the
/// catalog changes afterwards (price, stock, description), items already in
/// the cart are unaffected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product ID (for matching on removal and for order submission).
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    #[serde(with = "crate::money::decimal")]
    pub unit_price: Money,

    /// Image URL at time of adding.
    pub image: String,

    /// Stock quantity the catalog reported when the item was added.
    pub quantity_available: i64,

    /// Description at time of adding.
    pub description: String,

    /// When this item was added to the cart.
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a cart item by snapshotting a product.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            product_id: product.product_id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            image: product.image.clone(),
            quantity_available: product.quantity,
            description: product.description.clone(),
            added_at: Utc::now(),
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered sequence of product snapshots.
///
/// Duplicates by product id are permitted — adding the same product twice
/// yields two entries. Created empty at application start; never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Appends a snapshot of `product` to the end of the cart.
    ///
    /// No deduplication and no stock validation happens here; this is a
    /// total function. Availability checks belong to the caller, before
    /// the snapshot is taken.
    pub fn add(&mut self, product: &Product) {
        self.items.push(CartItem::from_product(product));
    }

    /// Removes the first entry whose product id equals `product_id`.
    ///
    /// Only the earliest-inserted match is removed, even if duplicates
    /// exist. Returns `false` when no entry matched — that is not an
    /// error; the cart is simply unchanged.
    pub fn remove(&mut self, product_id: &str) -> bool {
        match self.items.iter().position(|i| i.product_id == product_id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns the number of entries in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Recomputes the cart total from the frozen unit prices.
    pub fn total(&self) -> Money {
        self.items.iter().map(|i| i.unit_price).sum()
    }

    /// Collapses the entries into order line items.
    ///
    /// Duplicate entries for the same product become one line item with the
    /// summed quantity; first-seen order is preserved.
    pub fn order_items(&self) -> Vec<OrderItem> {
        let mut items: Vec<OrderItem> = Vec::new();

        for entry in &self.items {
            match items.iter_mut().find(|i| i.product_id == entry.product_id) {
                Some(line) => line.quantity += 1,
                None => items.push(OrderItem {
                    product_id: entry.product_id.clone(),
                    quantity: 1,
                    product_name: entry.name.clone(),
                    unit_price: entry.unit_price,
                }),
            }
        }

        items
    }
}

// =============================================================================
// Shared Handle
// =============================================================================

/// Shared, thread-safe handle to the cart.
///
/// ## Thread Safety
/// The cart is wrapped in `Arc<Mutex<T>>`:
/// - `Arc`: shared ownership across screens and commands
/// - `Mutex`: one mutation at a time, so every operation is atomic
///
/// UI event dispatch is effectively single-threaded, but commands run on an
/// async runtime; the mutex keeps the "one operation completes fully before
/// the next begins" invariant regardless of which thread polls the future.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart handle.
    pub fn new() -> Self {
        CartState::default()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = cart_state.with_cart(|cart| cart.total());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add(&product));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        f(&mut cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            product_id: id.to_string(),
            name: format!("Product {}", id),
            category_id: "c-1".to_string(),
            price: Money::from_cents(price_cents),
            image: format!("https://cdn.example.com/{}.jpg", id),
            quantity: 10,
            description: "A test product".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_appends_in_call_order() {
        let mut cart = Cart::new();
        for id in ["1", "2", "3"] {
            cart.add(&test_product(id, 100));
        }

        assert_eq!(cart.len(), 3);
        let ids: Vec<&str> = cart.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_add_does_not_deduplicate() {
        let mut cart = Cart::new();
        let product = test_product("1", 350);

        cart.add(&product);
        cart.add(&product);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total().cents(), 700);
    }

    #[test]
    fn test_snapshot_is_independent_of_catalog() {
        let mut cart = Cart::new();
        let mut product = test_product("1", 350);
        cart.add(&product);

        // Catalog change after adding must not affect the cart
        product.price = Money::from_cents(999);
        product.quantity = 0;

        assert_eq!(cart.items()[0].unit_price.cents(), 350);
        assert_eq!(cart.items()[0].quantity_available, 10);
    }

    #[test]
    fn test_remove_only_item_empties_cart() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 350));

        assert!(cart.remove("1"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_id_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 350));
        cart.add(&test_product("2", 400));

        assert!(!cart.remove("nope"));
        assert_eq!(cart.len(), 2);
        let ids: Vec<&str> = cart.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_remove_takes_earliest_duplicate_only() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 350));
        cart.add(&test_product("2", 400));
        cart.add(&test_product("1", 350));

        assert!(cart.remove("1"));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_clear_always_empties() {
        let mut cart = Cart::new();
        assert!(cart.is_empty());
        cart.clear();
        assert!(cart.is_empty());

        cart.add(&test_product("1", 350));
        cart.add(&test_product("2", 400));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total().cents(), 0);
    }

    #[test]
    fn test_add_add_remove_recomputes_total() {
        // Add A ($3.50), add B ($4.00), remove A: only B remains, total $4.00
        let mut cart = Cart::new();
        cart.add(&test_product("1", 350));
        cart.add(&test_product("2", 400));

        assert!(cart.remove("1"));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].product_id, "2");
        assert_eq!(cart.total().cents(), 400);
    }

    #[test]
    fn test_order_items_groups_duplicates() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 350));
        cart.add(&test_product("2", 400));
        cart.add(&test_product("1", 350));

        let items = cart.order_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].product_id, "1");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].product_id, "2");
        assert_eq!(items[1].quantity, 1);
        assert_eq!(items[0].line_total().cents(), 700);
    }

    #[test]
    fn test_cart_state_shares_one_cart() {
        let state = CartState::new();
        let other = state.clone();

        state.with_cart_mut(|cart| cart.add(&test_product("1", 350)));
        assert_eq!(other.with_cart(|cart| cart.len()), 1);

        other.with_cart_mut(|cart| cart.clear());
        assert!(state.with_cart(|cart| cart.is_empty()));
    }
}
