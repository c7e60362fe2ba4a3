//! # brew-core: Pure Business Logic for Brew Order
//!
//! This crate is the **heart** of the Brew Order client. It contains all
//! client-side business logic as pure types and functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Brew Order Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Screens (out of scope)                         │   │
//! │  │    Home ──► Product Details ──► Cart ──► Orders/Receipt         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  apps/shell (commands)                          │   │
//! │  │    list_products, add_to_cart, login, checkout, ...             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ brew-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │   money   │  │  search   │  │ validation│  │   │
//! │  │   │   Cart    │  │   Money   │  │  filter   │  │   rules   │  │   │
//! │  │   │ CartState │  │  decimal  │  │SearchState│  │  parsers  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    brew-api (HTTP client)                       │   │
//! │  │        GET /products, POST /users/login, POST /orders, ...      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The cart state container (add / remove-first / clear)
//! - [`types`] - Domain types (Product, Order, Reservation, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`search`] - Shared search string and the product name filter
//! - [`validation`] - Form validation and typed parsing at the boundary
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: Prices become cents (i64) at the wire boundary
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use brew_core::cart::Cart;
//! use brew_core::money::Money;
//!
//! let latte: brew_core::types::Product = serde_json::from_str(r#"{
//!     "productId": "1", "name": "Coffee Latte", "categoryId": "c-1",
//!     "price": 3.50, "image": "", "quantity": 3,
//!     "description": "", "createdAt": "2026-01-15T09:30:00Z"
//! }"#).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add(&latte);
//! cart.add(&latte);
//! assert_eq!(cart.total(), Money::from_cents(700));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod search;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use brew_core::Cart` instead of
// `use brew_core::cart::Cart`

pub use cart::{Cart, CartItem, CartState};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use search::SearchState;
pub use types::*;
