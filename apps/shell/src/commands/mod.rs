//! # Commands Module
//!
//! One command per user action. Screens never touch the cart, the search
//! query, or the network directly; they call these functions.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Command Surface                                    │
//! │                                                                         │
//! │  product.rs      list_products, get_product, set_search_query          │
//! │  cart.rs         get_cart, add_to_cart, remove_from_cart, clear_cart   │
//! │  auth.rs         login, signup, get_profile, logout                     │
//! │  order.rs        list_orders, get_order, checkout                       │
//! │  reservation.rs  create_reservation, list_reservations                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod cart;
pub mod order;
pub mod product;
pub mod reservation;

pub use cart::CartView;
