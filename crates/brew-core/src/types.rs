//! # Domain Types
//!
//! Wire-shaped domain types used throughout Brew Order.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │  Reservation    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  productId      │   │  orderId        │   │  reservationId  │       │
//! │  │  name, image    │   │  status         │   │  date / time    │       │
//! │  │  price (Money)  │   │  items[]        │   │  numberOfPeople │       │
//! │  │  quantity       │   │  totalPrice     │   │  specialRequests│       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     User        │   │   OrderStatus   │   │      Role       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  email, phone   │   │  Pending        │   │  Admin          │       │
//! │  │  role           │   │  Processing     │   │  Customer       │       │
//! │  └─────────────────┘   │  Completed      │   └─────────────────┘       │
//! │                        │  Cancelled      │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Field names are camelCase on the wire and enum variants travel as their
//! PascalCase names (`"Pending"`, `"Customer"`), matching the backend's JSON.
//! Prices are decimals on the wire and integer cents ([`Money`]) in memory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Product & Category
// =============================================================================

/// A purchasable catalog item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier assigned by the backend.
    pub product_id: String,

    /// Display name shown in listings and on receipts.
    pub name: String,

    /// Category this product belongs to.
    pub category_id: String,

    /// Unit price. Decimal on the wire, integer cents in memory.
    #[serde(with = "crate::money::decimal")]
    pub price: Money,

    /// Image URL.
    pub image: String,

    /// Stock quantity available.
    pub quantity: i64,

    /// Product description.
    pub description: String,

    /// When the product was created.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Checks if the product has stock remaining.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// User & Role
// =============================================================================

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Customer,
}

/// A registered user, as returned by the backend at login.
///
/// Phone numbers are kept as validated strings; they are identifiers, not
/// quantities, and leading zeros must survive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Orders
// =============================================================================

/// The status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Cancelled,
}

/// A line item in an order.
/// Uses snapshot fields (name, unit price) frozen at time of ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,

    /// Quantity ordered.
    pub quantity: i64,

    /// Product name at time of ordering (frozen).
    pub product_name: String,

    /// Unit price at time of ordering (frozen).
    #[serde(with = "crate::money::decimal")]
    pub unit_price: Money,
}

impl OrderItem {
    /// Returns the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// A placed order, as returned by `GET /orders` — the receipt view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub user_id: String,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    #[serde(with = "crate::money::decimal")]
    pub total_price: Money,
    pub items: Vec<OrderItem>,
}

/// The body of `POST /orders`: a new order built from the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    #[serde(with = "crate::money::decimal")]
    pub total_price: Money,
}

impl NewOrder {
    /// Builds an order from the current cart contents.
    ///
    /// Duplicate cart entries for the same product collapse into one line
    /// item with the summed quantity. The total is recomputed from the
    /// cart's frozen unit prices.
    pub fn from_cart(cart: &Cart) -> CoreResult<Self> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        Ok(NewOrder {
            status: OrderStatus::Pending,
            items: cart.order_items(),
            total_price: cart.total(),
        })
    }
}

// =============================================================================
// Reservations
// =============================================================================

/// A table reservation.
///
/// Server-assigned fields (`reservation_id`, `created_at`) are `None` until
/// the backend has accepted the booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<String>,
    pub user_id: String,
    pub reservation_date: String,
    pub reservation_time: String,
    pub number_of_people: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Authentication
// =============================================================================

/// Credentials for `POST /users/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Credentials for `POST /users/signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpCredentials {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

/// Successful authentication response: an opaque session token plus the
/// authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

// =============================================================================
// Unit Tests
// =============================================================================
