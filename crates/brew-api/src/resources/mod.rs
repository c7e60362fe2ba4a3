//! # Resource Endpoints
//!
//! Typed accessors for the backend's REST resources, one module per
//! resource. Each accessor borrows the [`CafeClient`](crate::client::CafeClient)
//! and translates method calls into paths and bodies:
//!
//! - [`products`] - `GET /products`, `GET /products/:id`
//! - [`auth`] - `POST /users/login`, `POST /users/signup`, `GET /users/profile`
//! - [`orders`] - `GET /orders`, `GET /orders/:id`, `POST /orders`
//! - [`reservations`] - `GET /reservations`, `POST /reservations`
//!
//! The backend's own contract (pricing, inventory, auth rules) is an
//! external collaborator; these modules only shape requests and parse
//! responses.

pub mod auth;
pub mod orders;
pub mod products;
pub mod reservations;

pub use auth::AuthApi;
pub use orders::OrdersApi;
pub use products::ProductsApi;
pub use reservations::ReservationsApi;
