//! # brew-api: Backend API Client for Brew Order
//!
//! This crate provides HTTP access to the coffee-shop backend.
//! It is a configuration decorator over reqwest, not a protocol: it joins
//! paths onto a configured base address, attaches the bearer token when a
//! session exists, and parses JSON responses into `brew-core` types.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Brew Order Data Flow                             │
//! │                                                                         │
//! │  Shell command (list_products, login, checkout)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     brew-api (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  CafeClient   │    │   Resources   │    │ SessionStore │  │   │
//! │  │   │  (client.rs)  │    │ (products.rs) │    │ (session.rs) │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ reqwest +     │◄───│ ProductsApi   │    │ the one      │  │   │
//! │  │   │ bearer token  │    │ AuthApi       │───►│ persisted    │  │   │
//! │  │   │ + timeouts    │    │ OrdersApi     │    │ value        │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Backend REST API (external collaborator)           │   │
//! │  │        /products  /users  /orders  /reservations                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`client`] - The reqwest wrapper (URL joining, auth header, parsing)
//! - [`config`] - Base URL and timeouts (TOML file + env + defaults)
//! - [`session`] - Session token persistence
//! - [`resources`] - Typed endpoint accessors
//! - [`error`] - API error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use brew_api::{ApiConfig, CafeClient, SessionStore};
//! use std::sync::Arc;
//!
//! let config = ApiConfig::load_or_default(None);
//! let session = Arc::new(SessionStore::load(None)?);
//! let client = CafeClient::new(&config, session)?;
//!
//! let products = client.products().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod config;
pub mod error;
pub mod resources;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::CafeClient;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use session::SessionStore;
