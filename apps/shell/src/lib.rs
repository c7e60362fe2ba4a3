//! # Brew Shell
//!
//! Orchestration layer for the Brew Order client. The UI links against this
//! library; screens render state and call commands, nothing else.
//!
//! ## Module Organization
//! ```text
//! brew_shell/
//! ├── lib.rs          ◄─── You are here (logging setup & exports)
//! ├── state.rs        ◄─── AppState (API client + cart + search)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Catalog listing with local search filter
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── auth.rs     ◄─── Login / signup / profile / logout
//! │   ├── order.rs    ◄─── Order history & checkout
//! │   └── reservation.rs ◄ Table booking
//! └── error.rs        ◄─── Serializable error for the UI
//! ```
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        One Command Per User Action                      │
//! │                                                                         │
//! │  Screen ──► command ──► AppState ──┬──► brew-core (cart, validation)    │
//! │                                    │                                    │
//! │                                    └──► brew-api  (backend requests)    │
//! │                                                                         │
//! │  Results come back as plain serializable data (CartView, Product,      │
//! │  Order, ShellError). Screens hold no business state of their own.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use commands::CartView;
pub use error::{ErrorCode, ShellError};
pub use state::AppState;

/// Initializes the tracing subscriber for structured logging.
///
/// Call once at startup, before [`AppState::init`].
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=brew=trace` - Show trace for brew crates only
/// - Default: INFO, with DEBUG for the brew crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,brew=debug,reqwest=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Logging initialized");
}
