//! # Application State
//!
//! The composed state the commands operate on.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        AppState                                         │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────────────┐  │
//! │  │  CafeClient  │  │  CartState   │  │  SearchState                 │  │
//! │  │              │  │              │  │                              │  │
//! │  │  • base URL  │  │  • Arc<Mutex │  │  • Arc<RwLock<String>>       │  │
//! │  │  • session   │  │    <Cart>>   │  │  • shared search query       │  │
//! │  │  • timeouts  │  │  • snapshots │  │                              │  │
//! │  └──────────────┘  └──────────────┘  └──────────────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                         │
//! │  • CafeClient: reqwest client is internally reference-counted           │
//! │  • CartState: protected by Arc<Mutex<T>> for exclusive access           │
//! │  • SearchState: Arc<RwLock<T>>, many readers, one writer                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::info;

use brew_api::{ApiConfig, CafeClient, SessionStore};
use brew_core::{CartState, SearchState};

use crate::error::ShellError;

/// Everything a command needs: the API client, the cart, the search query.
#[derive(Debug)]
pub struct AppState {
    api: CafeClient,
    cart: CartState,
    search: SearchState,
}

impl AppState {
    /// Composes state around an already-built API client.
    ///
    /// The cart and search query always start empty; neither is persisted.
    pub fn new(api: CafeClient) -> Self {
        AppState {
            api,
            cart: CartState::new(),
            search: SearchState::new(),
        }
    }

    /// Builds the application state for a normal run.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────┐
    /// │  1. Load Configuration                                          │
    /// │     • api.toml from the platform config directory               │
    /// │     • BREW_API_URL / BREW_API_TIMEOUT_SECS overrides            │
    /// │     • Defaults when neither exists                              │
    /// │                                                                 │
    /// │  2. Restore Session                                             │
    /// │     • session.toml holds the bearer token, if any               │
    /// │     • A corrupt or missing file means logged out, not an error  │
    /// │                                                                 │
    /// │  3. Build API Client                                            │
    /// │     • reqwest with request + connect timeouts                   │
    /// │                                                                 │
    /// │  4. Empty Cart + Empty Search                                   │
    /// └─────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn init() -> Result<Self, ShellError> {
        let config = ApiConfig::load_or_default(None);
        let session = Arc::new(SessionStore::load(None)?);

        let authenticated = session.is_authenticated();
        let api = CafeClient::new(&config, session)?;

        info!(
            base_url = %config.base_url,
            authenticated = authenticated,
            "Application state initialized"
        );

        Ok(AppState::new(api))
    }

    /// The backend API client.
    pub fn api(&self) -> &CafeClient {
        &self.api
    }

    /// The shared cart handle.
    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    /// The shared search query handle.
    pub fn search(&self) -> &SearchState {
        &self.search
    }
}
