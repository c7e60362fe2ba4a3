//! # Authentication Endpoints
//!
//! Login and signup against the backend's user resource.
//!
//! ## Token Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Authentication Flow                                 │
//! │                                                                         │
//! │  login(credentials)                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  POST /users/login ──► { token, user }                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SessionStore::store(token)   ← the ONE persisted client value          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  every later request carries "Authorization: Bearer <token>"            │
//! │                                                                         │
//! │  logout() clears the store; the token is opaque, nothing to revoke      │
//! │  client-side.                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use brew_core::types::{AuthResponse, LoginCredentials, SignUpCredentials, User};
use tracing::info;

use crate::client::CafeClient;
use crate::error::ApiResult;

/// Accessor for `/users/login`, `/users/signup`, and `/users/profile`.
#[derive(Debug)]
pub struct AuthApi<'a> {
    client: &'a CafeClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a CafeClient) -> Self {
        AuthApi { client }
    }

    /// Logs in and persists the returned session token.
    pub async fn login(&self, credentials: &LoginCredentials) -> ApiResult<AuthResponse> {
        let response: AuthResponse = self.client.post("/users/login", credentials).await?;
        self.client.session().store(&response.token)?;
        info!(user_id = %response.user.id, "Logged in");
        Ok(response)
    }

    /// Creates an account and persists the returned session token.
    pub async fn signup(&self, credentials: &SignUpCredentials) -> ApiResult<AuthResponse> {
        let response: AuthResponse = self.client.post("/users/signup", credentials).await?;
        self.client.session().store(&response.token)?;
        info!(user_id = %response.user.id, "Account created");
        Ok(response)
    }

    /// Fetches the authenticated user's profile.
    pub async fn profile(&self) -> ApiResult<User> {
        self.client.get("/users/profile").await
    }

    /// Forgets the session token, locally and on disk.
    pub fn logout(&self) -> ApiResult<()> {
        self.client.session().clear()?;
        info!("Logged out");
        Ok(())
    }
}
