//! # HTTP Client
//!
//! The thin wrapper over reqwest every resource goes through.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Request Flow                                     │
//! │                                                                         │
//! │  client.products().list()                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CafeClient::get("/products")                                           │
//! │       │                                                                 │
//! │       ├── join base URL + path                                          │
//! │       ├── attach "Authorization: Bearer <token>" if a session exists    │
//! │       ├── send with configured timeouts                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  connect error?  → ApiError::Connection   │                         │
//! │  │  non-2xx status? → ApiError::Status       │                         │
//! │  │  bad JSON body?  → ApiError::Parse        │                         │
//! │  │  success         → deserialized R         │                         │
//! │  └───────────────────────────────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No retries, no backoff, no response caching: a failed request is terminal
//! for the triggering action and the caller decides what to show the user.

use std::sync::Arc;
use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::resources::{AuthApi, OrdersApi, ProductsApi, ReservationsApi};
use crate::session::SessionStore;

/// HTTP client for the coffee-shop backend.
///
/// ## Usage
/// ```rust,ignore
/// let session = Arc::new(SessionStore::load(None)?);
/// let client = CafeClient::new(&ApiConfig::default(), session)?;
///
/// let products = client.products().list().await?;
/// let auth = client.auth().login(&credentials).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CafeClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl CafeClient {
    /// Creates a new client from configuration.
    pub fn new(config: &ApiConfig, session: Arc<SessionStore>) -> ApiResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(ApiError::Http)?;

        Ok(CafeClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// The session store this client attaches tokens from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    // =========================================================================
    // Resource Accessors
    // =========================================================================

    /// Product catalog endpoints (`/products`).
    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }

    /// Authentication endpoints (`/users/login`, `/users/signup`).
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Order endpoints (`/orders`).
    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi::new(self)
    }

    /// Reservation endpoints (`/reservations`).
    pub fn reservations(&self) -> ReservationsApi<'_> {
        ReservationsApi::new(self)
    }

    // =========================================================================
    // Request Plumbing
    // =========================================================================

    /// Joins the base address with a resource path.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attaches the bearer token when a session is present.
    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Performs a GET request and parses the JSON response.
    pub(crate) async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        debug!(path = %path, "GET");
        let response = self
            .with_auth(self.http.get(self.url(path)))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        Self::parse_response(response).await
    }

    /// Performs a POST request with a JSON body and parses the response.
    pub(crate) async fn post<B, R>(&self, path: &str, body: &B) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(path = %path, "POST");
        let response = self
            .with_auth(self.http.post(self.url(path)).json(body))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        Self::parse_response(response).await
    }

    /// Maps transport errors, separating connection refusals.
    fn map_send_error(&self, error: reqwest::Error) -> ApiError {
        if error.is_connect() {
            ApiError::Connection(self.base_url.clone())
        } else {
            ApiError::Http(error)
        }
    }

    /// Turns a non-success status into an error, otherwise parses the body.
    async fn parse_response<R: DeserializeOwned>(response: reqwest::Response) -> ApiResult<R> {
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<R>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> CafeClient {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        CafeClient::new(&config, Arc::new(SessionStore::in_memory())).unwrap()
    }

    #[test]
    fn test_url_joining() {
        let client = test_client("http://localhost:5125/api/v1");
        assert_eq!(
            client.url("/products"),
            "http://localhost:5125/api/v1/products"
        );
        assert_eq!(
            client.url("products/p-1"),
            "http://localhost:5125/api/v1/products/p-1"
        );

        // Trailing slash on the base must not double up
        let client = test_client("http://localhost:5125/api/v1/");
        assert_eq!(
            client.url("/orders"),
            "http://localhost:5125/api/v1/orders"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let config = ApiConfig {
            base_url: "localhost:5125".to_string(),
            ..ApiConfig::default()
        };
        assert!(CafeClient::new(&config, Arc::new(SessionStore::in_memory())).is_err());
    }
}
