//! # Shell Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Brew Order                             │
//! │                                                                         │
//! │  Screen                      Shell Command                              │
//! │  ──────                      ─────────────                              │
//! │                                                                         │
//! │  login(email, password)                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Validation Error? ── ValidationError ──► ShellError (verbatim,  │  │
//! │  │         │                                  nothing sent)          │  │
//! │  │         ▼                                                         │  │
//! │  │  Request Failed? ──── ApiError ─────────► detail logged via      │  │
//! │  │         │                                  tracing, GENERIC       │  │
//! │  │         ▼                                  message surfaced       │  │
//! │  │  Success ────────────────────────────────────────────────────────│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Every error is terminal for its own action only; the app stays        │
//! │  usable, the cart and session are untouched.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! The screen layer receives errors as data. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use serde::Serialize;

use brew_api::ApiError;
use brew_core::{CoreError, ValidationError};

/// Error returned from shell commands.
///
/// ## Serialization
/// This is what the screen receives when a command fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "email is required"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed (nothing was sent to the backend)
    ValidationError,

    /// The backend request failed (connection, HTTP status, bad body)
    RequestFailed,

    /// Cart operation failed (e.g. checkout on an empty cart)
    CartError,

    /// Internal error (config, filesystem)
    Internal,
}

impl ShellError {
    /// Creates a new shell error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ShellError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ShellError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a request failure with the generic user-facing message.
    pub fn request_failed(message: impl Into<String>) -> Self {
        ShellError::new(ErrorCode::RequestFailed, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ShellError::new(ErrorCode::Internal, message)
    }
}

/// Converts API errors to shell errors.
///
/// The actual failure is logged here; the screen only ever sees a generic
/// message. There is no 4xx/5xx taxonomy to act on client-side.
impl From<ApiError> for ShellError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Connection(detail) => {
                tracing::error!("Connection failed: {}", detail);
                ShellError::request_failed("Could not reach the server")
            }
            ApiError::Status { status, message } => {
                tracing::error!(status = status, "Request rejected: {}", message);
                ShellError::request_failed("Request failed")
            }
            ApiError::Http(e) => {
                tracing::error!("Request failed: {}", e);
                ShellError::request_failed("Request failed")
            }
            ApiError::Parse(detail) => {
                tracing::error!("Bad response body: {}", detail);
                ShellError::request_failed("Unexpected response from the server")
            }
            ApiError::InvalidConfig(detail) => {
                tracing::error!("Invalid configuration: {}", detail);
                ShellError::internal("Invalid configuration")
            }
            ApiError::Io(e) => {
                tracing::error!("Filesystem error: {}", e);
                ShellError::internal("Storage operation failed")
            }
            ApiError::TomlParse(e) => {
                tracing::error!("Config parse error: {}", e);
                ShellError::internal("Invalid configuration")
            }
            ApiError::TomlSerialize(e) => {
                tracing::error!("Config write error: {}", e);
                ShellError::internal("Storage operation failed")
            }
        }
    }
}

/// Converts core errors to shell errors.
///
/// Domain errors carry no secrets, so their messages pass through verbatim.
impl From<CoreError> for ShellError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyCart => {
                ShellError::new(ErrorCode::CartError, "Cart is empty")
            }
            CoreError::Validation(e) => ShellError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors to shell errors.
impl From<ValidationError> for ShellError {
    fn from(err: ValidationError) -> Self {
        ShellError::validation(err.to_string())
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ShellError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_pass_through() {
        let err = ShellError::from(ValidationError::Required { field: "email" });
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "email is required");
    }

    #[test]
    fn test_core_errors_map_to_codes() {
        let err = ShellError::from(CoreError::EmptyCart);
        assert_eq!(err.code, ErrorCode::CartError);
        assert_eq!(err.message, "Cart is empty");
    }

    #[test]
    fn test_request_failures_are_generic() {
        let err = ShellError::from(ApiError::Connection("http://localhost:5125".to_string()));
        assert_eq!(err.code, ErrorCode::RequestFailed);
        // The base URL must never leak into the surfaced message.
        assert!(!err.message.contains("localhost"));

        let err = ShellError::from(ApiError::Status {
            status: 500,
            message: "stack trace goes here".to_string(),
        });
        assert_eq!(err.code, ErrorCode::RequestFailed);
        assert!(!err.message.contains("stack trace"));
    }

    #[test]
    fn test_every_http_status_maps_to_the_same_code() {
        // Client and server errors are indistinguishable to the screen.
        for status in [400, 401, 404, 422, 500, 503] {
            let err = ShellError::from(ApiError::Status {
                status,
                message: "detail".to_string(),
            });
            assert_eq!(err.code, ErrorCode::RequestFailed);
            assert_eq!(err.message, "Request failed");
        }
    }

    #[test]
    fn test_serializes_with_screaming_code() {
        let err = ShellError::validation("email is required");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "email is required");
    }
}
