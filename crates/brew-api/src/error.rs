//! # API Error Types
//!
//! Errors that can occur when communicating with the backend.
//!
//! ## Design Principles
//! 1. Typed variants, never bare strings at the call site
//! 2. Connection failures are separated from HTTP status failures so the
//!    shell can log them differently, even though the user-facing message
//!    stays generic either way
//! 3. No retry semantics live here; an error is terminal for its request

use thiserror::Error;

/// Errors from the backend API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend could not be reached at all.
    #[error("Cannot connect to {0}")]
    Connection(String),

    /// The request failed in transit (timeout, TLS, protocol).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be parsed into the expected type.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Client configuration is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading or writing local files (config, session token) failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A local TOML file could not be parsed.
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A local TOML file could not be written.
    #[error("Failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Convenience type alias for Results with ApiError.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ApiError::Connection("http://localhost:5125/api/v1".to_string());
        assert_eq!(err.to_string(), "Cannot connect to http://localhost:5125/api/v1");

        let err = ApiError::Status {
            status: 401,
            message: "invalid credentials".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Request failed with status 401: invalid credentials"
        );
    }
}
