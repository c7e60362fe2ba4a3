//! # Auth Commands
//!
//! Login, signup, and logout. Fields are validated here first: a bad form
//! never produces a network request, and the validation message reaches the
//! screen verbatim. Request failures are logged with their detail and
//! surfaced as a generic message.

use tracing::debug;

use brew_core::types::{LoginCredentials, SignUpCredentials, User};
use brew_core::validation::{
    validate_email, validate_password, validate_phone, validate_required,
};

use crate::error::ShellError;
use crate::state::AppState;

/// Raw signup form fields as the screen collects them.
#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

/// Logs in with email and password.
///
/// On success the session token is persisted by the API layer; later
/// requests carry it automatically.
///
/// ## Returns
/// The logged-in user's profile.
pub async fn login(state: &AppState, email: &str, password: &str) -> Result<User, ShellError> {
    debug!("login command");

    let credentials = LoginCredentials {
        email: validate_email(email)?,
        password: {
            validate_password(password)?;
            password.to_string()
        },
    };

    let response = state.api().auth().login(&credentials).await?;
    Ok(response.user)
}

/// Creates an account.
///
/// All fields are validated before anything is sent; the phone number is
/// normalized (spaces and hyphens stripped) but stays a string.
///
/// ## Returns
/// The new user's profile. The session token is persisted, so the user is
/// logged in immediately after signing up.
pub async fn signup(state: &AppState, form: &SignUpForm) -> Result<User, ShellError> {
    debug!("signup command");

    let credentials = SignUpCredentials {
        first_name: validate_required("first name", &form.first_name)?,
        last_name: validate_required("last name", &form.last_name)?,
        email: validate_email(&form.email)?,
        password: {
            validate_password(&form.password)?;
            form.password.clone()
        },
        phone: validate_phone(&form.phone)?,
    };

    let response = state.api().auth().signup(&credentials).await?;
    Ok(response.user)
}

/// Fetches the logged-in user's profile for the account screen.
pub async fn get_profile(state: &AppState) -> Result<User, ShellError> {
    debug!("get_profile command");
    let user = state.api().auth().profile().await?;
    Ok(user)
}

/// Logs out by forgetting the session token.
///
/// Purely local; there is no backend call to revoke the token.
pub fn logout(state: &AppState) -> Result<(), ShellError> {
    debug!("logout command");
    state.api().auth().logout()?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::sync::Arc;

    fn test_state() -> AppState {
        let session = Arc::new(brew_api::SessionStore::in_memory());
        let client = brew_api::CafeClient::new(&brew_api::ApiConfig::default(), session)
            .expect("default config is valid");
        AppState::new(client)
    }

    // Validation failures must short-circuit before any request is made;
    // these run without a server precisely because nothing is sent.

    #[tokio::test]
    async fn test_login_rejects_bad_email_without_network() {
        let state = test_state();
        let err = login(&state, "not-an-email", "secret1").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_login_rejects_short_password_without_network() {
        let state = test_state();
        let err = login(&state, "ada@example.com", "abc").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("password"));
    }

    #[tokio::test]
    async fn test_signup_rejects_missing_fields_without_network() {
        let state = test_state();
        let form = SignUpForm {
            first_name: "  ".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
            phone: "0401234567".to_string(),
        };

        let err = signup(&state, &form).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("first name"));
    }

    #[tokio::test]
    async fn test_signup_rejects_bad_phone_without_network() {
        let state = test_state();
        let form = SignUpForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
            phone: "12345".to_string(),
        };

        let err = signup(&state, &form).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_logout_clears_in_memory_session() {
        let state = test_state();
        state.api().session().store("token-123").unwrap();
        assert!(state.api().session().is_authenticated());

        logout(&state).unwrap();
        assert!(!state.api().session().is_authenticated());
    }
}
