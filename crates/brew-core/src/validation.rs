//! # Validation Module
//!
//! Form input validation for Brew Order.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screen (outside this repo)                                   │
//! │  ├── Disables buttons, shows inline hints                              │
//! │  └── Cosmetic only — never trusted                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields, formats, typed parsing                           │
//! │  └── Rejected input never reaches the network                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend API                                                  │
//! │  └── Authoritative; may still reject anything                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Form fields arrive as strings. Anything numeric is parsed here into a
//! typed value or a validation error — never silently coerced.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum guests accepted per table reservation.
pub const MAX_RESERVATION_GUESTS: u32 = 8;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a required field is present and non-blank.
///
/// Returns the trimmed value.
pub fn validate_required(field: &'static str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }

    Ok(value.to_string())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Exactly one '@' with a dot somewhere after it
///
/// Intentionally shallow: the backend is the authority on whether the
/// address exists.
pub fn validate_email(email: &str) -> ValidationResult<String> {
    let email = validate_required("email", email)?;

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };

    if !valid {
        return Err(ValidationError::InvalidFormat {
            field: "email",
            reason: "must look like name@example.com".to_string(),
        });
    }

    Ok(email)
}

/// Validates a password.
///
/// ## Rules
/// - Must not be empty
/// - Must be at least 6 characters
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required { field: "password" });
    }

    if password.len() < 6 {
        return Err(ValidationError::TooShort {
            field: "password",
            min: 6,
        });
    }

    Ok(())
}

/// Validates a phone number and returns the normalized form.
///
/// ## Rules
/// - Must not be empty
/// - Optional leading '+', then 7 to 15 digits
/// - Spaces and hyphens are stripped, not rejected
///
/// Phone numbers stay strings end to end; leading zeros must survive.
pub fn validate_phone(phone: &str) -> ValidationResult<String> {
    let phone = validate_required("phone", phone)?;
    let normalized: String = phone.chars().filter(|c| *c != ' ' && *c != '-').collect();

    let digits = normalized.strip_prefix('+').unwrap_or(&normalized);

    if digits.len() < 7 || digits.len() > 15 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone",
            reason: "must be 7 to 15 digits".to_string(),
        });
    }

    Ok(normalized)
}

// =============================================================================
// Typed Parsers
// =============================================================================

/// Parses the guest-count form field ("2") into a typed number.
///
/// ## Rules
/// - Must be a whole number
/// - Must be between 1 and [`MAX_RESERVATION_GUESTS`]
pub fn parse_guest_count(input: &str) -> ValidationResult<u32> {
    let input = validate_required("guests", input)?;

    let count: u32 = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "guests",
        reason: "must be a whole number".to_string(),
    })?;

    if count == 0 || count > MAX_RESERVATION_GUESTS {
        return Err(ValidationError::OutOfRange {
            field: "guests",
            min: 1,
            max: MAX_RESERVATION_GUESTS as i64,
        });
    }

    Ok(count)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert_eq!(validate_required("name", "  Ada ").unwrap(), "Ada");
        assert!(validate_required("name", "").is_err());
        assert!(validate_required("name", "   ").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("a.b@mail.example.co").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@nodot").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("secret1").is_ok());
        assert!(validate_password("").is_err());
        assert!(validate_password("abc").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert_eq!(validate_phone("040 123 4567").unwrap(), "0401234567");
        assert_eq!(validate_phone("+358-40-1234567").unwrap(), "+358401234567");

        assert!(validate_phone("").is_err());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("phone-number").is_err());
        assert!(validate_phone("1234567890123456").is_err());
    }

    #[test]
    fn test_parse_guest_count() {
        assert_eq!(parse_guest_count("2").unwrap(), 2);
        assert_eq!(parse_guest_count("8").unwrap(), 8);

        assert!(parse_guest_count("").is_err());
        assert!(parse_guest_count("0").is_err());
        assert!(parse_guest_count("9").is_err());
        assert!(parse_guest_count("two").is_err());
        assert!(parse_guest_count("2.5").is_err());
    }
}
