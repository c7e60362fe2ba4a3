//! # Money Module
//!
//! Provides the `Money` type for handling prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The backend sends prices as JSON decimals:                            │
//! │    { "price": 3.50 }                                                    │
//! │                                                                         │
//! │  Summing floats in the cart drifts:                                    │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Parse to Integer Cents at the Boundary                  │
//! │    3.50 becomes 350 cents on deserialization; every calculation        │
//! │    after that point is exact integer arithmetic.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use brew_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(350); // $3.50
//!
//! // Parse form input at the boundary
//! let typed = Money::parse("4.00").unwrap();
//!
//! let total = price + typed; // $7.50
//! assert_eq!(total.cents(), 750);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support (as raw cents; see [`decimal`] for
///   the wire adapter used by API-facing types)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a quantity (for order line totals).
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Parses a decimal string ("3.50", "4", "0.99") into Money.
    ///
    /// This is the boundary parser for form input: string fields are
    /// converted to a typed value or a validation error, never silently
    /// coerced.
    ///
    /// ## Rules
    /// - At most two fractional digits
    /// - No sign, no exponent, digits only around a single '.'
    ///
    /// ## Example
    /// ```rust
    /// use brew_core::money::Money;
    ///
    /// assert_eq!(Money::parse("3.50").unwrap().cents(), 350);
    /// assert_eq!(Money::parse("4").unwrap().cents(), 400);
    /// assert_eq!(Money::parse("0.5").unwrap().cents(), 50);
    /// assert!(Money::parse("-1.00").is_err());
    /// assert!(Money::parse("3.505").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(ValidationError::Required { field: "price" });
        }

        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price",
            reason: reason.to_string(),
        };

        let (major_str, minor_str) = match input.split_once('.') {
            Some((_, "")) => return Err(invalid("must have digits after the decimal point")),
            Some((major, minor)) => (major, minor),
            None => (input, ""),
        };

        if major_str.is_empty() || !major_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("must be a non-negative decimal number"));
        }

        if minor_str.len() > 2 || !minor_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("must have at most two decimal places"));
        }

        let major: i64 = major_str
            .parse()
            .map_err(|_| invalid("amount is too large"))?;

        // "3.5" means 50 cents, not 5
        let minor: i64 = match minor_str.len() {
            0 => 0,
            1 => minor_str.parse::<i64>().unwrap_or(0) * 10,
            _ => minor_str.parse().unwrap_or(0),
        };

        major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .map(Money)
            .ok_or_else(|| invalid("amount is too large"))
    }
}

// =============================================================================
// Wire Adapter
// =============================================================================

/// Serde adapter between `Money` and the backend's decimal representation.
///
/// The REST API sends `"price": 3.5`; apply this module with
/// `#[serde(with = "brew_core::money::decimal")]` to convert to and from
/// integer cents at the (de)serialization boundary.
pub mod decimal {
    use super::Money;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(money.cents() as f64 / 100.0)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() {
            return Err(serde::de::Error::custom("price must be a finite number"));
        }
        // Round half away from zero to the nearest cent
        Ok(Money::from_cents((value * 100.0).round() as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and receipts. UI display formatting (localization)
/// belongs to the screen layer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Summation over iterators (cart totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(350);
        assert_eq!(money.cents(), 350);
        assert_eq!(money.dollars(), 3);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(Money::parse("3.50").unwrap().cents(), 350);
        assert_eq!(Money::parse("4").unwrap().cents(), 400);
        assert_eq!(Money::parse("4.00").unwrap().cents(), 400);
        assert_eq!(Money::parse("0.5").unwrap().cents(), 50);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(" 12.99 ").unwrap().cents(), 1299);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("-1.00").is_err());
        assert!(Money::parse("3.505").is_err());
        assert!(Money::parse("3.").is_err());
        assert!(Money::parse(".50").is_err());
        assert!(Money::parse("3,50").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(350)), "$3.50");
        assert_eq!(format!("{}", Money::from_cents(400)), "$4.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(350);
        let b = Money::from_cents(400);

        assert_eq!((a + b).cents(), 750);
        assert_eq!((b - a).cents(), 50);
        assert_eq!(a.multiply_quantity(3).cents(), 1050);

        let total: Money = [a, b, Money::from_cents(250)].into_iter().sum();
        assert_eq!(total.cents(), 1000);
    }

    #[test]
    fn test_decimal_wire_adapter() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Priced {
            #[serde(with = "crate::money::decimal")]
            price: Money,
        }

        let parsed: Priced = serde_json::from_str(r#"{"price":3.5}"#).unwrap();
        assert_eq!(parsed.price.cents(), 350);

        let parsed: Priced = serde_json::from_str(r#"{"price":4}"#).unwrap();
        assert_eq!(parsed.price.cents(), 400);

        let json = serde_json::to_string(&Priced {
            price: Money::from_cents(1299),
        })
        .unwrap();
        assert_eq!(json, r#"{"price":12.99}"#);
    }
}
