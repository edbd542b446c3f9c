//! # Validation Module
//!
//! Pure parsers for operator input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console (apps/cli)                                           │
//! │  ├── Reads one line                                                    │
//! │  └── Owns the retry loop: prints the error and asks again              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── line -> Ok(value) | Err(ValidationError), no side effects         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL constraints                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{parse_price, parse_quantity};
//!
//! assert_eq!(parse_quantity("5").unwrap(), 5);
//! assert!(parse_quantity("-5").is_err());
//! assert_eq!(parse_price("10.5").unwrap(), 10.5);
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace only
///
/// ## Returns
/// The name as typed (inner spacing untouched).
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    if name.trim().is_empty() {
        return Err(ValidationError::required("name"));
    }

    Ok(name.to_string())
}

/// Normalizes an optional text field: blank input means "no value".
pub fn optional_text(input: &str) -> Option<String> {
    if input.trim().is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a whole, non-negative count typed by the operator.
///
/// Only ASCII digits are accepted (surrounding whitespace is ignored), so
/// `"-3"`, `"+3"` and `"3.0"` are all rejected.
fn parse_digits(input: &str, field: &str) -> ValidationResult<i64> {
    let input = input.trim();

    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::invalid_number(field, "whole number"));
    }

    input
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid_number(field, "whole number"))
}

/// Parses a stock quantity.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity(" 42 ").unwrap(), 42);
/// assert!(parse_quantity("4.2").is_err());
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    parse_digits(input, "quantity")
}

/// Parses a low-stock threshold.
pub fn parse_threshold(input: &str) -> ValidationResult<i64> {
    parse_digits(input, "stock limit")
}

/// Parses a product id.
pub fn parse_product_id(input: &str) -> ValidationResult<i64> {
    parse_digits(input, "product id")
}

/// Parses a unit price.
///
/// ## Rules
/// - Any decimal or scientific notation `f64` accepts
/// - NaN and infinities are rejected
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::parse_price;
///
/// assert_eq!(parse_price("10").unwrap(), 10.0);
/// assert!(parse_price("ten").is_err());
/// assert!(parse_price("inf").is_err());
/// ```
pub fn parse_price(input: &str) -> ValidationResult<f64> {
    let price = input
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::invalid_number("price", "number (e.g. 10.5)"))?;

    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    Ok(price)
}

// =============================================================================
// Unit Tests
// =============================================================================
