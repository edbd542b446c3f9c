//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core (this file)                                            │
//! │  └── ValidationError  - Operator input rejected, re-prompt             │
//! │                                                                         │
//! │  stockroom-db                                                          │
//! │  └── DbError          - NotFound is reported, the rest is fatal        │
//! │                                                                         │
//! │  apps/cli                                                              │
//! │  └── CliError         - What ends the session                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// Every variant is recoverable: the console prints the message and asks
/// again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Input could not be read as a number of the expected kind.
    #[error("Please enter a valid {expected} for {field}")]
    InvalidNumber { field: String, expected: String },

    /// Parsed as a float but is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

impl ValidationError {
    /// Creates a Required error.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates an InvalidNumber error.
    pub fn invalid_number(field: impl Into<String>, expected: impl Into<String>) -> Self {
        ValidationError::InvalidNumber {
            field: field.into(),
            expected: expected.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::required("name").to_string(), "name is required");

        let err = ValidationError::invalid_number("quantity", "whole number");
        assert_eq!(
            err.to_string(),
            "Please enter a valid whole number for quantity"
        );

        let err = ValidationError::NotFinite {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must be a finite number");
    }
}
