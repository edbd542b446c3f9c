//! # stockroom-core: Pure Domain Logic for Stockroom
//!
//! Types and input rules shared by the database layer and the terminal app.
//! Nothing in here touches the disk, the database or the console.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (menu loop)                         │   │
//! │  │    prompt ──► validate ──► repository call ──► render table     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌───────────────┐  ┌───────────────┐      │   │
//! │  │   │    types      │  │  validation   │  │    error      │      │   │
//! │  │   │  Product      │  │ parse_quantity│  │ ValidationErr │      │   │
//! │  │   │  MenuChoice   │  │ parse_price   │  │               │      │   │
//! │  │   └───────────────┘  └───────────────┘  └───────────────┘      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stockroom-db (Database Layer)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, NewProduct, menu and search choices
//! - [`validation`] - Pure parsers for operator input
//! - [`error`] - Validation error type
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{validation::parse_quantity, MenuChoice};
//!
//! assert_eq!(parse_quantity("12").unwrap(), 12);
//! assert!(parse_quantity("twelve").is_err());
//! assert_eq!(MenuChoice::parse("7"), Some(MenuChoice::Exit));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency symbol printed in front of every price.
pub const CURRENCY_SYMBOL: &str = "$";
