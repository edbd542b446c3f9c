//! # stockroom-db: Database Layer for Stockroom
//!
//! SQLite access for the inventory tool, built on sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Menu handler (e.g. "5. Low-stock report")                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   stockroom-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │   Database    │    │  Repository   │    │    Schema    │   │   │
//! │  │   │ (database.rs) │    │ (product.rs)  │    │ (schema.rs)  │   │   │
//! │  │   │               │    │               │    │              │   │   │
//! │  │   │ connect() per │◄───│ ProductRepo   │    │ products     │   │   │
//! │  │   │ operation     │    │               │    │ table DDL    │   │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite file (inventory.db)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`database`] - Storage handle and configuration
//! - [`schema`] - `products` table definition
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_db::{Database, DbConfig};
//!
//! let db = Database::open(DbConfig::new("inventory.db")).await?;
//! let low = db.products().find_by_stock_threshold(10).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod database;
pub mod error;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use database::{Database, DbConfig};
pub use error::{DbError, DbResult};

pub use repository::product::ProductRepository;
