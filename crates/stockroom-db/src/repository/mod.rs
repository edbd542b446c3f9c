//! # Repository Module
//!
//! Database repository implementations for Stockroom.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Menu handler                                                          │
//! │       │                                                                 │
//! │       │  db.products().find_by_stock_threshold(10)                     │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── create / list_all / get_by_id                                     │
//! │  ├── update_quantity / delete                                          │
//! │  └── find_by_stock_threshold / search                                  │
//! │       │                                                                 │
//! │       │  one connection, one statement                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD, low-stock and search

pub mod product;
