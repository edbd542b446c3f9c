//! # Schema
//!
//! The single `products` table.
//!
//! There are no migrations and no schema version: the table is created with
//! `IF NOT EXISTS` on every startup. Column order and types match files
//! written by earlier versions of the tool, so an existing `inventory.db`
//! opens as-is.

use sqlx::SqliteConnection;
use tracing::{debug, info};

use crate::error::DbResult;

/// DDL for the `products` table.
pub const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT,
        quantity INTEGER NOT NULL,
        price REAL NOT NULL,
        category TEXT
    )
"#;

/// Creates the `products` table if it is missing.
///
/// Idempotent; safe to call on every startup.
pub async fn ensure_schema(conn: &mut SqliteConnection) -> DbResult<()> {
    debug!("Ensuring products table exists");

    sqlx::query(CREATE_PRODUCTS_TABLE).execute(&mut *conn).await?;

    info!("Schema ready");
    Ok(())
}

/// Checks whether a table with the given name exists.
pub async fn table_exists(conn: &mut SqliteConnection, table: &str) -> DbResult<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")
            .bind(table)
            .fetch_one(&mut *conn)
            .await?;

    Ok(count > 0)
}
