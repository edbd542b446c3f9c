//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Register, list, delete
//! - Quantity overwrite
//! - Low-stock filter and field search
//!
//! ## Substring Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Name/Category Search Works                       │
//! │                                                                         │
//! │  Operator types: "50%"                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  like_pattern() escapes LIKE wildcards:  %50\%%                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  WHERE name LIKE ?1 ESCAPE '\'                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "Discount 50% off" ← MATCH     "Discount 500g" ← no match             │
//! │                                                                         │
//! │  LIKE keeps SQLite's default: ASCII letters compare case-insensitively │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::Connection;
use tracing::debug;

use crate::database::Database;
use crate::error::{DbError, DbResult};
use stockroom_core::{NewProduct, Product, ProductSearch};

const SELECT_PRODUCTS: &str = "SELECT id, name, description, quantity, price, category FROM products";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(db);
///
/// let id = repo.create(&new_product).await?;
/// let low = repo.find_by_stock_threshold(10).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: Database,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(db: Database) -> Self {
        ProductRepository { db }
    }

    /// Inserts a new product.
    ///
    /// No duplicate check: two products may share every field but `id`.
    ///
    /// ## Returns
    /// * `Ok(id)` - The id SQLite assigned
    pub async fn create(&self, product: &NewProduct) -> DbResult<i64> {
        debug!(name = %product.name, "Inserting product");

        let mut conn = self.db.connect().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, quantity, price, category)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.quantity)
        .bind(product.price)
        .bind(&product.category)
        .execute(&mut conn)
        .await?;

        conn.close().await?;

        let id = result.last_insert_rowid();
        debug!(id, "Product inserted");
        Ok(id)
    }

    /// Lists every product in id order.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let mut conn = self.db.connect().await?;

        let products = sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCTS} ORDER BY id"))
            .fetch_all(&mut conn)
            .await?;

        conn.close().await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let mut conn = self.db.connect().await?;

        let product = sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCTS} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&mut conn)
            .await?;

        conn.close().await?;

        Ok(product)
    }

    /// Overwrites the stock quantity of a product.
    ///
    /// No bounds check: zero and negative quantities are stored as given.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn update_quantity(&self, id: i64, quantity: i64) -> DbResult<()> {
        debug!(id, quantity, "Updating quantity");

        let mut conn = self.db.connect().await?;

        let result = sqlx::query("UPDATE products SET quantity = ?2 WHERE id = ?1")
            .bind(id)
            .bind(quantity)
            .execute(&mut conn)
            .await?;

        conn.close().await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Deletes a product.
    ///
    /// ## Returns
    /// * `Ok(())` - Exactly one row removed
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let mut conn = self.db.connect().await?;

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&mut conn)
            .await?;

        conn.close().await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Returns products with `quantity <= limit`, in id order.
    pub async fn find_by_stock_threshold(&self, limit: i64) -> DbResult<Vec<Product>> {
        debug!(limit, "Finding low-stock products");

        let mut conn = self.db.connect().await?;

        let products = sqlx::query_as::<_, Product>(&format!(
            "{SELECT_PRODUCTS} WHERE quantity <= ?1 ORDER BY id"
        ))
        .bind(limit)
        .fetch_all(&mut conn)
        .await?;

        conn.close().await?;

        debug!(count = products.len(), "Low-stock query returned products");
        Ok(products)
    }

    /// Searches products by id, name or category.
    ///
    /// ## Arguments
    /// * `search` - `ById` matches exactly; `ByName`/`ByCategory` match any
    ///   record whose field contains the term
    pub async fn search(&self, search: &ProductSearch) -> DbResult<Vec<Product>> {
        debug!(?search, "Searching products");

        let mut conn = self.db.connect().await?;

        let products = match search {
            ProductSearch::ById(id) => {
                sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCTS} WHERE id = ?1"))
                    .bind(*id)
                    .fetch_all(&mut conn)
                    .await?
            }
            ProductSearch::ByName(term) => {
                sqlx::query_as::<_, Product>(&format!(
                    r"{SELECT_PRODUCTS} WHERE name LIKE ?1 ESCAPE '\' ORDER BY id"
                ))
                .bind(like_pattern(term))
                .fetch_all(&mut conn)
                .await?
            }
            ProductSearch::ByCategory(term) => {
                sqlx::query_as::<_, Product>(&format!(
                    r"{SELECT_PRODUCTS} WHERE category LIKE ?1 ESCAPE '\' ORDER BY id"
                ))
                .bind(like_pattern(term))
                .fetch_all(&mut conn)
                .await?
            }
        };

        conn.close().await?;

        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    /// Counts stored products.
    pub async fn count(&self) -> DbResult<i64> {
        let mut conn = self.db.connect().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&mut conn)
            .await?;

        conn.close().await?;

        Ok(count)
    }
}

/// Builds a `LIKE` pattern that matches `term` anywhere, literally.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// =============================================================================
// Unit Tests
// =============================================================================
