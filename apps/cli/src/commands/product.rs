//! # Product Commands
//!
//! Menu operations over the `products` table.
//!
//! ## Update Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "3. Update product quantity"                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ID? ──(not a number)──► re-prompt                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  get_by_id ──(None)──► "Product not found." ──► menu                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  New quantity? ──(not a number)──► re-prompt                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  update_quantity ──► "Quantity updated successfully." ──► menu         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use stockroom_core::validation::{
    optional_text, parse_price, parse_product_id, parse_quantity, parse_threshold,
    validate_product_name,
};
use stockroom_core::{NewProduct, ProductSearch, SearchField};
use stockroom_db::{Database, DbError};
use tracing::{debug, info};

use crate::console::Console;
use crate::display::{print_table, RowStyle};
use crate::error::CliResult;

/// Printed when an update or delete targets an id that does not exist.
pub const NOT_FOUND_MESSAGE: &str = "Product not found.";

/// Maps a reported "not found" to `Ok(false)`; every other error propagates.
fn found(result: Result<(), DbError>) -> CliResult<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(err) if err.is_not_found() => {
            debug!(%err, "Reported not found");
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}

/// Registers a new product.
pub async fn register<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> CliResult<()> {
    console.title("REGISTER PRODUCT")?;

    let name = console.prompt_parsed("Name: ", validate_product_name)?;
    let description = optional_text(&console.prompt("Description: ")?);
    let quantity = console.prompt_parsed("Quantity: ", parse_quantity)?;
    let price = console.prompt_parsed("Price: ", parse_price)?;
    let category = optional_text(&console.prompt("Category: ")?);

    let product = NewProduct {
        name,
        description,
        quantity,
        price,
        category,
    };

    let id = db.products().create(&product).await?;
    info!(id, name = %product.name, "Product registered");

    console.success(&format!("Product registered successfully (ID {id})."))
}

/// Lists every product.
pub async fn list<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> CliResult<()> {
    console.title("PRODUCT LIST")?;

    let products = db.products().list_all().await?;
    if products.is_empty() {
        return console.error("No products registered. Please register a product first.");
    }

    print_table(console, &products, RowStyle::Normal)
}

/// Overwrites the quantity of one product.
pub async fn update_quantity<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> CliResult<()> {
    console.title("UPDATE PRODUCT")?;

    let id = console.prompt_parsed("ID of the product to update: ", parse_product_id)?;
    if db.products().get_by_id(id).await?.is_none() {
        return console.error(NOT_FOUND_MESSAGE);
    }

    let quantity = console.prompt_parsed("New quantity: ", parse_quantity)?;

    if found(db.products().update_quantity(id, quantity).await)? {
        info!(id, quantity, "Quantity updated");
        console.success("Quantity updated successfully.")
    } else {
        console.error(NOT_FOUND_MESSAGE)
    }
}

/// Deletes one product by id.
pub async fn delete<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> CliResult<()> {
    console.title("DELETE PRODUCT")?;

    let id = console.prompt_parsed("ID of the product to delete: ", parse_product_id)?;

    if found(db.products().delete(id).await)? {
        info!(id, "Product deleted");
        console.success("Product deleted successfully.")
    } else {
        console.error(NOT_FOUND_MESSAGE)
    }
}

/// Lists products at or below an operator-supplied stock limit.
pub async fn low_stock_report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> CliResult<()> {
    console.title("LOW-STOCK REPORT")?;

    let limit = console.prompt_parsed("Enter the stock limit: ", parse_threshold)?;
    let products = db.products().find_by_stock_threshold(limit).await?;

    if products.is_empty() {
        return console.success("No low-stock products.");
    }

    console.error("Low-stock products:")?;
    print_table(console, &products, RowStyle::Alert)
}

/// Searches by id, name or category.
pub async fn search<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> CliResult<()> {
    console.title("SEARCH PRODUCT")?;

    for field in SearchField::ALL {
        console.info(&format!("{}. {}", field.key(), field.label()))?;
    }

    let answer = console.prompt_choice("Select an option: ")?;
    let Some(field) = SearchField::parse(&answer) else {
        return console.error("Invalid option.");
    };

    let request = match field {
        SearchField::Id => {
            ProductSearch::ById(console.prompt_parsed("Product ID: ", parse_product_id)?)
        }
        SearchField::Name => ProductSearch::ByName(console.prompt("Name (or part of the name): ")?),
        SearchField::Category => ProductSearch::ByCategory(
            console.prompt("Category (or part of the category): ")?,
        ),
    };

    let products = db.products().search(&request).await?;
    if products.is_empty() {
        return console.error("No products found matching that criterion.");
    }

    print_table(console, &products, RowStyle::Normal)
}
