//! # Menu Loop
//!
//! The session's only state: show the menu, read a choice, run the
//! operation to completion, repeat.
//!
//! ```text
//!            ┌──────────── "1".."6" ─────────────┐
//!            │                                   ▼
//!   ┌────────┴───────┐                  ┌─────────────────┐
//!   │      MENU      │◄─────────────────│   operation     │
//!   └────────┬───────┘                  └─────────────────┘
//!            │   anything else: "Invalid option", stay
//!            │
//!            └── "7" / end of input ──► done
//! ```

use std::io::{BufRead, Write};

use stockroom_core::MenuChoice;
use stockroom_db::Database;
use tracing::{debug, info};

use crate::commands::product;
use crate::console::Console;
use crate::error::{CliError, CliResult};

/// Printed when the operator picks Exit.
pub const FAREWELL: &str = "Thank you for using the inventory system. Goodbye!";

/// Printed for input that is not a menu key.
pub const INVALID_OPTION: &str = "Invalid option. Please try again.";

/// Runs the menu until Exit or end of input.
pub async fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> CliResult<()> {
    match menu_loop(console, db).await {
        Err(CliError::InputClosed) => {
            info!("Input closed, ending session");
            Ok(())
        }
        result => result,
    }
}

async fn menu_loop<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> CliResult<()> {
    loop {
        show_menu(console)?;

        let answer = console.prompt_choice("Select an option: ")?;
        let Some(choice) = MenuChoice::parse(&answer) else {
            debug!(input = %answer, "Invalid menu input");
            console.error(INVALID_OPTION)?;
            continue;
        };

        debug!(?choice, "Menu selection");

        match choice {
            MenuChoice::Register => product::register(console, db).await?,
            MenuChoice::List => product::list(console, db).await?,
            MenuChoice::UpdateQuantity => product::update_quantity(console, db).await?,
            MenuChoice::Delete => product::delete(console, db).await?,
            MenuChoice::LowStockReport => product::low_stock_report(console, db).await?,
            MenuChoice::Search => product::search(console, db).await?,
            MenuChoice::Exit => {
                console.success(FAREWELL)?;
                return Ok(());
            }
        }
    }
}

fn show_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CliResult<()> {
    console.title("MAIN MENU")?;
    for choice in MenuChoice::ALL {
        console.info(&format!("{}. {}", choice.key(), choice.label()))?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::format_row;
    use std::io::Cursor;
    use stockroom_core::{NewProduct, Product};
    use stockroom_db::DbConfig;
    use tempfile::TempDir;

    async fn test_db() -> (TempDir, Database) {
        let dir = TempDir::new().unwrap();
        let db = Database::open(DbConfig::new(dir.path().join("inventory.db")))
            .await
            .unwrap();
        (dir, db)
    }

    async fn run_script(db: &Database, script: &str) -> String {
        run_bytes(db, script.as_bytes().to_vec()).await
    }

    async fn run_bytes(db: &Database, script: Vec<u8>) -> String {
        colored::control::set_override(false);
        let mut console = Console::new(Cursor::new(script), Vec::<u8>::new());
        run_menu(&mut console, db).await.unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    fn new_product(name: &str, quantity: i64, category: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: None,
            quantity,
            price: 2.0,
            category: Some(category.to_string()),
        }
    }

    async fn insert(db: &Database, product: NewProduct) -> Product {
        let id = db.products().create(&product).await.unwrap();
        product.with_id(id)
    }

    #[tokio::test]
    async fn test_register_then_list() {
        let (_dir, db) = test_db().await;

        let out = run_script(&db, "1\nWidget\nA widget\n5\n9.99\nHardware\n2\n7\n").await;

        let expected = Product {
            id: 1,
            name: "Widget".to_string(),
            description: Some("A widget".to_string()),
            quantity: 5,
            price: 9.99,
            category: Some("Hardware".to_string()),
        };
        assert_eq!(db.products().list_all().await.unwrap(), vec![expected.clone()]);

        assert!(out.contains("--- REGISTER PRODUCT ---"));
        assert!(out.contains("Product registered successfully (ID 1)."));
        assert!(out.contains("--- PRODUCT LIST ---"));
        assert!(out.contains(&format_row(&expected)));
        assert!(out.ends_with(&format!("{FAREWELL}\n")));
    }

    #[tokio::test]
    async fn test_register_reprompts_bad_input() {
        let (_dir, db) = test_db().await;

        let out = run_script(&db, "1\n\nWidget\n\nlots\n-3\n4\nfree\n0.5\n\n7\n").await;

        assert!(out.contains("name is required."));
        assert_eq!(
            out.matches("Please enter a valid whole number for quantity.").count(),
            2
        );
        assert!(out.contains("Please enter a valid number (e.g. 10.5) for price."));

        let products = db.products().list_all().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Widget");
        assert_eq!(products[0].description, None);
        assert_eq!(products[0].quantity, 4);
        assert_eq!(products[0].price, 0.5);
        assert_eq!(products[0].category, None);
    }

    #[tokio::test]
    async fn test_register_reprompts_invalid_utf8_quantity() {
        let (_dir, db) = test_db().await;

        let mut script = b"1\nWidget\n\n".to_vec();
        script.extend_from_slice(&[0xff, 0xfe, b'\n']);
        script.extend_from_slice(b"5\n1.0\n\n7\n");
        let out = run_bytes(&db, script).await;

        assert!(out.contains("Please enter a valid whole number for quantity."));
        assert!(out.contains("Product registered successfully (ID 1)."));
        assert!(out.ends_with(&format!("{FAREWELL}\n")));

        let products = db.products().list_all().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].quantity, 5);
        assert_eq!(products[0].price, 1.0);
    }

    #[tokio::test]
    async fn test_invalid_menu_option_redisplays_menu() {
        let (_dir, db) = test_db().await;

        let out = run_script(&db, "9\n 1\n7\n").await;

        assert_eq!(out.matches(INVALID_OPTION).count(), 2);
        assert_eq!(out.matches("--- MAIN MENU ---").count(), 3);
        assert!(out.contains("7. Exit"));
    }

    #[tokio::test]
    async fn test_list_empty() {
        let (_dir, db) = test_db().await;

        let out = run_script(&db, "2\n7\n").await;

        assert!(out.contains("No products registered. Please register a product first."));
        assert!(!out.contains("Description"));
    }

    #[tokio::test]
    async fn test_update_existing_product() {
        let (_dir, db) = test_db().await;
        let widget = insert(&db, new_product("Widget", 5, "Hardware")).await;

        let out = run_script(&db, &format!("3\n{}\n0\n7\n", widget.id)).await;

        assert!(out.contains("Quantity updated successfully."));
        let stored = db.products().get_by_id(widget.id).await.unwrap().unwrap();
        assert_eq!(stored, Product { quantity: 0, ..widget });
    }

    #[tokio::test]
    async fn test_update_missing_product_skips_quantity_prompt() {
        let (_dir, db) = test_db().await;
        let widget = insert(&db, new_product("Widget", 5, "Hardware")).await;

        let out = run_script(&db, "3\n42\n7\n").await;

        assert!(out.contains(product::NOT_FOUND_MESSAGE));
        assert!(!out.contains("New quantity: "));
        assert_eq!(db.products().list_all().await.unwrap(), vec![widget]);
    }

    #[tokio::test]
    async fn test_update_reprompts_non_numeric_id() {
        let (_dir, db) = test_db().await;
        insert(&db, new_product("Widget", 5, "Hardware")).await;

        let out = run_script(&db, "3\nabc\n1\n8\n7\n").await;

        assert!(out.contains("Please enter a valid whole number for product id."));
        let stored = db.products().get_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.quantity, 8);
    }

    #[tokio::test]
    async fn test_delete_existing_and_missing() {
        let (_dir, db) = test_db().await;
        let keep = insert(&db, new_product("Keep", 1, "A")).await;
        let gone = insert(&db, new_product("Gone", 1, "A")).await;

        let out = run_script(&db, &format!("4\n{}\n4\n{}\n7\n", gone.id, gone.id)).await;

        assert_eq!(out.matches("Product deleted successfully.").count(), 1);
        assert_eq!(out.matches(product::NOT_FOUND_MESSAGE).count(), 1);
        assert_eq!(db.products().list_all().await.unwrap(), vec![keep]);
    }

    #[tokio::test]
    async fn test_low_stock_report() {
        let (_dir, db) = test_db().await;
        let low = insert(&db, new_product("Low", 2, "A")).await;
        let high = insert(&db, new_product("High", 50, "A")).await;

        let out = run_script(&db, "5\n2\n5\n1\n7\n").await;

        assert!(out.contains("Low-stock products:"));
        assert!(out.contains(&format_row(&low)));
        assert!(!out.contains(&format_row(&high)));
        assert!(out.contains("No low-stock products."));
    }

    #[tokio::test]
    async fn test_search_by_each_field() {
        let (_dir, db) = test_db().await;
        let hammer = insert(&db, new_product("Claw Hammer", 3, "Hand Tools")).await;
        let drill = insert(&db, new_product("Drill", 3, "Power Tools")).await;

        let out = run_script(&db, "6\n2\nHammer\n7\n").await;
        assert!(out.contains(&format_row(&hammer)));
        assert!(!out.contains(&format_row(&drill)));

        let out = run_script(&db, "6\n3\nTools\n7\n").await;
        assert!(out.contains(&format_row(&hammer)));
        assert!(out.contains(&format_row(&drill)));

        let out = run_script(&db, &format!("6\n1\n{}\n7\n", drill.id)).await;
        assert!(!out.contains(&format_row(&hammer)));
        assert!(out.contains(&format_row(&drill)));

        let out = run_script(&db, "6\n2\nSaw\n7\n").await;
        assert!(out.contains("No products found matching that criterion."));
    }

    #[tokio::test]
    async fn test_search_invalid_option_returns_to_menu() {
        let (_dir, db) = test_db().await;

        let out = run_script(&db, "6\n4\n7\n").await;

        assert!(out.contains("Invalid option.\n"));
        assert!(!out.contains(INVALID_OPTION));
        assert_eq!(out.matches("--- MAIN MENU ---").count(), 2);
    }

    #[tokio::test]
    async fn test_end_of_input_ends_session() {
        let (_dir, db) = test_db().await;

        let out = run_script(&db, "1\nWidget\n").await;

        assert!(!out.contains(FAREWELL));
        assert!(db.products().list_all().await.unwrap().is_empty());
    }
}
