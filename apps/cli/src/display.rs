//! # Display
//!
//! Fixed-width product tables.
//!
//! ```text
//! ID    | Name                 | Description                    | Quantity   | Price      | Category
//! ----------------------------------------------------------------------------------------------------
//! 1     | Widget               | A widget                       | 5          | $9.99      | Hardware
//! ```
//!
//! Each cell is cut or padded to its column width by characters, so long
//! names never push the columns out of line.

use std::io::{BufRead, Write};

use stockroom_core::{Product, CURRENCY_SYMBOL};

use crate::console::Console;
use crate::error::CliResult;

/// Column widths: ID, Name, Description, Quantity, Price, Category.
pub const COLUMN_WIDTHS: [usize; 6] = [5, 20, 30, 10, 10, 15];

/// Column titles.
pub const COLUMN_TITLES: [&str; 6] = ["ID", "Name", "Description", "Quantity", "Price", "Category"];

/// Width of the rule under the header.
pub const RULE_WIDTH: usize = 100;

const SEPARATOR: &str = " | ";

/// How table rows are coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    /// Listings and search results.
    Normal,
    /// Low-stock report.
    Alert,
}

/// Cuts or pads `text` to exactly `width` characters.
pub fn fit(text: &str, width: usize) -> String {
    let mut cell: String = text.chars().take(width).collect();
    let len = cell.chars().count();
    cell.extend(std::iter::repeat(' ').take(width - len));
    cell
}

/// Renders a price with the currency prefix and two decimals.
pub fn format_price(price: f64) -> String {
    format!("{CURRENCY_SYMBOL}{price:.2}")
}

fn join_cells(cells: [String; 6]) -> String {
    cells
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(cell, width)| fit(cell, width))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Formats the header row.
pub fn format_header() -> String {
    join_cells(COLUMN_TITLES.map(str::to_string))
}

/// Formats one product row.
pub fn format_row(product: &Product) -> String {
    join_cells([
        product.id.to_string(),
        product.name.clone(),
        product.description.clone().unwrap_or_default(),
        product.quantity.to_string(),
        format_price(product.price),
        product.category.clone().unwrap_or_default(),
    ])
}

/// Prints header, rule and one row per product.
///
/// The header is always yellow; rows are yellow or, for [`RowStyle::Alert`],
/// red.
pub fn print_table<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    products: &[Product],
    style: RowStyle,
) -> CliResult<()> {
    console.info(&format_header())?;
    console.info(&"-".repeat(RULE_WIDTH))?;

    for product in products {
        let row = format_row(product);
        match style {
            RowStyle::Normal => console.info(&row)?,
            RowStyle::Alert => console.error(&row)?,
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
