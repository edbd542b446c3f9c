//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   MenuChoice    │   │ ProductSearch   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  Register       │   │  ById(i64)      │       │
//! │  │  name           │   │  List ... Exit  │   │  ByName(term)   │       │
//! │  │  quantity       │   │  ("1".."7")     │   │  ByCategory(..) │       │
//! │  │  price (f64)    │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is assigned by SQLite on insert and never changes. There is no
//! business key: two products may share a name.

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A single inventory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Storage-assigned identifier.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Optional free-text description.
    pub description: Option<String>,

    /// Units in stock. Not bounded below.
    pub quantity: i64,

    /// Unit price.
    pub price: f64,

    /// Optional free-form category label.
    pub category: Option<String>,
}

/// Insert payload for a product that has no id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub price: f64,
    pub category: Option<String>,
}

impl NewProduct {
    /// Attaches the id storage assigned on insert.
    pub fn with_id(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            quantity: self.quantity,
            price: self.price,
            category: self.category,
        }
    }
}

// =============================================================================
// Search
// =============================================================================

/// Which field a search targets. Chosen from the search sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Id,
    Name,
    Category,
}

impl SearchField {
    /// Sub-menu order.
    pub const ALL: [SearchField; 3] = [SearchField::Id, SearchField::Name, SearchField::Category];

    /// Parses a sub-menu selection. Matching is exact: `" 1"` is not `"1"`.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(SearchField::Id),
            "2" => Some(SearchField::Name),
            "3" => Some(SearchField::Category),
            _ => None,
        }
    }

    /// Sub-menu key.
    pub fn key(&self) -> &'static str {
        match self {
            SearchField::Id => "1",
            SearchField::Name => "2",
            SearchField::Category => "3",
        }
    }

    /// Sub-menu label.
    pub fn label(&self) -> &'static str {
        match self {
            SearchField::Id => "Search by ID",
            SearchField::Name => "Search by Name",
            SearchField::Category => "Search by Category",
        }
    }
}

/// A complete search request.
///
/// `ById` matches exactly. `ByName` and `ByCategory` match any record whose
/// field contains the term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductSearch {
    ById(i64),
    ByName(String),
    ByCategory(String),
}

// =============================================================================
// Menu
// =============================================================================

/// Main menu transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuChoice {
    Register,
    List,
    UpdateQuantity,
    Delete,
    LowStockReport,
    Search,
    Exit,
}

impl MenuChoice {
    /// Menu order.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Register,
        MenuChoice::List,
        MenuChoice::UpdateQuantity,
        MenuChoice::Delete,
        MenuChoice::LowStockReport,
        MenuChoice::Search,
        MenuChoice::Exit,
    ];

    /// Parses a menu selection by exact match on `"1"`..`"7"`.
    pub fn parse(input: &str) -> Option<Self> {
        MenuChoice::ALL
            .iter()
            .copied()
            .find(|choice| choice.key() == input)
    }

    /// Menu key.
    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::Register => "1",
            MenuChoice::List => "2",
            MenuChoice::UpdateQuantity => "3",
            MenuChoice::Delete => "4",
            MenuChoice::LowStockReport => "5",
            MenuChoice::Search => "6",
            MenuChoice::Exit => "7",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Register => "Register product",
            MenuChoice::List => "List products",
            MenuChoice::UpdateQuantity => "Update product quantity",
            MenuChoice::Delete => "Delete product by ID",
            MenuChoice::LowStockReport => "Low-stock report",
            MenuChoice::Search => "Search products",
            MenuChoice::Exit => "Exit",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> NewProduct {
        NewProduct {
            name: "Widget".to_string(),
            description: Some("A widget".to_string()),
            quantity: 5,
            price: 9.99,
            category: Some("Hardware".to_string()),
        }
    }

    #[test]
    fn test_menu_choice_exact_match() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Register));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::Search));
        assert_eq!(MenuChoice::parse("7"), Some(MenuChoice::Exit));

        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse(" 1"), None);
        assert_eq!(MenuChoice::parse("01"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_menu_keys_are_sequential() {
        for (idx, choice) in MenuChoice::ALL.iter().enumerate() {
            assert_eq!(choice.key(), (idx + 1).to_string());
        }
    }

    #[test]
    fn test_search_field_parse() {
        assert_eq!(SearchField::parse("1"), Some(SearchField::Id));
        assert_eq!(SearchField::parse("2"), Some(SearchField::Name));
        assert_eq!(SearchField::parse("3"), Some(SearchField::Category));
        assert_eq!(SearchField::parse("4"), None);
        assert_eq!(SearchField::parse("name"), None);
    }

    #[test]
    fn test_with_id_keeps_fields() {
        let product = widget().with_id(1);
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.description.as_deref(), Some("A widget"));
        assert_eq!(product.quantity, 5);
        assert_eq!(product.category.as_deref(), Some("Hardware"));
    }
}
