//! # Commands
//!
//! One handler per menu operation. Each handler prompts for what it needs,
//! makes exactly one repository call (two for the update, which checks the
//! id first), prints the outcome and returns to the menu.
//!
//! - [`product`] - Register, list, update, delete, low-stock, search

pub mod product;
