//! Cartview
//!
//! Cartview is the model behind a shopping cart view: line items, quantity
//! intents, a single-writer store and the arithmetic for subtotals and totals.

pub mod fixtures;
pub mod intents;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod state;
pub mod store;
pub mod view;
