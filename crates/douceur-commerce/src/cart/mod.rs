//! Shopping cart module.
//!
//! Contains the cart engine, its line items, and derived totals.

mod cart;
mod totals;

pub use cart::{Cart, LineItem, DEFAULT_ADD_WEIGHT, MAX_LINE_WEIGHT};
pub use totals::CartTotals;
