//! Catalog query module.
//!
//! Contains the pure filtering/sorting/pagination engine run against the
//! in-memory product list.

mod query;
mod results;

pub use query::{CatalogQuery, CategoryFilter, SortKey};
pub use results::{Pagination, QueryResults};
