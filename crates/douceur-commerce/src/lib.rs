//! Storefront domain types and logic for the Douceur patisserie.
//!
//! This crate holds the pieces of the shop that have actual behavior:
//!
//! - **Catalog**: trilingual products (priced per kilogram) loaded once from
//!   a static source
//! - **Cart**: the shopping cart engine with kilogram quantities, add-time
//!   snapshots, and derived totals
//! - **Query**: pure filtering, sorting, and pagination over the catalog
//! - **Blog**: posts and their listing query
//! - **Checkout**: address validation, shipping quote, and cash-on-delivery
//!   order placement
//!
//! # Example
//!
//! ```rust,ignore
//! use douceur_commerce::prelude::*;
//!
//! let catalog = Catalog::from_json(include_str!("../data/products.json"))?;
//! let mut cart = Cart::new();
//!
//! let kaab = catalog.products().first().unwrap();
//! cart.add_item(kaab, Some(0.5));
//!
//! println!("{} articles, {}", cart.item_count(), cart.subtotal());
//! ```

pub mod blog;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod i18n;
pub mod ids;
pub mod money;
pub mod query;
pub mod weight;

pub use error::CommerceError;
pub use i18n::{Language, LocalizedList, LocalizedText};
pub use ids::*;
pub use money::Money;
pub use weight::Weight;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::i18n::{Language, LocalizedList, LocalizedText};
    pub use crate::ids::*;
    pub use crate::money::Money;
    pub use crate::weight::Weight;

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Cart
    pub use crate::cart::{Cart, CartTotals, LineItem, DEFAULT_ADD_WEIGHT, MAX_LINE_WEIGHT};

    // Query
    pub use crate::query::{CatalogQuery, CategoryFilter, Pagination, QueryResults, SortKey};

    // Blog
    pub use crate::blog::{Post, PostQuery};

    // Checkout
    pub use crate::checkout::{
        AddressField, CheckoutError, Order, OrderSink, OrderStatus, ShippingAddress,
        ShippingPolicy, place_order,
    };
}
