//! The immutable product catalog.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use std::collections::HashSet;

/// The shop's product list, loaded once at startup.
///
/// The catalog preserves source order (the order the query engine's
/// `Default` sort reproduces) and is never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load a catalog from a static JSON array of products.
    ///
    /// Every product is validated and its localized fields are normalized
    /// during deserialization; a single bad entry rejects the whole load.
    pub fn from_json(source: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(source)?;
        Self::from_products(products)
    }

    /// Build a catalog from already-deserialized products.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id.as_str()) {
                return Err(CommerceError::Validation(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products, in source order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct category keys, in first-appearance order. Drives the
    /// category filter menu.
    pub fn category_ids(&self) -> Vec<&CategoryId> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .filter(|p| seen.insert(p.category_id.as_str()))
            .map(|p| &p.category_id)
            .collect()
    }
}
