//! Product type.

use crate::error::CommerceError;
use crate::i18n::{LocalizedList, LocalizedText};
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A pastry in the catalog.
///
/// Products are read-only: loaded once from a static source and never
/// mutated by the cart or query engines. Prices are per kilogram.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name in all shop languages.
    pub name: LocalizedText,
    /// Full description in all shop languages.
    pub description: LocalizedText,
    /// Display name of the category in all shop languages.
    pub category: LocalizedText,
    /// Stable category key used for filtering.
    pub category_id: CategoryId,
    /// Price per kilogram.
    pub price: Money,
    /// Pre-discount price per kilogram, strictly greater than `price`.
    #[serde(default)]
    pub original_price: Option<Money>,
    /// Ordered image references; never empty.
    pub images: Vec<String>,
    /// Ingredient lists per language.
    #[serde(default)]
    pub ingredients: LocalizedList,
    /// Newly added to the catalog.
    #[serde(default)]
    pub is_new: bool,
    /// Marked as a bestseller. Independent of `is_new`.
    #[serde(default)]
    pub is_bestseller: bool,
    /// Availability flag.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Average rating in [0, 5].
    #[serde(default)]
    pub rating: f64,
    /// Number of reviews behind the rating.
    #[serde(default)]
    pub review_count: u32,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Check if the product is displayed with a discount.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original > self.price)
            .unwrap_or(false)
    }

    /// Calculate the discount percentage if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|original| {
            if original > self.price {
                let savings = original.centimes() - self.price.centimes();
                Some((savings as f64 / original.centimes() as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// First image reference, used as the card/cart thumbnail.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Validate the ingestion-time invariants.
    pub(crate) fn validate(&self) -> Result<(), CommerceError> {
        if self.id.as_str().is_empty() {
            return Err(CommerceError::Validation("product id is empty".into()));
        }
        if !self.name.is_complete() {
            return Err(CommerceError::Validation(format!(
                "product {} has an incomplete name",
                self.id
            )));
        }
        if !self.price.is_positive() {
            return Err(CommerceError::Validation(format!(
                "product {} has a non-positive price",
                self.id
            )));
        }
        if let Some(original) = self.original_price {
            if original <= self.price {
                return Err(CommerceError::Validation(format!(
                    "product {} has an original price not above its price",
                    self.id
                )));
            }
        }
        if self.images.is_empty() {
            return Err(CommerceError::Validation(format!(
                "product {} has no images",
                self.id
            )));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(CommerceError::Validation(format!(
                "product {} has a rating outside [0, 5]",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: LocalizedText::new("Gazelle horns", "Cornes de gazelle", "كعب الغزال"),
            description: LocalizedText::from_single("Almond crescents"),
            category: LocalizedText::new("Traditional", "Traditionnel", "تقليدي"),
            category_id: CategoryId::new("traditional"),
            price: Money::new(12_000),
            original_price: None,
            images: vec!["/images/kaab.jpg".to_string()],
            ingredients: LocalizedList::from_single(vec!["almonds".into(), "honey".into()]),
            is_new: false,
            is_bestseller: true,
            in_stock: true,
            rating: 4.8,
            review_count: 124,
        }
    }

    #[test]
    fn test_on_sale() {
        let mut product = sample_product("p1");
        assert!(!product.is_on_sale());

        product.original_price = Some(Money::new(product.price.centimes() + 2000));
        assert!(product.is_on_sale());
        assert!(product.discount_percentage().unwrap() > 0.0);
    }

    #[test]
    fn test_validate_rejects_empty_images() {
        let mut product = sample_product("p1");
        product.images.clear();
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_original_price() {
        let mut product = sample_product("p1");
        product.original_price = Some(product.price);
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_rating() {
        let mut product = sample_product("p1");
        product.rating = 5.5;
        assert!(product.validate().is_err());
    }
}
