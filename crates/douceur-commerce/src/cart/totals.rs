//! Derived cart totals.

use crate::cart::Cart;
use crate::checkout::ShippingPolicy;
use crate::money::Money;
use crate::weight::Weight;
use serde::{Deserialize, Serialize};

/// Complete totals breakdown for a cart, as shown in the cart drawer and on
/// the checkout summary. Computed on demand, never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Quoted shipping cost.
    pub shipping: Money,
    /// Amount due on delivery.
    pub total: Money,
    /// Sum of line quantities.
    pub weight: Weight,
}

impl CartTotals {
    /// Compute the totals for a cart under a shipping policy.
    pub fn compute(cart: &Cart, policy: &ShippingPolicy) -> Self {
        let subtotal = cart.subtotal();
        let shipping = policy.quote(subtotal);
        Self {
            subtotal,
            shipping,
            total: subtotal + shipping,
            weight: cart.total_weight(),
        }
    }

    /// Check if the order ships free.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::i18n::{LocalizedList, LocalizedText};
    use crate::ids::{CategoryId, ProductId};

    fn product(id: &str, price_centimes: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: LocalizedText::from_single(id),
            description: LocalizedText::from_single("description"),
            category: LocalizedText::from_single("category"),
            category_id: CategoryId::new("category"),
            price: Money::new(price_centimes),
            original_price: None,
            images: vec!["/images/p.jpg".to_string()],
            ingredients: LocalizedList::default(),
            is_new: false,
            is_bestseller: false,
            in_stock: true,
            rating: 4.0,
            review_count: 1,
        }
    }

    #[test]
    fn test_totals_below_threshold_pay_flat_fee() {
        let mut cart = Cart::new();
        // 100.00 MAD/kg * 0.5 kg = 50.00 MAD
        cart.add_item(&product("p1", 10_000), Some(0.5));

        let totals = CartTotals::compute(&cart, &ShippingPolicy::default());
        assert_eq!(totals.subtotal, Money::new(5_000));
        assert_eq!(totals.shipping, Money::new(5_990));
        assert_eq!(totals.total, Money::new(10_990));
        assert!(!totals.has_free_shipping());
    }

    #[test]
    fn test_totals_above_threshold_ship_free() {
        let mut cart = Cart::new();
        // 200.00 MAD/kg * 3.0 kg = 600.00 MAD
        cart.add_item(&product("p1", 20_000), Some(3.0));

        let totals = CartTotals::compute(&cart, &ShippingPolicy::default());
        assert_eq!(totals.shipping, Money::zero());
        assert_eq!(totals.total, totals.subtotal);
        assert!(totals.has_free_shipping());
    }
}
