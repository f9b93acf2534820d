//! Cart engine and line item types.

use crate::catalog::Product;
use crate::i18n::LocalizedText;
use crate::ids::{LineItemId, ProductId};
use crate::money::Money;
use crate::weight::Weight;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Maximum weight allowed on a single cart line.
pub const MAX_LINE_WEIGHT: Weight = Weight::from_grams(10_000);

/// Weight added when the caller does not supply a usable quantity.
pub const DEFAULT_ADD_WEIGHT: Weight = Weight::from_grams(500);

/// One entry in the cart, uniquely tied to one product.
///
/// Display fields are snapshots taken at add time: the line keeps showing
/// the name, category, price, and image the customer saw, even if the
/// catalog product later changes or disappears.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Engine-generated line identifier, distinct from the product id.
    pub id: LineItemId,
    /// Weak back-reference to the product that created this line.
    pub product_id: ProductId,
    /// Product name snapshotted at add time.
    pub name: LocalizedText,
    /// Category display name snapshotted at add time.
    pub category: LocalizedText,
    /// Unit price (per kilogram) snapshotted at add time.
    pub unit_price: Money,
    /// Quantity in kilograms, in (0, 10.0].
    pub quantity: Weight,
    /// Image reference snapshotted at add time.
    pub image: String,
}

impl LineItem {
    fn snapshot(product: &Product, quantity: Weight) -> Self {
        Self {
            id: LineItemId::generate(),
            product_id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            unit_price: product.price,
            quantity,
            image: product.primary_image().unwrap_or_default().to_string(),
        }
    }

    /// Price of this line: unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.times_weight(self.quantity)
    }
}

/// The shopping cart engine.
///
/// Sole owner of cart state: all mutations go through it, and it maintains
/// two invariants: at most one line per product, and every line quantity
/// in (0, 10.0] kg rounded to a tenth of a kilogram.
///
/// Invalid input never surfaces as an error; the operation logs a
/// diagnostic and leaves the cart untouched. Callers are expected to
/// pre-validate where it matters for UX.
///
/// Persistence is a collaborator's concern: own the engine where the UI is
/// composed, and write it through a cart store after each mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
    is_open: bool,
}

impl Cart {
    /// Create an empty, closed cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a cart from persisted parts.
    pub fn from_parts(items: Vec<LineItem>, is_open: bool) -> Self {
        Self { items, is_open }
    }

    /// Add a product to the cart.
    ///
    /// A missing, non-positive, or sub-0.05 kg quantity falls back to
    /// [`DEFAULT_ADD_WEIGHT`]; anything else is rounded to a tenth of a
    /// kilogram. If the product already has a line, the quantities merge;
    /// either way the line is clamped to [`MAX_LINE_WEIGHT`].
    ///
    /// Returns the affected line's id, or `None` when the product was
    /// rejected (non-positive price).
    pub fn add_item(&mut self, product: &Product, quantity_kg: Option<f64>) -> Option<LineItemId> {
        if !product.price.is_positive() {
            warn!(product_id = %product.id, "ignoring add_item: non-positive unit price");
            return None;
        }

        let quantity = match quantity_kg {
            Some(kg) if kg > 0.0 => {
                let rounded = Weight::from_kg(kg);
                if rounded.is_positive() {
                    rounded
                } else {
                    DEFAULT_ADD_WEIGHT
                }
            }
            _ => DEFAULT_ADD_WEIGHT,
        };

        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            existing.quantity = existing
                .quantity
                .saturating_add(quantity)
                .min(MAX_LINE_WEIGHT);
            return Some(existing.id.clone());
        }

        let item = LineItem::snapshot(product, quantity.min(MAX_LINE_WEIGHT));
        let id = item.id.clone();
        self.items.push(item);
        Some(id)
    }

    /// Remove a line from the cart. No-op when the id is absent.
    pub fn remove_item(&mut self, id: &LineItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Replace a line's quantity.
    ///
    /// A quantity of zero or less (including one that rounds to zero) is
    /// equivalent to [`Cart::remove_item`]; anything else is rounded to a
    /// tenth of a kilogram and clamped to [`MAX_LINE_WEIGHT`]. No-op when
    /// the id is absent.
    pub fn update_quantity(&mut self, id: &LineItemId, quantity_kg: f64) -> bool {
        let rounded = Weight::from_kg(quantity_kg);
        if quantity_kg <= 0.0 || !rounded.is_positive() {
            return self.remove_item(id);
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.id == id) {
            item.quantity = rounded.min(MAX_LINE_WEIGHT);
            true
        } else {
            false
        }
    }

    /// Empty the cart. Idempotent.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Show the cart drawer. Display state only, no business side effects.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Hide the cart drawer.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Whether the cart drawer is shown.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Number of distinct lines, NOT the summed quantity. A single 3 kg
    /// line counts as 1.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The lines, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get a line by id.
    pub fn get_item(&self, id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Get the line holding a product, if any.
    pub fn find_line(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Sum of line totals. Always recomputed, never stored.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, i| acc + i.line_total())
    }

    /// Sum of line quantities.
    pub fn total_weight(&self) -> Weight {
        Weight::sum(self.items.iter().map(|i| &i.quantity))
    }
}
