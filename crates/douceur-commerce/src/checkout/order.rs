//! Order types.

use crate::cart::LineItem;
use crate::checkout::ShippingAddress;
use crate::ids::OrderId;
use crate::money::Money;
use crate::weight::Weight;
use serde::{Deserialize, Serialize};

/// Order status.
///
/// Orders are created `Pending`; every later transition happens outside
/// this codebase (the shop confirms by phone and updates by hand).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order placed, awaiting confirmation.
    #[default]
    Pending,
    /// Order confirmed by the shop.
    Confirmed,
    /// Order being prepared.
    Preparing,
    /// Order out for delivery.
    Shipped,
    /// Order delivered.
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

/// A placed cash-on-delivery order.
///
/// Built once at submission time from a copy of the cart, then appended to
/// the order log and never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Cart lines at submission time.
    pub items: Vec<LineItem>,
    /// Where to deliver.
    pub shipping_address: ShippingAddress,
    /// Sum of line totals at submission time.
    pub subtotal: Money,
    /// Quoted shipping cost.
    pub shipping: Money,
    /// Amount due on delivery.
    pub total: Money,
    /// Current status.
    pub status: OrderStatus,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Order {
    /// Number of distinct lines in the order.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total ordered weight.
    pub fn total_weight(&self) -> Weight {
        Weight::sum(self.items.iter().map(|i| &i.quantity))
    }
}
