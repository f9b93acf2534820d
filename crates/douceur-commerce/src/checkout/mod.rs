//! Checkout module.
//!
//! Contains the shipping address, shipping policy, order types, and the
//! cash-on-delivery order placement flow.

mod address;
mod flow;
mod order;
mod shipping;

pub use address::{AddressField, ShippingAddress};
pub use flow::{place_order, CheckoutError, OrderSink};
pub use order::{Order, OrderStatus};
pub use shipping::ShippingPolicy;
