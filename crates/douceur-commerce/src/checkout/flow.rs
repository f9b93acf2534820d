//! Cash-on-delivery order placement.

use crate::cart::Cart;
use crate::checkout::{AddressField, Order, OrderStatus, ShippingAddress, ShippingPolicy};
use crate::error::CommerceError;
use crate::ids::OrderId;
use thiserror::Error;

/// Durable order-log collaborator.
///
/// `record` must only return `Ok` once the order is durably stored; the
/// placement flow will not clear the cart before that.
pub trait OrderSink {
    fn record(&self, order: &Order) -> Result<(), CommerceError>;
}

/// Errors that can occur while placing an order.
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// The cart has no lines.
    #[error("cannot place an order for an empty cart")]
    EmptyCart,

    /// One or more address fields failed validation.
    #[error("invalid shipping address field(s): {}",
        .fields.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", "))]
    InvalidAddress { fields: Vec<AddressField> },

    /// The order log refused the order. The cart is left untouched.
    #[error("order could not be recorded")]
    RecordFailed(#[from] CommerceError),
}

/// Place a cash-on-delivery order from the cart.
///
/// Validates the address, prices the order under the shipping policy, hands
/// it to the order sink, and clears the cart, in that order. If the sink
/// fails, the cart keeps its lines so the customer can retry.
pub fn place_order(
    cart: &mut Cart,
    address: &ShippingAddress,
    policy: &ShippingPolicy,
    sink: &dyn OrderSink,
) -> Result<Order, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let fields = address.invalid_fields();
    if !fields.is_empty() {
        return Err(CheckoutError::InvalidAddress { fields });
    }

    let subtotal = cart.subtotal();
    let shipping = policy.quote(subtotal);
    let order = Order {
        id: OrderId::generate(),
        items: cart.items().to_vec(),
        shipping_address: address.clone(),
        subtotal,
        shipping,
        total: subtotal + shipping,
        status: OrderStatus::Pending,
        created_at: current_timestamp(),
    };

    sink.record(&order)?;
    cart.clear();

    Ok(order)
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
