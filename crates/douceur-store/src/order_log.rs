//! Append-only order log.

use crate::kv::{KeyValueStore, DEFAULT_NAMESPACE};
use crate::StoreError;
use douceur_commerce::checkout::{Order, OrderSink};
use douceur_commerce::CommerceError;

/// The durable log of placed orders.
///
/// Stored as a JSON array under the namespaced orders key. New orders are
/// appended; existing entries are never rewritten by this codebase.
pub struct OrderLog<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> OrderLog<S> {
    /// Create an order log under the default namespace.
    pub fn new(store: S) -> Self {
        Self::with_namespace(store, DEFAULT_NAMESPACE)
    }

    /// Create an order log under an explicit namespace.
    pub fn with_namespace(store: S, namespace: &str) -> Self {
        Self {
            key: crate::store_key!(namespace, "orders"),
            store,
        }
    }

    /// All recorded orders, oldest first.
    pub fn all(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.store.get_json(&self.key)?.unwrap_or_default())
    }

    /// The most recently recorded order.
    pub fn last(&self) -> Result<Option<Order>, StoreError> {
        Ok(self.all()?.pop())
    }

    /// Number of recorded orders.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.all()?.len())
    }

    /// Check if no orders have been recorded.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.all()?.is_empty())
    }

    /// Append an order to the log.
    pub fn append(&self, order: &Order) -> Result<(), StoreError> {
        let mut orders = self.all()?;
        orders.push(order.clone());
        self.store.set_json(&self.key, &orders)
    }
}

impl<S: KeyValueStore> OrderSink for OrderLog<S> {
    fn record(&self, order: &Order) -> Result<(), CommerceError> {
        self.append(order)
            .map_err(|err| CommerceError::Storage(err.to_string()))
    }
}
