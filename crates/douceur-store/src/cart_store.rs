//! Versioned cart persistence.

use crate::kv::{KeyValueStore, DEFAULT_NAMESPACE};
use crate::StoreError;
use douceur_commerce::cart::{Cart, LineItem};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Schema version of the persisted cart document.
pub const CART_SCHEMA_VERSION: u32 = 1;

/// The cart as it sits in durable storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartDocument {
    /// Schema version; documents with any other version are discarded.
    pub version: u32,
    /// The cart lines.
    pub items: Vec<LineItem>,
    /// Drawer visibility at save time. Ignored on load.
    pub is_open: bool,
}

/// Reads and writes the cart document under the namespaced cart key.
///
/// Loading is deliberately forgiving: a missing, unreadable, or
/// version-mismatched document yields an empty cart rather than an error,
/// because a broken cart must never take the storefront down. Writes are
/// last-write-wins across tabs.
pub struct CartStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a cart store under the default namespace.
    pub fn new(store: S) -> Self {
        Self::with_namespace(store, DEFAULT_NAMESPACE)
    }

    /// Create a cart store under an explicit namespace.
    pub fn with_namespace(store: S, namespace: &str) -> Self {
        Self {
            key: crate::store_key!(namespace, "cart"),
            store,
        }
    }

    /// Load the persisted cart, or an empty one.
    ///
    /// The drawer always starts closed after a reload.
    pub fn load(&self) -> Cart {
        let raw = match self.store.get_raw(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(err) => {
                warn!(%err, "cart load failed; starting empty");
                return Cart::new();
            }
        };

        match serde_json::from_str::<CartDocument>(&raw) {
            Ok(doc) if doc.version == CART_SCHEMA_VERSION => Cart::from_parts(doc.items, false),
            Ok(doc) => {
                warn!(
                    version = doc.version,
                    "discarding cart document with unknown schema version"
                );
                Cart::new()
            }
            Err(err) => {
                warn!(%err, "discarding unreadable cart document");
                Cart::new()
            }
        }
    }

    /// Persist the cart.
    pub fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        let doc = CartDocument {
            version: CART_SCHEMA_VERSION,
            items: cart.items().to_vec(),
            is_open: cart.is_open(),
        };
        self.store.set_json(&self.key, &doc)
    }

    /// Remove the persisted document entirely.
    pub fn wipe(&self) -> Result<(), StoreError> {
        self.store.remove(&self.key)
    }
}
