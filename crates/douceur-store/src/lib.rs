//! Durable browser-storage layer for the Douceur storefront.
//!
//! Everything the shop persists lives under a handful of namespaced keys in
//! a key-value store, `localStorage` in the browser and an in-memory map
//! everywhere else:
//!
//! - the versioned cart document (`douceur:cart`)
//! - the append-only order log (`douceur:orders`)
//! - the language preference (`douceur:lang`), with a broadcast bus so
//!   views re-render when it changes
//!
//! # Example
//!
//! ```rust,ignore
//! use douceur_store::prelude::*;
//!
//! let backend = MemoryStore::new();
//! let cart_store = CartStore::new(&backend);
//!
//! let mut cart = cart_store.load();
//! // ...mutate through the engine...
//! cart_store.save(&cart)?;
//! ```

mod cart_store;
mod error;
mod kv;
mod language;
mod order_log;

pub use cart_store::{CartDocument, CartStore, CART_SCHEMA_VERSION};
pub use error::StoreError;
pub use kv::{KeyValueStore, MemoryStore, DEFAULT_NAMESPACE};
#[cfg(target_arch = "wasm32")]
pub use kv::BrowserStore;
pub use language::{LanguageBus, LanguagePref, LanguageStore, Subscription};
pub use order_log::OrderLog;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CartDocument, CartStore, KeyValueStore, LanguageBus, LanguagePref, LanguageStore,
        MemoryStore, OrderLog, StoreError, Subscription,
    };
    #[cfg(target_arch = "wasm32")]
    pub use crate::BrowserStore;
}
