//! Language preference persistence and change broadcast.
//!
//! The preference is a bare language code under the namespaced key. Views
//! subscribe to the bus and re-render in the new language when it changes;
//! cart and query state are untouched, since language is display-only.

use crate::kv::{KeyValueStore, DEFAULT_NAMESPACE};
use crate::StoreError;
use douceur_commerce::Language;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};
use tracing::warn;

/// Reads and writes the persisted language preference.
pub struct LanguageStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> LanguageStore<S> {
    /// Create a language store under the default namespace.
    pub fn new(store: S) -> Self {
        Self::with_namespace(store, DEFAULT_NAMESPACE)
    }

    /// Create a language store under an explicit namespace.
    pub fn with_namespace(store: S, namespace: &str) -> Self {
        Self {
            key: crate::store_key!(namespace, "lang"),
            store,
        }
    }

    /// Load the preference, defaulting when missing or unreadable.
    pub fn load(&self) -> Language {
        match self.store.get_raw(&self.key) {
            Ok(Some(code)) => Language::from_code(&code).unwrap_or_else(|| {
                warn!(code = %code, "unknown language code in storage; using default");
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(err) => {
                warn!(%err, "language load failed; using default");
                Language::default()
            }
        }
    }

    /// Persist the preference.
    pub fn save(&self, lang: Language) -> Result<(), StoreError> {
        self.store.set_raw(&self.key, lang.code())
    }
}

type Listener = Box<dyn Fn(Language) + Send>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    listeners: HashMap<u64, Listener>,
}

/// Broadcast bus for language changes.
///
/// Subscribers hold a [`Subscription`] guard; dropping it unsubscribes, so
/// a view that unmounts cannot leak its listener. Callbacks must not
/// subscribe or announce from inside a callback.
#[derive(Clone, Default)]
pub struct LanguageBus {
    inner: Arc<Mutex<BusInner>>,
}

impl LanguageBus {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for language changes.
    pub fn subscribe(&self, listener: impl Fn(Language) + Send + 'static) -> Subscription {
        let id = match self.inner.lock() {
            Ok(mut inner) => {
                let id = inner.next_id;
                inner.next_id += 1;
                inner.listeners.insert(id, Box::new(listener));
                id
            }
            Err(_) => {
                warn!("language bus lock poisoned; subscription is inert");
                u64::MAX
            }
        };

        Subscription {
            id,
            bus: Arc::downgrade(&self.inner),
        }
    }

    /// Notify every live subscriber.
    pub fn announce(&self, lang: Language) {
        if let Ok(inner) = self.inner.lock() {
            for listener in inner.listeners.values() {
                listener(lang);
            }
        }
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().map(|inner| inner.listeners.len()).unwrap_or(0)
    }
}

/// Guard tying a bus subscription to a view's lifetime.
pub struct Subscription {
    id: u64,
    bus: Weak<Mutex<BusInner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            if let Ok(mut inner) = inner.lock() {
                inner.listeners.remove(&self.id);
            }
        }
    }
}

/// The language preference as the storefront consumes it: persisted value
/// plus change broadcast.
pub struct LanguagePref<S> {
    store: LanguageStore<S>,
    bus: LanguageBus,
}

impl<S: KeyValueStore> LanguagePref<S> {
    /// Create a preference over a storage backend.
    pub fn new(store: S) -> Self {
        Self {
            store: LanguageStore::new(store),
            bus: LanguageBus::new(),
        }
    }

    /// The current language.
    pub fn current(&self) -> Language {
        self.store.load()
    }

    /// Persist a new language, then broadcast the change.
    pub fn set(&self, lang: Language) -> Result<(), StoreError> {
        self.store.save(lang)?;
        self.bus.announce(lang);
        Ok(())
    }

    /// The change bus, for subscriptions.
    pub fn bus(&self) -> &LanguageBus {
        &self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_missing_preference_defaults_to_french() {
        let backend = MemoryStore::new();
        let store = LanguageStore::new(&backend);
        assert_eq!(store.load(), Language::Fr);
    }

    #[test]
    fn test_save_and_load() {
        let backend = MemoryStore::new();
        let store = LanguageStore::new(&backend);

        store.save(Language::Ar).unwrap();
        assert_eq!(store.load(), Language::Ar);
        assert_eq!(
            backend.get_raw("douceur:lang").unwrap().as_deref(),
            Some("ar")
        );
    }

    #[test]
    fn test_unknown_code_falls_back_to_default() {
        let backend = MemoryStore::new();
        backend.set_raw("douceur:lang", "eo").unwrap();

        let store = LanguageStore::new(&backend);
        assert_eq!(store.load(), Language::Fr);
    }

    #[test]
    fn test_bus_announces_to_subscribers() {
        let bus = LanguageBus::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let seen_a = Arc::clone(&seen);
        let _sub_a = bus.subscribe(move |lang| {
            assert_eq!(lang, Language::En);
            seen_a.fetch_add(1, Ordering::SeqCst);
        });
        let seen_b = Arc::clone(&seen);
        let _sub_b = bus.subscribe(move |_| {
            seen_b.fetch_add(1, Ordering::SeqCst);
        });

        bus.announce(Language::En);
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let bus = LanguageBus::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let seen_inner = Arc::clone(&seen);
        let sub = bus.subscribe(move |_| {
            seen_inner.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(bus.subscriber_count(), 1);

        drop(sub);
        assert_eq!(bus.subscriber_count(), 0);

        bus.announce(Language::Ar);
        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_pref_persists_then_broadcasts() {
        let backend = MemoryStore::new();
        let pref = LanguagePref::new(&backend);

        let seen = Arc::new(AtomicUsize::new(0));
        let seen_inner = Arc::clone(&seen);
        let _sub = pref.bus().subscribe(move |lang| {
            assert_eq!(lang, Language::En);
            seen_inner.fetch_add(1, Ordering::SeqCst);
        });

        pref.set(Language::En).unwrap();

        assert_eq!(pref.current(), Language::En);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
