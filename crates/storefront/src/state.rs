//! Application state shared across handlers.

use std::sync::{Arc, Mutex, PoisonError};

use marine_harvest_core::Catalog;

use crate::cart::CartStore;
use crate::config::StorefrontConfig;
use crate::notification::{Notice, Notification, NotificationChannel};
use crate::storage::KeyValueStore;

/// Storage handle shared between the cart store and health checks.
pub type SharedStore = Arc<dyn KeyValueStore + Send + Sync>;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It owns the shopper session:
/// one cart store and one notification channel per process.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    storage: SharedStore,
    cart: Mutex<CartStore<SharedStore>>,
    notifications: NotificationChannel,
}

impl AppState {
    /// Create a new application state, restoring the cart from `storage`.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog, storage: SharedStore) -> Self {
        let cart = CartStore::open(Arc::clone(&storage));
        tracing::info!(
            lines = cart.lines().len(),
            item_count = cart.item_count(),
            "Cart restored"
        );

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                storage,
                cart: Mutex::new(cart),
                notifications: NotificationChannel::new(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the durable storage.
    #[must_use]
    pub fn storage(&self) -> &SharedStore {
        &self.inner.storage
    }

    /// Get a reference to the notification channel.
    #[must_use]
    pub fn notifications(&self) -> &NotificationChannel {
        &self.inner.notifications
    }

    /// Run `f` with exclusive access to the cart store.
    ///
    /// The lock is never held across an `.await`; cart operations are
    /// synchronous.
    pub fn with_cart<R>(&self, f: impl FnOnce(&mut CartStore<SharedStore>) -> R) -> R {
        let mut cart = self
            .inner
            .cart
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }

    /// Publish `notice` if present, returning the scheduled notification.
    pub fn publish(&self, notice: Option<Notice>) -> Option<Notification> {
        notice.map(|notice| self.inner.notifications.publish(notice))
    }
}
