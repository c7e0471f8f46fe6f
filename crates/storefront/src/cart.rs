//! Cart store: the shopper's cart plus its durable slot.
//!
//! [`CartStore`] owns the in-memory [`Cart`] and the storage it is mirrored
//! to. It is restored from the slot on open and written back after every
//! mutation. Operations never fail: unknown products and missing lines are
//! silent no-ops, and storage failures are logged while the in-memory
//! change stands.
//!
//! Operations return the [`Notice`] (if any) confirming the action; the
//! caller decides where to publish it.

use marine_harvest_core::{
    Cart, CartDecodeError, CartLine, Decrement, Price, ProductCollection,
};
use tracing::{debug, error, warn};

use crate::notification::Notice;
use crate::storage::KeyValueStore;

/// Storage key holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "marineHarvestCart";

/// Outcome of [`CartStore::checkout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checkout {
    /// The order was placed; the cart is now empty and the cart view closed.
    Completed {
        notice: Notice,
        item_count: u64,
        total: Price,
    },
    /// Nothing to check out. No state changed.
    EmptyCart(Notice),
}

impl Checkout {
    /// The notice to show the shopper.
    #[must_use]
    pub const fn notice(&self) -> &Notice {
        match self {
            Self::Completed { notice, .. } | Self::EmptyCart(notice) => notice,
        }
    }

    #[must_use]
    pub fn into_notice(self) -> Notice {
        match self {
            Self::Completed { notice, .. } | Self::EmptyCart(notice) => notice,
        }
    }

    /// Whether the caller should close the cart view.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// The cart plus the slot it persists to.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    cart: Cart,
    is_open: bool,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Restore the cart from `storage`.
    ///
    /// A missing key, an empty value, malformed JSON and shape violations all
    /// produce an empty cart.
    pub fn open(storage: S) -> Self {
        let cart = restore(&storage);
        Self {
            storage,
            cart,
            is_open: false,
        }
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    #[must_use]
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.cart.line(product_id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Sum of quantities.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Sum of `price * quantity`.
    #[must_use]
    pub fn total(&self) -> Price {
        self.cart.total()
    }

    /// Whether the cart view is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    pub const fn open_view(&mut self) {
        self.is_open = true;
    }

    pub const fn close_view(&mut self) {
        self.is_open = false;
    }

    pub const fn toggle_view(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Add one unit of a product from `collection`.
    ///
    /// Does nothing (and returns `None`) if the collection has no such
    /// product.
    pub fn add_item(&mut self, collection: &ProductCollection, product_id: &str) -> Option<Notice> {
        let Some(product) = collection.find(product_id) else {
            debug!(collection = %collection.handle, product_id, "Ignoring add of unknown product");
            return None;
        };

        let quantity = self.cart.add(product);
        self.persist();
        debug!(product_id, quantity = quantity.get(), "Added to cart");

        Some(Notice::success(format!("Added {} to cart", product.name)))
    }

    /// Remove the line for `product_id`.
    pub fn remove_item(&mut self, product_id: &str) -> Option<Notice> {
        self.cart.remove(product_id)?;
        self.persist();
        debug!(product_id, "Removed from cart");

        Some(Notice::info("Item removed from cart"))
    }

    /// Increase an existing line by one. Returns whether a line changed.
    pub fn increase_quantity(&mut self, product_id: &str) -> bool {
        let Some(quantity) = self.cart.increment(product_id) else {
            return false;
        };
        self.persist();
        debug!(product_id, quantity = quantity.get(), "Increased quantity");
        true
    }

    /// Decrease an existing line by one, removing it at one.
    ///
    /// Only the removal branch produces a notice.
    pub fn decrease_quantity(&mut self, product_id: &str) -> Option<Notice> {
        match self.cart.decrement(product_id) {
            Decrement::Missing => None,
            Decrement::Decremented(quantity) => {
                self.persist();
                debug!(product_id, quantity = quantity.get(), "Decreased quantity");
                None
            }
            Decrement::Removed(_) => {
                self.persist();
                debug!(product_id, "Removed from cart");
                Some(Notice::info("Item removed from cart"))
            }
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> Notice {
        self.cart.clear();
        self.persist();
        Notice::info("Cart has been cleared")
    }

    /// Place the order.
    ///
    /// An empty cart yields [`Checkout::EmptyCart`] and leaves the cart and
    /// the view flag untouched. Otherwise the cart is cleared and the view
    /// closed.
    pub fn checkout(&mut self) -> Checkout {
        if self.cart.is_empty() {
            return Checkout::EmptyCart(Notice::error("Your cart is empty!"));
        }

        let item_count = self.cart.item_count();
        let total = self.cart.total();

        self.cart.clear();
        self.persist();
        self.is_open = false;

        tracing::info!(item_count, total = %total, "Checkout completed");

        Checkout::Completed {
            notice: Notice::success("Checkout completed! Thank you for your purchase."),
            item_count,
            total,
        }
    }

    /// Write the full cart to the slot.
    fn persist(&self) {
        let payload = match self.cart.to_json() {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to serialize cart: {e}");
                return;
            }
        };

        if let Err(e) = self.storage.set(CART_STORAGE_KEY, &payload) {
            error!("Failed to save cart: {e}");
        }
    }
}

fn restore(storage: &impl KeyValueStore) -> Cart {
    let payload = match storage.get(CART_STORAGE_KEY) {
        Ok(Some(payload)) => payload,
        Ok(None) => return Cart::new(),
        Err(e) => {
            warn!("Failed to read saved cart: {e}");
            return Cart::new();
        }
    };

    match Cart::from_json(&payload) {
        Ok(cart) => {
            debug!(lines = cart.len(), "Restored saved cart");
            cart
        }
        Err(CartDecodeError::Empty) => Cart::new(),
        Err(e) => {
            warn!("Failed to parse saved cart: {e}");
            Cart::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::NotificationKind;
    use crate::storage::MemoryStore;
    use marine_harvest_core::{Catalog, CollectionHandle};

    fn marine() -> ProductCollection {
        Catalog::builtin()
            .collection(CollectionHandle::Marine)
            .clone()
    }

    fn store() -> CartStore<MemoryStore> {
        CartStore::open(MemoryStore::new())
    }

    #[test]
    fn test_add_item_repeated_calls_accumulate() {
        let marine = marine();
        let mut store = store();

        for n in 1..=5 {
            store.add_item(&marine, "salmon-premium");
            assert_eq!(store.lines().len(), 1);
            assert_eq!(
                store.line("salmon-premium").map(|l| l.quantity.get()),
                Some(n)
            );
        }
        assert_eq!(store.item_count(), 5);
    }

    #[test]
    fn test_add_item_notice_names_product() {
        let marine = marine();
        let mut store = store();

        let notice = store.add_item(&marine, "oysters-dozen").expect("notice");
        assert_eq!(notice.kind, NotificationKind::Success);
        assert_eq!(notice.message, "Added Fresh Oysters to cart");
    }

    #[test]
    fn test_add_unknown_product_is_silent_noop() {
        let marine = marine();
        let mut store = store();

        assert!(store.add_item(&marine, "fishing-net").is_none());
        assert!(store.is_empty());
        assert_eq!(store.storage.get(CART_STORAGE_KEY).expect("get"), None);
    }

    #[test]
    fn test_remove_item() {
        let marine = marine();
        let mut store = store();
        store.add_item(&marine, "lobster-live");

        let notice = store.remove_item("lobster-live").expect("notice");
        assert_eq!(notice.kind, NotificationKind::Info);
        assert!(store.is_empty());

        assert!(store.remove_item("lobster-live").is_none());
    }

    #[test]
    fn test_increase_quantity_requires_existing_line() {
        let marine = marine();
        let mut store = store();

        assert!(!store.increase_quantity("shrimp-jumbo"));
        assert!(store.is_empty());

        store.add_item(&marine, "shrimp-jumbo");
        assert!(store.increase_quantity("shrimp-jumbo"));
        assert_eq!(store.item_count(), 2);
    }

    #[test]
    fn test_decrease_quantity_branches() {
        let marine = marine();
        let mut store = store();
        store.add_item(&marine, "seabass-fresh");
        store.add_item(&marine, "seabass-fresh");

        assert!(store.decrease_quantity("seabass-fresh").is_none());
        assert_eq!(
            store.line("seabass-fresh").map(|l| l.quantity.get()),
            Some(1)
        );

        let notice = store.decrease_quantity("seabass-fresh").expect("notice");
        assert_eq!(notice.message, "Item removed from cart");
        assert!(store.line("seabass-fresh").is_none());

        assert!(store.decrease_quantity("seabass-fresh").is_none());
    }

    #[test]
    fn test_total_matches_lines_after_every_mutation() {
        let marine = marine();
        let mut store = store();

        let check = |store: &CartStore<MemoryStore>| {
            let expected: Price = store
                .lines()
                .iter()
                .map(|line| line.product.price * line.quantity.get())
                .sum();
            assert_eq!(store.total(), expected);
        };

        store.add_item(&marine, "salmon-premium");
        check(&store);
        store.add_item(&marine, "seaweed-nori");
        check(&store);
        store.increase_quantity("salmon-premium");
        check(&store);
        store.decrease_quantity("seaweed-nori");
        check(&store);
        assert_eq!(store.total(), Price::from_cents(2 * 2499));
        store.clear();
        check(&store);
        assert_eq!(store.total(), Price::ZERO);
    }

    #[test]
    fn test_checkout_empty_cart_changes_nothing() {
        let mut store = store();
        store.open_view();

        let outcome = store.checkout();
        assert!(!outcome.is_completed());
        assert_eq!(outcome.notice().kind, NotificationKind::Error);
        assert_eq!(outcome.notice().message, "Your cart is empty!");
        assert!(store.is_empty());
        assert!(store.is_open());
    }

    #[test]
    fn test_checkout_clears_and_closes() {
        let marine = marine();
        let mut store = store();
        store.add_item(&marine, "lobster-live");
        store.add_item(&marine, "lobster-live");
        store.open_view();

        match store.checkout() {
            Checkout::Completed {
                notice,
                item_count,
                total,
            } => {
                assert_eq!(notice.kind, NotificationKind::Success);
                assert_eq!(item_count, 2);
                assert_eq!(total, Price::from_cents(2 * 4599));
            }
            Checkout::EmptyCart(_) => panic!("expected completed checkout"),
        }
        assert!(store.is_empty());
        assert!(!store.is_open());
        assert_eq!(
            store.storage.get(CART_STORAGE_KEY).expect("get").as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let marine = marine();
        let mut store = store();

        store.add_item(&marine, "salmon-premium");
        let saved = store.storage.get(CART_STORAGE_KEY).expect("get").expect("slot");
        assert_eq!(Cart::from_json(&saved).expect("decode"), *store.cart());

        store.increase_quantity("salmon-premium");
        let saved = store.storage.get(CART_STORAGE_KEY).expect("get").expect("slot");
        assert_eq!(Cart::from_json(&saved).expect("decode").item_count(), 2);
    }

    #[test]
    fn test_restore_round_trip_for_various_sizes() {
        let marine = marine();
        for size in [0_usize, 1, 5] {
            let storage = MemoryStore::new();
            let expected = {
                let mut store = CartStore::open(&storage);
                for (i, product) in marine.products.iter().take(size).enumerate() {
                    for _ in 0..=i {
                        store.add_item(&marine, product.id.as_str());
                    }
                }
                store.cart().clone()
            };

            let restored = CartStore::open(&storage);
            assert_eq!(restored.cart(), &expected, "size {size}");
            assert_eq!(restored.lines().len(), size);
        }
    }

    #[test]
    fn test_restore_treats_bad_payloads_as_empty() {
        let valid_line = r#"{"product":{"id":"a","name":"A","price":1.5,"image":"","category":"Fish","description":""},"quantity":1}"#;
        let payloads = [
            String::new(),
            "   ".to_string(),
            "not json".to_string(),
            "{\"product\":null}".to_string(),
            r#"[{"product":{"id":"a","name":"A","price":1.5,"image":"","category":"Fish","description":""},"quantity":0}]"#.to_string(),
            r#"[{"product":{"id":"a","name":"A","price":-1.5,"image":"","category":"Fish","description":""},"quantity":1}]"#.to_string(),
            format!("[{valid_line},{valid_line}]"),
        ];

        for payload in payloads {
            let store = CartStore::open(MemoryStore::with_entry(CART_STORAGE_KEY, payload.clone()));
            assert!(store.is_empty(), "payload {payload:?} should restore empty");
        }
    }

    #[test]
    fn test_restore_accepts_legacy_numeric_prices() {
        let payload = r#"[{"product":{"id":"salmon-premium","name":"Premium Atlantic Salmon","price":24.99,"image":"https://images.example/salmon.jpg","category":"Fish","description":"Farmed."},"quantity":3}]"#;
        let store = CartStore::open(MemoryStore::with_entry(CART_STORAGE_KEY, payload));

        assert_eq!(store.item_count(), 3);
        assert_eq!(store.total(), Price::from_cents(3 * 2499));
    }

    #[test]
    fn test_restore_rejects_price_that_would_overflow_total() {
        let payload = r#"[{"product":{"id":"a","name":"A","price":70000000000000000000000000000,"image":"","category":"Fish","description":""},"quantity":2}]"#;
        let store = CartStore::open(MemoryStore::with_entry(CART_STORAGE_KEY, payload));

        assert!(store.is_empty());
        assert_eq!(store.total(), Price::ZERO);
    }

    #[test]
    fn test_view_flag() {
        let mut store = store();
        assert!(!store.is_open());
        store.toggle_view();
        assert!(store.is_open());
        store.close_view();
        assert!(!store.is_open());
    }
}
