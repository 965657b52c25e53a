//! # Cart Store
//!
//! The shared, observable holder of the live cart.
//!
//! ## Thread Safety
//! The cart sits behind a `Mutex` because:
//! 1. Multiple callers may mutate the cart concurrently
//! 2. Only one mutation may run at a time
//! 3. Readers take short-lived locks and leave with detached values
//!
//! Share the store itself via `Arc<CartStore>`; every method takes `&self`.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Store Operations                              │
//! │                                                                         │
//! │  Frontend Action          Store Method            Cart State Change     │
//! │  ───────────────          ────────────            ─────────────────     │
//! │                                                                         │
//! │  Click "Add to cart" ───► add_item() ───────────► new entry or +1 unit  │
//! │                                                                         │
//! │  Click "+" ─────────────► increase_item() ──────► quantity + 1          │
//! │                                                                         │
//! │  Click "-" ─────────────► decrease_item() ──────► quantity - 1          │
//! │                                                                         │
//! │  Click trash icon ──────► remove_item() ────────► entry removed         │
//! │                                                                         │
//! │  View cart ─────────────► snapshot() ───────────► (read only)           │
//! │                                                                         │
//! │  Cart badge, totals ────► subscribe() ──────────► (push on commit)      │
//! │                                                                         │
//! │  NOTE: every committed mutation publishes the new cart on the watch     │
//! │        channel. Failed mutations publish nothing.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Change Notification
//! The watch channel holds the latest committed cart value. Subscribers
//! that fall behind see the newest value, not a queue of intermediate
//! ones. That matches what cart UI wants: render the current cart, skip
//! states nobody will ever see.

use std::sync::{Mutex, MutexGuard};

use tokio::sync::watch;
use tracing::debug;

use trolley_core::{Cart, CartResult, CartTotals, LineItem};

use crate::config::StoreConfig;
use crate::snapshot::CartSnapshot;

// =============================================================================
// Cart Store
// =============================================================================

/// Thread-safe cart state holder with change subscriptions.
///
/// ## Why Not RwLock?
/// Cart operations are quick, and most operations modify state.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug)]
pub struct CartStore {
    cart: Mutex<Cart>,
    config: StoreConfig,
    changes: watch::Sender<Cart>,
}

impl CartStore {
    /// Creates an empty store with default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates an empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        let cart = Cart::new();
        let (changes, _) = watch::channel(cart.clone());
        CartStore {
            cart: Mutex::new(cart),
            config,
            changes,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================
    // Each mutation locks, applies the cart operation, and publishes the
    // committed value. An error leaves the cart and the channel untouched.

    /// Adds a candidate item to the cart.
    ///
    /// ## Behavior
    /// - Id already present: one more unit of the existing entry; the
    ///   candidate's fields are ignored
    /// - Id is new: candidate is validated and appended
    pub fn add_item(&self, candidate: LineItem) -> CartResult<()> {
        debug!(id = %candidate.id, quantity = %candidate.quantity, "add_item");

        let mut cart = self.lock();
        cart.add_item(candidate)?;
        self.publish(&cart);
        Ok(())
    }

    /// Increases the quantity of an existing entry by one.
    pub fn increase_item(&self, id: &str) -> CartResult<()> {
        debug!(id = %id, "increase_item");

        let mut cart = self.lock();
        cart.increase_item(id)?;
        self.publish(&cart);
        Ok(())
    }

    /// Decreases the quantity of an existing entry by one.
    /// Reaching zero removes the entry.
    pub fn decrease_item(&self, id: &str) -> CartResult<()> {
        debug!(id = %id, "decrease_item");

        let mut cart = self.lock();
        cart.decrease_item(id)?;
        self.publish(&cart);
        Ok(())
    }

    /// Removes an entry regardless of quantity.
    ///
    /// Returns the removed entry so callers can log it or offer undo.
    pub fn remove_item(&self, id: &str) -> CartResult<LineItem> {
        debug!(id = %id, "remove_item");

        let mut cart = self.lock();
        let removed = cart.remove_item(id)?;
        self.publish(&cart);
        Ok(removed)
    }

    /// Clears all items from the cart.
    pub fn clear(&self) {
        debug!("clear");

        let mut cart = self.lock();
        cart.clear();
        self.publish(&cart);
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Builds a detached snapshot of the current cart for rendering.
    pub fn snapshot(&self) -> CartSnapshot {
        let cart = self.lock();
        CartSnapshot::new(&cart, &self.config)
    }

    /// Current aggregate numbers.
    pub fn totals(&self) -> CartTotals {
        self.with_cart(|cart| CartTotals::from(cart))
    }

    /// Subscribes to committed cart values.
    ///
    /// The receiver starts with the current value already marked as seen;
    /// `changed()` resolves on the next commit.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let mut rx = store.subscribe();
    /// while rx.changed().await.is_ok() {
    ///     render(&rx.borrow_and_update());
    /// }
    /// ```
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.changes.subscribe()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = store.with_cart(|cart| cart.count());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }

    /// The store's display configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().expect("Cart mutex poisoned")
    }

    /// Publishes the committed cart while the lock is still held, so
    /// subscribers observe values in commit order.
    fn publish(&self, cart: &Cart) {
        self.changes.send_replace(cart.clone());
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use trolley_core::{CartError, Money};

    fn line_item(id: &str, price_cents: i64) -> LineItem {
        LineItem::new(
            id,
            format!("Item {}", id),
            format!("/images/{}.png", id),
            Money::from_cents(price_cents),
            1,
        )
    }

    fn init_tracing() {
        use tracing_subscriber::EnvFilter;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    #[test]
    fn test_store_starts_empty() {
        let store = CartStore::new();
        let snapshot = store.snapshot();

        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.totals.count, 0);
        assert_eq!(snapshot.totals.total_cents, 0);
        assert_eq!(snapshot.display_total, "$0.00");
    }

    #[test]
    fn test_add_item_updates_snapshot() {
        let store = CartStore::new();

        store.add_item(line_item("1", 2999)).unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.totals.count, 1);
        assert_eq!(snapshot.display_total, "$29.99");
    }

    #[test]
    fn test_duplicate_add_merges_entries() {
        let store = CartStore::new();

        store.add_item(line_item("1", 2999)).unwrap();
        store.add_item(line_item("1", 2999)).unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].quantity, 2);
        assert_eq!(snapshot.totals.total_cents, 5998);
    }

    #[test]
    fn test_remove_item_returns_entry() {
        let store = CartStore::new();
        store.add_item(line_item("1", 500)).unwrap();

        let removed = store.remove_item("1").unwrap();

        assert_eq!(removed.id, "1");
        assert!(store.snapshot().items.is_empty());
    }

    #[test]
    fn test_totals_match_with_cart_reads() {
        let store = CartStore::new();
        store.add_item(line_item("1", 500)).unwrap();
        store.increase_item("1").unwrap();

        let totals = store.totals();
        assert_eq!(totals.count, store.with_cart(|cart| cart.count()));
        assert_eq!(
            totals.total_cents,
            store.with_cart(|cart| cart.total().cents())
        );
    }

    #[test]
    fn test_snapshot_is_detached_from_store() {
        let store = CartStore::new();
        store.add_item(line_item("1", 500)).unwrap();

        let snapshot = store.snapshot();
        store.clear();

        assert_eq!(snapshot.totals.count, 1);
        assert!(store.snapshot().items.is_empty());
    }

    #[test]
    fn test_independent_stores_do_not_interfere() {
        let left = CartStore::new();
        let right = CartStore::new();

        left.add_item(line_item("1", 500)).unwrap();

        assert_eq!(left.totals().count, 1);
        assert_eq!(right.totals().count, 0);
    }

    #[test]
    fn test_subscriber_sees_current_value_immediately() {
        let store = CartStore::new();
        store.add_item(line_item("1", 500)).unwrap();

        let rx = store.subscribe();

        assert_eq!(rx.borrow().count(), 1);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_mutations_notify_subscribers() {
        let store = CartStore::new();
        let mut rx = store.subscribe();

        store.add_item(line_item("1", 500)).unwrap();

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().count(), 1);
        assert!(!rx.has_changed().unwrap());

        store.clear();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_empty());
    }

    #[test]
    fn test_slow_subscriber_sees_latest_value_only() {
        let store = CartStore::new();
        let mut rx = store.subscribe();

        // Three commits with nobody reading in between
        store.add_item(line_item("a", 100)).unwrap();
        store.add_item(line_item("b", 200)).unwrap();
        store.add_item(line_item("c", 300)).unwrap();

        // The subscriber lands on the newest cart, not a queue of three
        let cart = rx.borrow_and_update().clone();
        assert_eq!(cart.len(), 3);
        assert_eq!(cart.total().cents(), 600);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_failed_mutation_emits_nothing() {
        let store = CartStore::new();
        store.add_item(line_item("1", 500)).unwrap();

        let mut rx = store.subscribe();
        rx.borrow_and_update();

        let err = store.increase_item("ghost").unwrap_err();
        assert!(matches!(err, CartError::ItemNotFound { .. }));
        assert!(!rx.has_changed().unwrap());

        let err = store.add_item(line_item("", 100)).unwrap_err();
        assert!(matches!(err, CartError::Validation(_)));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_store_is_shareable_across_threads() {
        let store = Arc::new(CartStore::new());

        let handles: Vec<_> = (0..2)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..10 {
                        store
                            .add_item(line_item(&format!("t{}-{}", t, i), 100))
                            .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let totals = store.totals();
        assert_eq!(totals.distinct_items, 20);
        assert_eq!(totals.count, 20);
        assert_eq!(totals.total_cents, 2000);
    }

    #[tokio::test]
    async fn test_subscriber_wakes_on_commit() {
        init_tracing();
        let store = CartStore::new();
        let mut rx = store.subscribe();

        store.add_item(line_item("1", 500)).unwrap();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().count(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_subscriber_wakes_across_threads() {
        init_tracing();
        let store = Arc::new(CartStore::new());
        let mut rx = store.subscribe();

        let writer = {
            let store = Arc::clone(&store);
            tokio::task::spawn_blocking(move || {
                store.add_item(line_item("cross-thread", 500)).unwrap();
            })
        };

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().count(), 1);

        writer.await.unwrap();
    }
}
