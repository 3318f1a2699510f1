//! Shopping Cart Store
//!
//! This module manages cart state: the line sequence, its derived
//! totals, persistence after every mutation, and the snapshot channel
//! consumers subscribe to.

use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::watch;

use super::models::{CartLine, CartSnapshot, PersistedCart};
use crate::catalog::{Catalog, Product};
use crate::storage::StorageAdapter;

/// Shared handle to a cart store.
pub type SharedCartStore = Arc<CartStore>;

/// The cart state container.
///
/// The store is total over its documented inputs: no mutator returns
/// an error. Out-of-range quantities are resolved by the clamping and
/// removal policies described on each operation, and persistence
/// failures are absorbed by the storage adapter. Callers gate
/// out-of-stock products themselves; the store does not reject them.
pub struct CartStore {
    /// Cart lines in insertion order
    lines: RwLock<Vec<CartLine>>,

    /// Persistence boundary, written after every mutation
    storage: Box<dyn StorageAdapter>,

    /// Broadcasts a fresh snapshot after every mutation
    snapshot_tx: watch::Sender<CartSnapshot>,
}

impl CartStore {
    /// Creates an empty store over the given storage adapter.
    pub fn new(storage: Box<dyn StorageAdapter>) -> Self {
        let (snapshot_tx, _) = watch::channel(CartSnapshot::default());
        Self {
            lines: RwLock::new(Vec::new()),
            storage,
            snapshot_tx,
        }
    }

    /// Creates a store restored from the adapter's persisted state.
    ///
    /// Product details are re-resolved against the catalog; persisted
    /// pairs whose product no longer exists (or whose quantity is zero)
    /// are dropped silently.
    pub fn restore(catalog: &Catalog, storage: Box<dyn StorageAdapter>) -> Self {
        let lines: Vec<CartLine> = storage
            .load()
            .unwrap_or_default()
            .lines
            .into_iter()
            .filter(|pair| pair.quantity >= 1)
            .filter_map(|pair| {
                let product = catalog.product_by_id(pair.product_id)?;
                Some(CartLine {
                    product: product.clone(),
                    quantity: pair.quantity,
                })
            })
            .collect();

        tracing::debug!(lines = lines.len(), "cart restored from storage");

        let (snapshot_tx, _) = watch::channel(CartSnapshot::of(&lines));
        Self {
            lines: RwLock::new(lines),
            storage,
            snapshot_tx,
        }
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Adds `quantity` units of `product` to the cart.
    ///
    /// If a line for the product already exists its quantity is
    /// increased; otherwise a new line is appended. Quantities below 1
    /// are clamped to 1. Always succeeds.
    pub fn add_to_cart(&self, product: &Product, quantity: u32) {
        let quantity = quantity.max(1);

        let snapshot = {
            let mut lines = self.write_lines();
            if let Some(line) = lines.iter_mut().find(|l| l.product.id == product.id) {
                line.quantity += quantity;
            } else {
                lines.push(CartLine {
                    product: product.clone(),
                    quantity,
                });
            }
            CartSnapshot::of(&lines)
        };

        tracing::debug!(product_id = product.id, quantity, "added to cart");
        self.commit(snapshot);
    }

    /// Removes the line for `product_id`. No-op when absent.
    pub fn remove_from_cart(&self, product_id: u32) {
        let snapshot = {
            let mut lines = self.write_lines();
            lines.retain(|l| l.product.id != product_id);
            CartSnapshot::of(&lines)
        };

        tracing::debug!(product_id, "removed from cart");
        self.commit(snapshot);
    }

    /// Sets the quantity of the line for `product_id` to exactly
    /// `quantity`.
    ///
    /// A quantity of zero or less removes the line. No-op when the id
    /// has no line. Calling this twice with the same quantity leaves
    /// state unchanged after the first call.
    pub fn update_quantity(&self, product_id: u32, quantity: i32) {
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }

        let snapshot = {
            let mut lines = self.write_lines();
            match lines.iter_mut().find(|l| l.product.id == product_id) {
                Some(line) => line.quantity = quantity as u32,
                None => return,
            }
            CartSnapshot::of(&lines)
        };

        tracing::debug!(product_id, quantity, "quantity updated");
        self.commit(snapshot);
    }

    /// Empties the cart unconditionally. Idempotent.
    pub fn clear(&self) {
        let snapshot = {
            let mut lines = self.write_lines();
            lines.clear();
            CartSnapshot::of(&lines)
        };

        tracing::debug!("cart cleared");
        self.commit(snapshot);
    }

    // =========================================================================
    // Derived Reads
    // =========================================================================

    /// Returns the cart lines in insertion order, as owned copies.
    pub fn items(&self) -> Vec<CartLine> {
        self.read_lines().clone()
    }

    /// Sum of all line quantities.
    pub fn count(&self) -> u32 {
        self.read_lines().iter().map(|l| l.quantity).sum()
    }

    /// Sum of all line totals, discounts applied.
    pub fn total(&self) -> f64 {
        self.read_lines().iter().map(CartLine::line_total).sum()
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.read_lines().is_empty()
    }

    /// Returns a read-only snapshot of the current state.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::of(&self.read_lines())
    }

    /// Subscribes to snapshot updates. The receiver observes the state
    /// as of the last completed mutation, never a stale one.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.snapshot_tx.subscribe()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Persists and publishes a freshly computed snapshot.
    fn commit(&self, snapshot: CartSnapshot) {
        self.storage.save(&PersistedCart::from_lines(&snapshot.lines));
        self.snapshot_tx.send_replace(snapshot);
    }

    fn read_lines(&self) -> std::sync::RwLockReadGuard<'_, Vec<CartLine>> {
        // A poisoned lock still guards structurally valid cart data.
        self.lines.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lines(&self) -> std::sync::RwLockWriteGuard<'_, Vec<CartLine>> {
        self.lines.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> CartStore {
        CartStore::new(Box::new(MemoryStorage::new()))
    }

    fn product(id: u32, price: f64, discount: Option<u8>) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            description: String::new(),
            price,
            image: String::new(),
            category: "Test".into(),
            rating: 0.0,
            reviews: 0,
            in_stock: true,
            discount,
            featured: false,
        }
    }

    #[test]
    fn repeated_adds_merge_into_one_line() {
        let store = store();
        let p = product(1, 10.0, None);

        store.add_to_cart(&p, 2);
        store.add_to_cart(&p, 3);

        let items = store.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 5);
    }

    #[test]
    fn count_is_the_sum_of_quantities() {
        let store = store();
        store.add_to_cart(&product(1, 10.0, None), 2);
        store.add_to_cart(&product(2, 20.0, None), 3);

        assert_eq!(store.count(), 5);
    }

    #[test]
    fn total_applies_discounts_per_line() {
        let store = store();
        store.add_to_cart(&product(1, 100.0, Some(15)), 2);
        store.add_to_cart(&product(2, 50.0, None), 1);

        // 85 * 2 + 50
        assert!((store.total() - 220.0).abs() < 1e-9);
    }

    #[test]
    fn zero_quantity_add_is_clamped_to_one() {
        let store = store();
        store.add_to_cart(&product(1, 10.0, None), 0);

        assert_eq!(store.count(), 1);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let store = store();
        store.add_to_cart(&product(3, 1.0, None), 1);
        store.add_to_cart(&product(1, 1.0, None), 1);
        store.add_to_cart(&product(2, 1.0, None), 1);

        let ids: Vec<u32> = store.items().iter().map(|l| l.product.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn update_quantity_sets_exactly_and_is_idempotent() {
        let store = store();
        store.add_to_cart(&product(1, 10.0, None), 5);

        store.update_quantity(1, 2);
        assert_eq!(store.count(), 2);

        store.update_quantity(1, 2);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn zero_or_negative_update_removes_the_line() {
        let store = store();
        store.add_to_cart(&product(1, 10.0, None), 2);
        store.update_quantity(1, 0);
        assert!(store.is_empty());

        store.add_to_cart(&product(1, 10.0, None), 2);
        store.update_quantity(1, -1);
        assert!(store.is_empty());
    }

    #[test]
    fn updates_and_removals_of_unknown_ids_are_no_ops() {
        let store = store();
        store.add_to_cart(&product(1, 10.0, None), 1);

        store.update_quantity(42, 7);
        store.remove_from_cart(42);

        assert_eq!(store.count(), 1);
    }

    #[test]
    fn clear_is_idempotent() {
        let store = store();
        store.add_to_cart(&product(1, 10.0, None), 3);

        store.clear();
        assert!(store.items().is_empty());

        store.clear();
        assert!(store.items().is_empty());
    }

    #[test]
    fn subscribers_observe_the_latest_mutation() {
        let store = store();
        let rx = store.subscribe();

        store.add_to_cart(&product(1, 10.0, None), 2);

        let snapshot = rx.borrow();
        assert_eq!(snapshot.count, 2);
        assert!((snapshot.total - 20.0).abs() < 1e-9);
    }

    #[test]
    fn every_mutation_persists_the_pairs() {
        let storage = Arc::new(MemoryStorage::new());
        let store = CartStore::new(Box::new(Arc::clone(&storage)));
        let p = product(1, 10.0, None);

        store.add_to_cart(&p, 2);
        let persisted = storage.load().unwrap();
        assert_eq!(persisted.lines[0].product_id, 1);
        assert_eq!(persisted.lines[0].quantity, 2);

        store.remove_from_cart(1);
        assert!(storage.load().unwrap().lines.is_empty());
    }

    #[test]
    fn restore_resolves_products_and_drops_unknown_ids() {
        use crate::cart::models::PersistedLine;

        let storage = MemoryStorage::new();
        storage.save(&PersistedCart {
            lines: vec![
                PersistedLine { product_id: 1, quantity: 2 },
                PersistedLine { product_id: 999, quantity: 4 },
            ],
        });

        let catalog = Catalog::with_demo_products();
        let store = CartStore::restore(&catalog, Box::new(storage));

        let items = store.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product.name, "Wireless Noise-Cancelling Headphones");
        assert_eq!(items[0].quantity, 2);
    }
}
