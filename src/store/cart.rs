//! Cart store: the cart aggregate plus best-effort local persistence.

use std::sync::Arc;

use crate::domain::aggregates::cart::{Cart, CartItem};
use crate::domain::aggregates::product::Product;
use crate::domain::value_objects::Money;
use crate::storage::KvStore;

const ITEMS_KEY: &str = "portal.cart.items";
const GUEST_MODE_KEY: &str = "portal.cart.guest_mode";

/// Session-scoped cart, mirrored to local storage after every mutation and
/// rehydrated at startup. Storage problems degrade to an empty cart.
pub struct CartStore {
    cart: Cart,
    storage: Arc<dyn KvStore>,
}

impl CartStore {
    pub fn load(storage: Arc<dyn KvStore>) -> Self {
        let mut cart = Cart::default();
        if let Some(raw) = storage.get(ITEMS_KEY) {
            match serde_json::from_str::<Vec<CartItem>>(&raw) {
                Ok(items) => {
                    for item in items {
                        cart.add_item(item);
                    }
                }
                Err(err) => tracing::warn!(%err, "discarding malformed cart snapshot"),
            }
        }
        if let Some(raw) = storage.get(GUEST_MODE_KEY) {
            match serde_json::from_str::<bool>(&raw) {
                Ok(flag) => cart.set_guest_mode(flag),
                Err(err) => tracing::warn!(%err, "discarding malformed guest-mode flag"),
            }
        }
        Self { cart, storage }
    }

    pub fn items(&self) -> &[CartItem] { self.cart.items() }
    pub fn is_empty(&self) -> bool { self.cart.is_empty() }
    pub fn is_guest_mode(&self) -> bool { self.cart.is_guest_mode() }
    pub fn item_count(&self) -> u32 { self.cart.item_count() }
    pub fn subtotal(&self) -> Money { self.cart.subtotal() }

    /// Unknown option ids are ignored: nothing is created, nothing surfaces.
    pub fn add_to_cart(&mut self, product: &Product, option_id: &str, quantity: u32) {
        let Some(option) = product.option(option_id) else {
            tracing::debug!(product = %product.id, option_id, "ignoring add for unknown option");
            return;
        };
        self.cart.add_item(CartItem {
            id: CartItem::line_id(&product.id, &option.id),
            product_id: product.id.clone(),
            option_id: option.id.clone(),
            name: product.name.clone(),
            list_price: option.price.clone(),
            customer_price: product.customer_price.clone(),
            unit: option.unit.clone(),
            quantity,
            image: product.image.clone(),
            min_order_qty: option.min_order_qty,
            max_stock: option.max_stock,
            quote: None,
        });
        self.persist();
    }

    pub fn update_quantity(&mut self, id: &str, quantity: u32) {
        self.cart.update_quantity(id, quantity);
        self.persist();
    }

    pub fn remove_from_cart(&mut self, id: &str) {
        self.cart.remove_item(id);
        self.persist();
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Accepted quote selections re-enter the cart through here.
    pub fn add_quoted_items(&mut self, items: Vec<CartItem>) {
        self.cart.upsert_quoted(items);
        self.persist();
    }

    pub fn set_guest_mode(&mut self, guest_mode: bool) {
        self.cart.set_guest_mode(guest_mode);
        self.persist();
    }

    fn persist(&self) {
        match serde_json::to_string(self.cart.items()) {
            Ok(json) => self.storage.set(ITEMS_KEY, &json),
            Err(err) => tracing::warn!(%err, "failed to serialize cart items"),
        }
        let flag = if self.cart.is_guest_mode() { "true" } else { "false" };
        self.storage.set(GUEST_MODE_KEY, flag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{DataProvider, MockDataProvider};
    use crate::storage::MemoryStore;
    use rust_decimal::Decimal;

    fn oil() -> Product {
        MockDataProvider.products().into_iter().find(|p| p.id == "oil-5w30").unwrap()
    }

    #[test]
    fn test_add_to_cart_accumulates() {
        let mut store = CartStore::load(Arc::new(MemoryStore::new()));
        store.add_to_cart(&oil(), "1L", 2);
        store.add_to_cart(&oil(), "1L", 3);
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.item_count(), 5);
    }

    #[test]
    fn test_add_to_cart_unknown_option_is_noop() {
        let mut store = CartStore::load(Arc::new(MemoryStore::new()));
        store.add_to_cart(&oil(), "200L", 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_to_cart_zero_quantity_is_noop() {
        let mut store = CartStore::load(Arc::new(MemoryStore::new()));
        store.add_to_cart(&oil(), "1L", 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_quantity_zero_equals_remove() {
        let mut store = CartStore::load(Arc::new(MemoryStore::new()));
        store.add_to_cart(&oil(), "1L", 2);
        store.update_quantity("oil-5w30:1L", 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_registered_mode_uses_customer_price() {
        let mut store = CartStore::load(Arc::new(MemoryStore::new()));
        store.add_to_cart(&oil(), "1L", 1);
        assert_eq!(store.subtotal().amount(), Decimal::new(3899, 2));
        store.set_guest_mode(true);
        assert_eq!(store.subtotal().amount(), Decimal::new(4599, 2));
    }

    #[test]
    fn test_persistence_round_trip() {
        let storage: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
        {
            let mut store = CartStore::load(storage.clone());
            store.add_to_cart(&oil(), "5L", 2);
            store.set_guest_mode(true);
        }
        let reloaded = CartStore::load(storage);
        assert_eq!(reloaded.items().len(), 1);
        assert_eq!(reloaded.items()[0].quantity, 2);
        assert!(reloaded.is_guest_mode());
    }

    #[test]
    fn test_corrupt_storage_defaults_to_empty() {
        let storage: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
        storage.set("portal.cart.items", "{not json");
        storage.set("portal.cart.guest_mode", "maybe");
        let store = CartStore::load(storage);
        assert!(store.is_empty());
        assert!(!store.is_guest_mode());
    }

    #[test]
    fn test_clear_cart_persists_empty_list() {
        let storage: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
        let mut store = CartStore::load(storage.clone());
        store.add_to_cart(&oil(), "1L", 1);
        store.clear_cart();
        assert_eq!(storage.get("portal.cart.items").as_deref(), Some("[]"));
    }
}
