//! Cart aggregate

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Money;

/// Session cart. Pricing mode (guest vs. registered) lives here so that the
/// effective line price is always recomputed from the canonical prices a
/// line was created with; switching modes never rewrites stored prices.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
    guest_mode: bool,
}

/// One cart line, keyed by (product, option).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub product_id: String,
    pub option_id: String,
    pub name: String,
    /// Canonical option price from the catalog.
    pub list_price: Money,
    /// Canonical customer-tier price of the parent product, when one exists.
    pub customer_price: Option<Money>,
    pub unit: String,
    pub quantity: u32,
    pub image: Option<String>,
    pub min_order_qty: u32,
    pub max_stock: Option<u32>,
    /// Present when this line came in through an accepted quote.
    pub quote: Option<QuoteLink>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteLink {
    pub quote_id: String,
    pub price: Money,
}

impl CartItem {
    /// The `:` separator keeps the product/option boundary unambiguous even
    /// when the ids themselves contain dashes.
    pub fn line_id(product_id: &str, option_id: &str) -> String {
        format!("{product_id}:{option_id}")
    }

    pub fn is_quoted(&self) -> bool {
        self.quote.is_some()
    }

    /// Quoted price wins; otherwise the list price in guest mode, else the
    /// customer price falling back to the list price.
    pub fn unit_price(&self, guest_mode: bool) -> Money {
        if let Some(link) = &self.quote {
            return link.price.clone();
        }
        if guest_mode {
            return self.list_price.clone();
        }
        self.customer_price.clone().unwrap_or_else(|| self.list_price.clone())
    }

    pub fn line_total(&self, guest_mode: bool) -> Money {
        self.unit_price(guest_mode).multiply(self.quantity)
    }
}

impl Cart {
    pub fn items(&self) -> &[CartItem] { &self.items }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
    pub fn is_guest_mode(&self) -> bool { self.guest_mode }

    pub fn item(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Merges by line id: quantities accumulate, they never overwrite.
    /// A zero quantity is a no-op; zero-quantity lines are never stored.
    pub fn add_item(&mut self, item: CartItem) {
        if item.quantity == 0 {
            return;
        }
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity += item.quantity;
        } else {
            self.items.push(item);
        }
    }

    /// Zero deletes the line; a non-positive quantity is never stored.
    /// Unknown ids are a no-op.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity;
        }
    }

    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Upsert for quoted lines: an existing line with the same id is fully
    /// replaced by the incoming one, otherwise the line is appended. An
    /// incoming zero quantity deletes the line, same as `update_quantity`.
    pub fn upsert_quoted(&mut self, items: Vec<CartItem>) {
        for incoming in items {
            if incoming.quantity == 0 {
                self.remove_item(&incoming.id);
                continue;
            }
            if let Some(existing) = self.items.iter_mut().find(|i| i.id == incoming.id) {
                *existing = incoming;
            } else {
                self.items.push(incoming);
            }
        }
    }

    pub fn set_guest_mode(&mut self, guest_mode: bool) {
        self.guest_mode = guest_mode;
    }

    /// Sum of quantities, not number of lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn subtotal(&self) -> Money {
        let currency = self
            .items
            .first()
            .map(|i| i.list_price.currency().to_string())
            .unwrap_or_else(|| "USD".to_string());
        self.items.iter().fold(Money::zero(&currency), |acc, i| {
            acc.add(&i.line_total(self.guest_mode)).unwrap_or(acc)
        })
    }
}
