//! Product catalog reference data

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Money;

/// A catalog product. Immutable for the duration of a session; owned by the
/// external catalog collaborator and handed to the core by value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub list_price: Money,
    /// Negotiated customer-tier price, when one exists for this product.
    pub customer_price: Option<Money>,
    pub options: Vec<ProductOption>,
    pub image: Option<String>,
    pub in_stock: bool,
}

/// A purchasable packaging option of a product (1L bottle, 20L drum, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductOption {
    pub id: String,
    pub price: Money,
    pub unit: String,
    pub min_order_qty: u32,
    pub max_stock: Option<u32>,
}

impl Product {
    pub fn option(&self, option_id: &str) -> Option<&ProductOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Ratio customer_price / list_price, applied uniformly across options.
    /// None when no customer price exists or the list price is zero, in
    /// which case no discount applies.
    pub fn discount_ratio(&self) -> Option<Decimal> {
        let customer = self.customer_price.as_ref()?;
        if self.list_price.is_zero() {
            return None;
        }
        Some(customer.amount() / self.list_price.amount())
    }
}
