//! Pricing-memory collaborator seam.
//!
//! Consolidation records a default-price association between a customer and
//! a product. A real implementation would feed a pricing store owned by a
//! separate service; the default here only logs the association.

use crate::domain::value_objects::Money;

pub trait PricingMemory: Send + Sync {
    fn record_default_price(&self, customer_name: &str, product_name: &str, unit_price: &Money);
}

/// Stub used until a pricing store exists.
#[derive(Default)]
pub struct LoggingPricingMemory;

impl PricingMemory for LoggingPricingMemory {
    fn record_default_price(&self, customer_name: &str, product_name: &str, unit_price: &Money) {
        tracing::info!(
            customer = customer_name,
            product = product_name,
            price = %unit_price,
            "recorded default price"
        );
    }
}
