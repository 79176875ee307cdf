//! Domain events
use rust_decimal::Decimal;

use crate::domain::aggregates::quote::QuoteStatus;

#[derive(Clone, Debug)]
pub enum DomainEvent {
    Quote(QuoteEvent),
    Order(OrderEvent),
}

#[derive(Clone, Debug)]
pub enum QuoteEvent {
    StatusChanged { item_id: String, from: QuoteStatus, to: QuoteStatus },
    Consolidated { order_id: String, customer_name: String, item_count: usize, total: Decimal },
}

#[derive(Clone, Debug)]
pub enum OrderEvent {
    Created { order_id: String, customer_name: String, total: Decimal },
    Processing { order_id: String },
    Completed { order_id: String },
}
