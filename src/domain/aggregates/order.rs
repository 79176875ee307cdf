//! Consolidated order aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::aggregates::quote::QuoteItem;
use crate::domain::events::{DomainEvent, OrderEvent};
use crate::domain::value_objects::Money;

/// An order produced by consolidating selected quote items of one customer.
/// The member items are a snapshot taken at consolidation time; later changes
/// to the quote ledger never alter the order or its total.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConsolidatedOrder {
    id: String,
    customer_name: String,
    items: Vec<QuoteItem>,
    total: Money,
    created_at: DateTime<Utc>,
    status: OrderStatus,
    #[serde(skip)]
    events: Vec<DomainEvent>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
}

impl ConsolidatedOrder {
    pub fn from_quote_items(customer_name: impl Into<String>, items: Vec<QuoteItem>) -> Self {
        let customer_name = customer_name.into();
        let currency = items
            .first()
            .map(|i| i.unit_price.currency().to_string())
            .unwrap_or_else(|| "USD".to_string());
        let total = items
            .iter()
            .fold(Money::zero(&currency), |acc, i| acc.add(&i.total_price()).unwrap_or(acc));
        let id = Uuid::new_v4().to_string();
        let mut order = Self {
            id: id.clone(),
            customer_name: customer_name.clone(),
            items,
            total,
            created_at: Utc::now(),
            status: OrderStatus::Pending,
            events: vec![],
        };
        order.raise_event(DomainEvent::Order(OrderEvent::Created {
            order_id: id,
            customer_name,
            total: order.total.amount(),
        }));
        order
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn customer_name(&self) -> &str { &self.customer_name }
    pub fn items(&self) -> &[QuoteItem] { &self.items }
    pub fn total(&self) -> &Money { &self.total }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn status(&self) -> OrderStatus { self.status }

    pub fn start_processing(&mut self) -> Result<(), OrderError> {
        if self.status != OrderStatus::Pending {
            return Err(OrderError::InvalidTransition);
        }
        self.status = OrderStatus::Processing;
        self.raise_event(DomainEvent::Order(OrderEvent::Processing { order_id: self.id.clone() }));
        Ok(())
    }

    pub fn complete(&mut self) -> Result<(), OrderError> {
        if self.status != OrderStatus::Processing {
            return Err(OrderError::InvalidTransition);
        }
        self.status = OrderStatus::Completed;
        self.raise_event(DomainEvent::Order(OrderEvent::Completed { order_id: self.id.clone() }));
        Ok(())
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: DomainEvent) { self.events.push(e); }
}

#[derive(Debug, Clone)]
pub enum OrderError { InvalidTransition }
impl std::error::Error for OrderError {}
impl std::fmt::Display for OrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid order status transition")
    }
}
