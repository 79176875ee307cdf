//! Quote registry: the quote ledger, the transient selection set, and the
//! consolidation pass that turns selected items into per-customer orders.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use chrono::Utc;

use crate::domain::aggregates::order::{ConsolidatedOrder, OrderStatus};
use crate::domain::aggregates::quote::{QuoteItem, QuoteStatus};
use crate::domain::events::{DomainEvent, QuoteEvent};
use crate::pricing::PricingMemory;
use crate::{PortalError, Result};

pub struct QuoteRegistry {
    items: Vec<QuoteItem>,
    selection: HashSet<String>,
    orders: Vec<ConsolidatedOrder>,
    pricing: Arc<dyn PricingMemory>,
    events: Vec<DomainEvent>,
}

impl QuoteRegistry {
    pub fn new(items: Vec<QuoteItem>, pricing: Arc<dyn PricingMemory>) -> Self {
        Self { items, selection: HashSet::new(), orders: vec![], pricing, events: vec![] }
    }

    pub fn items(&self) -> &[QuoteItem] { &self.items }
    pub fn orders(&self) -> &[ConsolidatedOrder] { &self.orders }
    pub fn selection(&self) -> &HashSet<String> { &self.selection }

    pub fn item(&self, id: &str) -> Option<&QuoteItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Idempotent: selecting an id twice keeps a single membership. Ids not
    /// present in the ledger are ignored.
    pub fn select_item(&mut self, id: &str) {
        if self.item(id).is_none() {
            tracing::debug!(id, "ignoring selection of unknown quote item");
            return;
        }
        self.selection.insert(id.to_string());
    }

    pub fn deselect_item(&mut self, id: &str) {
        self.selection.remove(id);
    }

    /// Selects every ready item of the customer; other statuses never
    /// auto-select.
    pub fn select_all_for_customer(&mut self, customer_name: &str) {
        let ids: Vec<String> = self
            .items
            .iter()
            .filter(|i| i.customer_name == customer_name && i.status == QuoteStatus::Ready)
            .map(|i| i.id.clone())
            .collect();
        self.selection.extend(ids);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Groups the selected items by customer, creates one consolidated order
    /// per group, marks every selected item accepted, records default-price
    /// associations, and clears the selection. Empty selection is a no-op.
    pub fn consolidate_selected(&mut self) -> Vec<ConsolidatedOrder> {
        // Resolve in ledger order so group member order is stable.
        let selected: Vec<QuoteItem> = self
            .items
            .iter()
            .filter(|i| self.selection.contains(&i.id))
            .cloned()
            .collect();
        if selected.is_empty() {
            return vec![];
        }

        let mut groups: BTreeMap<String, Vec<QuoteItem>> = BTreeMap::new();
        for item in selected {
            groups.entry(item.customer_name.clone()).or_default().push(item);
        }

        let mut created = Vec::with_capacity(groups.len());
        for (customer_name, group) in groups {
            for item in &group {
                self.pricing.record_default_price(&customer_name, &item.product_name, &item.unit_price);
            }
            let mut order = ConsolidatedOrder::from_quote_items(&customer_name, group);
            self.events.push(DomainEvent::Quote(QuoteEvent::Consolidated {
                order_id: order.id().to_string(),
                customer_name,
                item_count: order.items().len(),
                total: order.total().amount(),
            }));
            self.events.extend(order.take_events());
            created.push(order);
        }

        // One global acceptance pass across all groups.
        let now = Utc::now();
        for item in self.items.iter_mut().filter(|i| self.selection.contains(&i.id)) {
            item.status = QuoteStatus::Accepted;
            item.responded_at = Some(now);
        }

        self.selection.clear();
        self.orders.extend(created.clone());
        created
    }

    /// Direct status transition, validated against the state machine.
    /// Entering a response status stamps the response date.
    pub fn update_quote_status(&mut self, id: &str, status: QuoteStatus) -> Result<()> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| PortalError::QuoteNotFound(id.to_string()))?;
        if !item.status.can_transition_to(status) {
            return Err(PortalError::IllegalTransition { from: item.status, to: status });
        }
        let from = item.status;
        item.status = status;
        if status.is_response() {
            item.responded_at = Some(Utc::now());
        }
        self.events.push(DomainEvent::Quote(QuoteEvent::StatusChanged {
            item_id: id.to_string(),
            from,
            to: status,
        }));
        Ok(())
    }

    pub fn start_order_processing(&mut self, order_id: &str) -> Result<()> {
        let order = self.order_mut(order_id)?;
        order.start_processing().map_err(|_| PortalError::IllegalOrderTransition {
            status: OrderStatus::Processing,
        })?;
        let events = order.take_events();
        self.events.extend(events);
        Ok(())
    }

    pub fn complete_order(&mut self, order_id: &str) -> Result<()> {
        let order = self.order_mut(order_id)?;
        order.complete().map_err(|_| PortalError::IllegalOrderTransition {
            status: OrderStatus::Completed,
        })?;
        let events = order.take_events();
        self.events.extend(events);
        Ok(())
    }

    fn order_mut(&mut self, order_id: &str) -> Result<&mut ConsolidatedOrder> {
        self.orders
            .iter_mut()
            .find(|o| o.id() == order_id)
            .ok_or_else(|| PortalError::OrderNotFound(order_id.to_string()))
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }
}
