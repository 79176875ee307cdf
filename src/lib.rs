//! Lubeport — multi-role commerce portal core
//!
//! Session-scoped business logic for a lubricant ordering portal. The UI is
//! an external collaborator: it calls plain functions here and renders what
//! comes back.
//!
//! ## Features
//! - Role-based pricing and data visibility (guest / customer / employee / admin)
//! - Session cart with mode-dependent pricing and local persistence
//! - Quote selection and per-customer consolidation into orders

use thiserror::Error;

pub mod domain;
pub mod policy;
pub mod pricing;
pub mod provider;
pub mod session;
pub mod storage;
pub mod store;

pub use domain::aggregates::{
    Cart, CartItem, ConsolidatedOrder, OrderStatus, Product, ProductOption, QuoteItem, QuoteLink,
    QuoteStatus,
};
pub use domain::value_objects::Money;
pub use policy::{Operation, PortalData, Role, User};
pub use session::PortalSession;
pub use store::{CartStore, QuoteRegistry};

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Quote item not found: {0}")]
    QuoteNotFound(String),

    #[error("Illegal quote status transition: {from} -> {to}")]
    IllegalTransition { from: QuoteStatus, to: QuoteStatus },

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Order cannot enter status {status:?} from its current state")]
    IllegalOrderTransition { status: OrderStatus },
}

pub type Result<T> = std::result::Result<T, PortalError>;
