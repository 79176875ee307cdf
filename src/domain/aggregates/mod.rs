//! Aggregates module
pub mod cart;
pub mod order;
pub mod product;
pub mod quote;

pub use cart::{Cart, CartItem, QuoteLink};
pub use order::{ConsolidatedOrder, OrderError, OrderStatus};
pub use product::{Product, ProductOption};
pub use quote::{QuoteItem, QuoteStatus};
