//! Session state stores
pub mod cart;
pub mod quotes;

pub use cart::CartStore;
pub use quotes::QuoteRegistry;
