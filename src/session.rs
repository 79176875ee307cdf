//! Portal session: the explicitly-wired object graph for one browser
//! session. Constructed at session start, dropped at session end; every
//! collaborator is injected, nothing is looked up ambiently.

use std::sync::Arc;

use crate::domain::aggregates::product::Product;
use crate::policy::{self, Operation, PortalData, Role, User};
use crate::pricing::PricingMemory;
use crate::provider::DataProvider;
use crate::storage::KvStore;
use crate::store::{CartStore, QuoteRegistry};

pub struct PortalSession {
    user: Option<User>,
    products: Vec<Product>,
    cart: CartStore,
    quotes: QuoteRegistry,
}

impl PortalSession {
    pub fn start(
        provider: &dyn DataProvider,
        storage: Arc<dyn KvStore>,
        pricing: Arc<dyn PricingMemory>,
        user: Option<User>,
    ) -> Self {
        let products = provider.products();
        let quotes = QuoteRegistry::new(provider.quotes(), pricing);
        let mut cart = CartStore::load(storage);
        cart.set_guest_mode(user.is_none());
        tracing::info!(
            role = ?policy::role_of(user.as_ref()),
            products = products.len(),
            quote_items = quotes.items().len(),
            "portal session started"
        );
        Self { user, products, cart, quotes }
    }

    pub fn user(&self) -> Option<&User> { self.user.as_ref() }
    pub fn role(&self) -> Role { policy::role_of(self.user.as_ref()) }
    pub fn products(&self) -> &[Product] { &self.products }
    pub fn cart(&self) -> &CartStore { &self.cart }
    pub fn cart_mut(&mut self) -> &mut CartStore { &mut self.cart }
    pub fn quotes(&self) -> &QuoteRegistry { &self.quotes }
    pub fn quotes_mut(&mut self) -> &mut QuoteRegistry { &mut self.quotes }

    pub fn can(&self, op: Operation) -> bool {
        policy::allowed_operations(self.role()).contains(&op)
    }

    /// Role-scoped projection for the UI.
    pub fn portal_data(&self) -> PortalData {
        policy::portal_data(self.user.as_ref(), &self.products, self.quotes.items())
    }

    pub fn sign_in(&mut self, user: User) {
        self.cart.set_guest_mode(false);
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.cart.set_guest_mode(true);
        self.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::LoggingPricingMemory;
    use crate::provider::MockDataProvider;
    use crate::storage::MemoryStore;

    fn session(user: Option<User>) -> PortalSession {
        PortalSession::start(
            &MockDataProvider,
            Arc::new(MemoryStore::new()),
            Arc::new(LoggingPricingMemory),
            user,
        )
    }

    fn customer() -> User {
        User {
            id: "u1".into(),
            name: "A. Mercer".into(),
            email: "ops@balticshipping.example".into(),
            role: Role::Customer,
            customer_name: Some("Baltic Shipping Co".into()),
        }
    }

    #[test]
    fn test_guest_session_defaults() {
        let session = session(None);
        assert_eq!(session.role(), Role::Guest);
        assert!(session.cart().is_guest_mode());
        assert!(session.can(Operation::RequestQuote));
        assert!(!session.can(Operation::CreateOrder));
        assert!(session.portal_data().quotes.is_empty());
    }

    #[test]
    fn test_sign_in_switches_cart_mode() {
        let mut session = session(None);
        assert!(session.cart().is_guest_mode());
        session.sign_in(customer());
        assert!(!session.cart().is_guest_mode());
        assert_eq!(session.role(), Role::Customer);
        session.sign_out();
        assert!(session.cart().is_guest_mode());
        assert_eq!(session.role(), Role::Guest);
    }

    #[test]
    fn test_customer_session_view() {
        let session = session(Some(customer()));
        let data = session.portal_data();
        assert!(data.quotes.iter().all(|q| q.customer_name == "Baltic Shipping Co"));
        assert!(session.can(Operation::AcceptQuote));
        assert!(!session.can(Operation::ManageQuotes));
    }
}
