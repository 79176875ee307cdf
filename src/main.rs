//! Lubeport portal core - demo walkthrough binary

use std::sync::Arc;

use anyhow::Result;
use lubeport::policy::{Operation, Role, User};
use lubeport::pricing::LoggingPricingMemory;
use lubeport::provider::MockDataProvider;
use lubeport::session::PortalSession;
use lubeport::storage::FileStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_dir = std::env::var("PORTAL_DATA_DIR").unwrap_or_else(|_| ".lubeport".to_string());
    let storage = Arc::new(FileStore::new(&data_dir)?);
    let pricing = Arc::new(LoggingPricingMemory);
    tracing::info!(%data_dir, "lubeport portal core starting");

    // Guest browsing: every price comes back zeroed.
    let mut session = PortalSession::start(&MockDataProvider, storage, pricing, None);
    let guest_view = session.portal_data();
    for product in &guest_view.products {
        tracing::info!(product = %product.name, price = %product.list_price, "guest sees");
    }

    // A registered customer signs in and fills the cart at tier prices.
    session.sign_in(User {
        id: "u1".into(),
        name: "A. Mercer".into(),
        email: "ops@balticshipping.example".into(),
        role: Role::Customer,
        customer_name: Some("Baltic Shipping Co".into()),
    });
    let products = session.products().to_vec();
    let oil = products
        .iter()
        .find(|p| p.id == "oil-5w30")
        .ok_or_else(|| anyhow::anyhow!("catalog missing engine oil"))?;
    session.cart_mut().add_to_cart(oil, "1L", 6);
    session.cart_mut().add_to_cart(oil, "20L", 1);
    tracing::info!(
        items = session.cart().item_count(),
        subtotal = %session.cart().subtotal(),
        "customer cart"
    );
    tracing::info!(
        own_quotes = session.portal_data().quotes.len(),
        can_accept = session.can(Operation::AcceptQuote),
        "customer quote view"
    );

    // An employee consolidates the ready quote items per customer.
    session.sign_in(User {
        id: "e1".into(),
        name: "H. Larsen".into(),
        email: "h.larsen@lubeport.example".into(),
        role: Role::Employee,
        customer_name: None,
    });
    session.quotes_mut().select_all_for_customer("Baltic Shipping Co");
    session.quotes_mut().select_all_for_customer("Nordsee Fisheries");
    let orders = session.quotes_mut().consolidate_selected();
    for order in &orders {
        tracing::info!(
            order_id = order.id(),
            customer = order.customer_name(),
            items = order.items().len(),
            total = %order.total(),
            "consolidated order created"
        );
    }
    for event in session.quotes_mut().take_events() {
        tracing::debug!(?event, "domain event");
    }

    Ok(())
}
