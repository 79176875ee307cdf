//! Role policy: maps a user role to a price-adjusted, visibility-filtered
//! projection of the catalog and quote ledger.
//!
//! Everything here is pure: identical inputs always produce identical
//! output, which the tests rely on.

use serde::{Deserialize, Serialize};

use crate::domain::aggregates::product::{Product, ProductOption};
use crate::domain::aggregates::quote::QuoteItem;
use crate::domain::value_objects::Money;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Guest,
    Customer,
    Employee,
    Admin,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Company the user purchases for; used to match quote ownership.
    pub customer_name: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    ViewProducts,
    RequestQuote,
    ViewPricing,
    CreateOrder,
    AcceptQuote,
    ManageQuotes,
    ManageOrders,
    ManagePricing,
    ManageCustomers,
}

const GUEST_OPS: &[Operation] = &[Operation::ViewProducts, Operation::RequestQuote];

const CUSTOMER_OPS: &[Operation] = &[
    Operation::ViewProducts,
    Operation::RequestQuote,
    Operation::ViewPricing,
    Operation::CreateOrder,
    Operation::AcceptQuote,
];

const STAFF_OPS: &[Operation] = &[
    Operation::ViewProducts,
    Operation::RequestQuote,
    Operation::ViewPricing,
    Operation::CreateOrder,
    Operation::AcceptQuote,
    Operation::ManageQuotes,
    Operation::ManageOrders,
    Operation::ManagePricing,
    Operation::ManageCustomers,
];

pub fn allowed_operations(role: Role) -> &'static [Operation] {
    match role {
        Role::Guest => GUEST_OPS,
        Role::Customer => CUSTOMER_OPS,
        Role::Employee | Role::Admin => STAFF_OPS,
    }
}

/// Absence of a user is equivalent to a guest.
pub fn role_of(user: Option<&User>) -> Role {
    user.map(|u| u.role).unwrap_or(Role::Guest)
}

/// The role-filtered projection handed to the UI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortalData {
    pub products: Vec<Product>,
    pub quotes: Vec<QuoteItem>,
    pub operations: Vec<Operation>,
}

pub fn price_for_user(product: &Product, role: Role) -> Money {
    match role {
        Role::Guest => Money::zero(product.list_price.currency()),
        Role::Customer => product
            .customer_price
            .clone()
            .unwrap_or_else(|| product.list_price.clone()),
        Role::Employee | Role::Admin => product.list_price.clone(),
    }
}

/// Option prices adjusted for the role: zeroed for guests, scaled by the
/// product's uniform discount ratio for customers, untouched otherwise.
pub fn available_product_options(product: &Product, role: Role) -> Vec<ProductOption> {
    match role {
        Role::Guest => product
            .options
            .iter()
            .map(|o| ProductOption { price: Money::zero(o.price.currency()), ..o.clone() })
            .collect(),
        Role::Customer => match product.discount_ratio() {
            Some(ratio) => product
                .options
                .iter()
                .map(|o| ProductOption { price: o.price.scale(ratio), ..o.clone() })
                .collect(),
            None => product.options.clone(),
        },
        Role::Employee | Role::Admin => product.options.clone(),
    }
}

pub fn portal_data(user: Option<&User>, products: &[Product], quotes: &[QuoteItem]) -> PortalData {
    let role = role_of(user);
    let products = products
        .iter()
        .map(|p| {
            let mut adjusted = p.clone();
            adjusted.list_price = price_for_user(p, role);
            adjusted.options = available_product_options(p, role);
            if role == Role::Guest {
                adjusted.customer_price = None;
            }
            adjusted
        })
        .collect();
    let quotes = match role {
        Role::Guest => vec![],
        Role::Customer => quotes.iter().filter(|q| owns_quote(user, q)).cloned().collect(),
        Role::Employee | Role::Admin => quotes.to_vec(),
    };
    PortalData { products, quotes, operations: allowed_operations(role).to_vec() }
}

/// Ownership match on the purchasing company or the account email.
fn owns_quote(user: Option<&User>, quote: &QuoteItem) -> bool {
    let Some(user) = user else { return false };
    if quote.customer_email.eq_ignore_ascii_case(&user.email) {
        return true;
    }
    user.customer_name
        .as_deref()
        .is_some_and(|name| name.eq_ignore_ascii_case(&quote.customer_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::quote::QuoteStatus;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                id: "oil-5w30".into(),
                name: "Premium Engine Oil 5W-30".into(),
                list_price: Money::usd(Decimal::new(4599, 2)),
                customer_price: Some(Money::usd(Decimal::new(3899, 2))),
                options: vec![
                    ProductOption {
                        id: "1L".into(),
                        price: Money::usd(Decimal::new(4599, 2)),
                        unit: "bottle".into(),
                        min_order_qty: 1,
                        max_stock: Some(500),
                    },
                    ProductOption {
                        id: "20L".into(),
                        price: Money::usd(Decimal::new(82000, 2)),
                        unit: "drum".into(),
                        min_order_qty: 1,
                        max_stock: Some(40),
                    },
                ],
                image: None,
                in_stock: true,
            },
            Product {
                id: "grease-mp".into(),
                name: "Multi-Purpose Marine Grease".into(),
                list_price: Money::usd(Decimal::new(1250, 2)),
                customer_price: None,
                options: vec![ProductOption {
                    id: "400g".into(),
                    price: Money::usd(Decimal::new(1250, 2)),
                    unit: "cartridge".into(),
                    min_order_qty: 12,
                    max_stock: None,
                }],
                image: None,
                in_stock: true,
            },
        ]
    }

    fn quote_for(customer: &str, email: &str) -> QuoteItem {
        QuoteItem {
            id: format!("q-{customer}"),
            quote_id: "q1".into(),
            product_name: "Premium Engine Oil 5W-30".into(),
            quantity: 10,
            unit_price: Money::usd(Decimal::new(3899, 2)),
            customer_name: customer.into(),
            customer_email: email.into(),
            status: QuoteStatus::Ready,
            created_at: Utc::now(),
            responded_at: None,
            handled_by: None,
        }
    }

    fn customer_user() -> User {
        User {
            id: "u1".into(),
            name: "A. Mercer".into(),
            email: "a.mercer@balticshipping.example".into(),
            role: Role::Customer,
            customer_name: Some("Baltic Shipping Co".into()),
        }
    }

    #[test]
    fn test_guest_sees_all_prices_zeroed() {
        for product in &catalog() {
            assert!(price_for_user(product, Role::Guest).is_zero());
            for opt in available_product_options(product, Role::Guest) {
                assert!(opt.price.is_zero());
            }
        }
    }

    #[test]
    fn test_customer_option_prices_scale_uniformly() {
        let product = &catalog()[0];
        let ratio = Decimal::new(3899, 2) / Decimal::new(4599, 2);
        let options = available_product_options(product, Role::Customer);
        for (adjusted, raw) in options.iter().zip(&product.options) {
            assert_eq!(adjusted.price.amount(), (raw.price.amount() * ratio).round_dp(2));
        }
    }

    #[test]
    fn test_customer_without_tier_price_passes_through() {
        let product = &catalog()[1];
        assert_eq!(available_product_options(product, Role::Customer), product.options);
        assert_eq!(price_for_user(product, Role::Customer), product.list_price);
    }

    #[test]
    fn test_zero_list_price_means_no_discount() {
        let mut product = catalog()[0].clone();
        product.list_price = Money::zero("USD");
        let options = available_product_options(&product, Role::Customer);
        assert_eq!(options, product.options);
    }

    #[test]
    fn test_worked_example_prices_per_role() {
        let product = &catalog()[0];
        assert_eq!(price_for_user(product, Role::Customer).amount(), Decimal::new(3899, 2));
        assert!(price_for_user(product, Role::Guest).is_zero());
        assert_eq!(price_for_user(product, Role::Employee).amount(), Decimal::new(4599, 2));
    }

    #[test]
    fn test_quote_visibility_per_role() {
        let products = catalog();
        let quotes = vec![
            quote_for("Baltic Shipping Co", "ops@balticshipping.example"),
            quote_for("Nordsee Fisheries", "purchasing@nordsee.example"),
        ];
        let guest = portal_data(None, &products, &quotes);
        assert!(guest.quotes.is_empty());

        let customer = customer_user();
        let view = portal_data(Some(&customer), &products, &quotes);
        assert_eq!(view.quotes.len(), 1);
        assert_eq!(view.quotes[0].customer_name, "Baltic Shipping Co");

        let staff = User { role: Role::Employee, ..customer_user() };
        let view = portal_data(Some(&staff), &products, &quotes);
        assert_eq!(view.quotes.len(), 2);
    }

    #[test]
    fn test_operation_allow_lists() {
        assert_eq!(allowed_operations(Role::Guest), GUEST_OPS);
        assert!(allowed_operations(Role::Customer).contains(&Operation::AcceptQuote));
        assert!(!allowed_operations(Role::Customer).contains(&Operation::ManageQuotes));
        assert!(allowed_operations(Role::Employee).contains(&Operation::ManageOrders));
        assert_eq!(allowed_operations(Role::Admin), allowed_operations(Role::Employee));
    }

    #[test]
    fn test_portal_data_is_referentially_transparent() {
        let products = catalog();
        let quotes = vec![quote_for("Baltic Shipping Co", "ops@balticshipping.example")];
        let user = customer_user();
        let a = portal_data(Some(&user), &products, &quotes);
        let b = portal_data(Some(&user), &products, &quotes);
        assert_eq!(a, b);
    }

    #[test]
    fn test_guest_view_hides_customer_tier() {
        let products = catalog();
        let view = portal_data(None, &products, &[]);
        assert!(view.products.iter().all(|p| p.customer_price.is_none()));
        assert!(view.products.iter().all(|p| p.list_price.is_zero()));
    }
}
