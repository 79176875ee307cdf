//! Catalog and quote data provider.
//!
//! Product and quote data arrive as in-memory values from an external
//! collaborator; the portal core never fetches anything itself. The mock
//! provider ships a small marine-lubricant catalog for demos and tests.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use crate::domain::aggregates::product::{Product, ProductOption};
use crate::domain::aggregates::quote::{QuoteItem, QuoteStatus};
use crate::domain::value_objects::Money;

pub trait DataProvider {
    fn products(&self) -> Vec<Product>;
    fn quotes(&self) -> Vec<QuoteItem>;
}

#[derive(Default)]
pub struct MockDataProvider;

impl DataProvider for MockDataProvider {
    fn products(&self) -> Vec<Product> {
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
                        id: "5L".into(),
                        price: Money::usd(Decimal::new(21500, 2)),
                        unit: "canister".into(),
                        min_order_qty: 1,
                        max_stock: Some(120),
                    },
                    ProductOption {
                        id: "20L".into(),
                        price: Money::usd(Decimal::new(82000, 2)),
                        unit: "drum".into(),
                        min_order_qty: 1,
                        max_stock: Some(40),
                    },
                ],
                image: Some("/img/oil-5w30.webp".into()),
                in_stock: true,
            },
            Product {
                id: "gear-sae90".into(),
                name: "Marine Gear Oil SAE 90".into(),
                list_price: Money::usd(Decimal::new(5250, 2)),
                customer_price: Some(Money::usd(Decimal::new(4725, 2))),
                options: vec![
                    ProductOption {
                        id: "5L".into(),
                        price: Money::usd(Decimal::new(5250, 2)),
                        unit: "canister".into(),
                        min_order_qty: 2,
                        max_stock: Some(80),
                    },
                    ProductOption {
                        id: "209L".into(),
                        price: Money::usd(Decimal::new(198000, 2)),
                        unit: "barrel".into(),
                        min_order_qty: 1,
                        max_stock: Some(12),
                    },
                ],
                image: Some("/img/gear-sae90.webp".into()),
                in_stock: true,
            },
            Product {
                id: "hyd-iso46".into(),
                name: "Hydraulic Fluid ISO 46".into(),
                list_price: Money::usd(Decimal::new(2150, 2)),
                customer_price: None,
                options: vec![ProductOption {
                    id: "20L".into(),
                    price: Money::usd(Decimal::new(2150, 2)),
                    unit: "pail".into(),
                    min_order_qty: 4,
                    max_stock: Some(200),
                }],
                image: Some("/img/hyd-iso46.webp".into()),
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
                image: Some("/img/grease-mp.webp".into()),
                in_stock: false,
            },
        ]
    }

    fn quotes(&self) -> Vec<QuoteItem> {
        let now = Utc::now();
        vec![
            QuoteItem {
                id: "qi-1001".into(),
                quote_id: "q-100".into(),
                product_name: "Premium Engine Oil 5W-30".into(),
                quantity: 24,
                unit_price: Money::usd(Decimal::new(3899, 2)),
                customer_name: "Baltic Shipping Co".into(),
                customer_email: "ops@balticshipping.example".into(),
                status: QuoteStatus::Ready,
                created_at: now - Duration::days(3),
                responded_at: None,
                handled_by: Some("H. Larsen".into()),
            },
            QuoteItem {
                id: "qi-1002".into(),
                quote_id: "q-100".into(),
                product_name: "Marine Gear Oil SAE 90".into(),
                quantity: 6,
                unit_price: Money::usd(Decimal::new(4725, 2)),
                customer_name: "Baltic Shipping Co".into(),
                customer_email: "ops@balticshipping.example".into(),
                status: QuoteStatus::Ready,
                created_at: now - Duration::days(3),
                responded_at: None,
                handled_by: Some("H. Larsen".into()),
            },
            QuoteItem {
                id: "qi-1003".into(),
                quote_id: "q-101".into(),
                product_name: "Hydraulic Fluid ISO 46".into(),
                quantity: 16,
                unit_price: Money::usd(Decimal::new(1990, 2)),
                customer_name: "Nordsee Fisheries".into(),
                customer_email: "purchasing@nordsee.example".into(),
                status: QuoteStatus::Ready,
                created_at: now - Duration::days(1),
                responded_at: None,
                handled_by: Some("M. Okafor".into()),
            },
            QuoteItem {
                id: "qi-1004".into(),
                quote_id: "q-101".into(),
                product_name: "Multi-Purpose Marine Grease".into(),
                quantity: 48,
                unit_price: Money::usd(Decimal::new(1100, 2)),
                customer_name: "Nordsee Fisheries".into(),
                customer_email: "purchasing@nordsee.example".into(),
                status: QuoteStatus::Pending,
                created_at: now - Duration::hours(6),
                responded_at: None,
                handled_by: None,
            },
            QuoteItem {
                id: "qi-1005".into(),
                quote_id: "q-099".into(),
                product_name: "Premium Engine Oil 5W-30".into(),
                quantity: 12,
                unit_price: Money::usd(Decimal::new(3899, 2)),
                customer_name: "Baltic Shipping Co".into(),
                customer_email: "ops@balticshipping.example".into(),
                status: QuoteStatus::Rejected,
                created_at: now - Duration::days(14),
                responded_at: Some(now - Duration::days(12)),
                handled_by: Some("H. Larsen".into()),
            },
        ]
    }
}
