//! Checkout entities: customer details, the storefront cart and provider results.

use serde::{Deserialize, Serialize};

use super::address::Address;

/// Contact details collected on the checkout form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

/// Checkout input: the submitted verification code plus customer details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub verification_code: String,
    pub customer: CustomerDetails,
}

/// A single product line priced in minor currency units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub description: String,
    pub tax_code: String,
    pub unit_amount: i64,
    pub quantity: u32,
}

impl LineItem {
    fn storefront(name: &str, unit_amount: i64) -> Self {
        Self {
            name: name.to_string(),
            description: "lecker lecker".to_string(),
            tax_code: "txcd_99999999".to_string(),
            unit_amount,
            quantity: 1,
        }
    }
}

/// Items to charge, all in one currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Lowercase ISO 4217 code
    pub currency: String,
    pub items: Vec<LineItem>,
}

impl Cart {
    /// The fixed storefront offer: one Keks and one Kuchen
    pub fn storefront() -> Self {
        Self {
            currency: "eur".to_string(),
            items: vec![
                LineItem::storefront("Keks", 1500),
                LineItem::storefront("Kuchen", 2500),
            ],
        }
    }

    /// Sum of unit amount times quantity over all items
    pub fn total(&self) -> i64 {
        self.items
            .iter()
            .map(|item| item.unit_amount * i64::from(item.quantity))
            .sum()
    }
}

/// Payment provider customer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
}

/// Hosted checkout session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}
