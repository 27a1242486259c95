//! Placed orders, kept in the session for the confirmation page.

use chrono::{DateTime, Utc};
use electromart_core::{Email, OrderNumber, PaymentMethod, Price, ShippingMethod};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::cart::Cart;

/// A summarized order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub variant: Option<String>,
    pub quantity: u32,
    pub line_total: Price,
}

/// A confirmed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub number: OrderNumber,
    pub email: Email,
    pub full_name: String,
    /// One-line shipping address.
    pub ship_to: String,
    pub lines: Vec<OrderLine>,
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
    pub shipping_method: ShippingMethod,
    pub payment_method: PaymentMethod,
    pub placed_at: DateTime<Utc>,
}

impl PlacedOrder {
    /// Snapshot `cart` into an order.
    #[must_use]
    pub fn from_cart(
        number: OrderNumber,
        cart: &Cart,
        contact: OrderContact,
        shipping_method: ShippingMethod,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            number,
            email: contact.email,
            full_name: contact.full_name,
            ship_to: contact.ship_to,
            lines: cart
                .lines()
                .iter()
                .map(|line| OrderLine {
                    name: line.name.clone(),
                    variant: line.variant.clone(),
                    quantity: line.quantity,
                    line_total: line.line_total(),
                })
                .collect(),
            subtotal: cart.subtotal(),
            shipping: cart.shipping(shipping_method),
            total: cart.total(shipping_method),
            shipping_method,
            payment_method,
            placed_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// Who the order ships to.
#[derive(Debug, Clone)]
pub struct OrderContact {
    pub email: Email,
    pub full_name: String,
    pub ship_to: String,
}

/// A fresh order number: "ORD" followed by five digits.
pub fn generate_order_number(rng: &mut impl Rng) -> OrderNumber {
    OrderNumber::new(format!("ORD{}", rng.random_range(10_000..=99_999)))
}
