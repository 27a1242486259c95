//! Checkout option enums.
//!
//! These are the closed sets of choices a shopper makes on the checkout page.
//! Serde names match the HTML form values.

use serde::{Deserialize, Serialize};

use super::price::{CurrencyCode, Price};

/// Shipping speed selected at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ShippingMethod {
    /// 5-7 business days.
    #[default]
    Standard,
    /// 1-3 business days.
    Express,
}

impl ShippingMethod {
    /// All methods in display order.
    pub const ALL: [Self; 2] = [Self::Standard, Self::Express];

    /// Flat shipping cost for the method.
    #[must_use]
    pub fn cost(self, currency_code: CurrencyCode) -> Price {
        match self {
            Self::Standard => Price::from_cents(500, currency_code),
            Self::Express => Price::from_cents(1500, currency_code),
        }
    }

    /// Form value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Express => "express",
        }
    }

    /// Human-readable label without the price.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard Shipping (5-7 days)",
            Self::Express => "Express Shipping (1-3 days)",
        }
    }

    /// Parse from a form value, falling back to the default.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "express" => Self::Express,
            _ => Self::Standard,
        }
    }
}

/// Payment method selected at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    #[serde(rename = "paypal")]
    PayPal,
}

impl PaymentMethod {
    /// All methods in display order.
    pub const ALL: [Self; 2] = [Self::CreditCard, Self::PayPal];

    /// Form value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreditCard => "credit-card",
            Self::PayPal => "paypal",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::PayPal => "PayPal",
        }
    }

    /// Parse from a form value, falling back to the default.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "paypal" => Self::PayPal,
            _ => Self::CreditCard,
        }
    }
}

/// Countries the checkout form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Country {
    #[default]
    USA,
    CAN,
    GBR,
}

impl Country {
    /// All countries in display order.
    pub const ALL: [Self; 3] = [Self::USA, Self::CAN, Self::GBR];

    /// ISO 3166-1 alpha-3 code (the form value).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USA => "USA",
            Self::CAN => "CAN",
            Self::GBR => "GBR",
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::USA => "United States",
            Self::CAN => "Canada",
            Self::GBR => "United Kingdom",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_costs() {
        assert_eq!(
            ShippingMethod::Standard.cost(CurrencyCode::USD).to_string(),
            "$5.00"
        );
        assert_eq!(
            ShippingMethod::Express.cost(CurrencyCode::USD).to_string(),
            "$15.00"
        );
    }

    #[test]
    fn test_parse_falls_back_to_default() {
        assert_eq!(ShippingMethod::parse("express"), ShippingMethod::Express);
        assert_eq!(ShippingMethod::parse("overnight"), ShippingMethod::Standard);
        assert_eq!(PaymentMethod::parse("paypal"), PaymentMethod::PayPal);
        assert_eq!(PaymentMethod::parse(""), PaymentMethod::CreditCard);
    }

    #[test]
    fn test_serde_names_match_form_values() {
        for method in PaymentMethod::ALL {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.as_str()));
        }
        for method in ShippingMethod::ALL {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.as_str()));
        }
    }
}
