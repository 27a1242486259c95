//! Checkout form validation.
//!
//! The checkout page posts one form holding the shipping address, the
//! shipping and payment method, and (for card payments) the card details.
//! Validation collects every failing field at once so the page can show the
//! messages inline.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use electromart_core::{Country, Email, PaymentMethod, ShippingMethod};

use crate::models::OrderContact;

/// Card expiry in `MM/YY` form.
static EXPIRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/\d{2}$").expect("Invalid regex"));

/// Field names that belong to the shipping address section.
const SHIPPING_FIELDS: [&str; 7] = [
    "full_name",
    "email",
    "address_line1",
    "city",
    "state",
    "zip_code",
    "country",
];

/// Raw checkout form as posted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
    pub full_name: String,
    pub email: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub phone: String,
    pub shipping_method: String,
    pub payment_method: String,
    pub card_holder_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            address_line1: String::new(),
            address_line2: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: Country::default().code().to_string(),
            phone: String::new(),
            shipping_method: ShippingMethod::default().as_str().to_string(),
            payment_method: PaymentMethod::default().as_str().to_string(),
            card_holder_name: String::new(),
            card_number: String::new(),
            expiry_date: String::new(),
            cvv: String::new(),
        }
    }
}

impl CheckoutForm {
    #[must_use]
    pub fn shipping_method(&self) -> ShippingMethod {
        ShippingMethod::parse(&self.shipping_method)
    }

    #[must_use]
    pub fn payment_method(&self) -> PaymentMethod {
        PaymentMethod::parse(&self.payment_method)
    }

    /// Copy safe to echo back into the form: card details are dropped.
    #[must_use]
    pub fn redisplay(&self) -> Self {
        Self {
            card_number: String::new(),
            cvv: String::new(),
            ..self.clone()
        }
    }
}

/// Per-field validation messages, keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    /// Record a message unless the field already has one.
    fn add(&mut self, field: &'static str, message: &str) {
        self.errors
            .entry(field)
            .or_insert_with(|| message.to_string());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether any shipping address field failed.
    #[must_use]
    pub fn has_shipping_errors(&self) -> bool {
        SHIPPING_FIELDS.iter().any(|f| self.errors.contains_key(f))
    }
}

/// A checkout that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedCheckout {
    pub contact: OrderContact,
    pub country: Country,
    pub shipping_method: ShippingMethod,
    pub payment_method: PaymentMethod,
}

/// Validate the posted form.
///
/// # Errors
///
/// Returns every failing field with its message.
pub fn validate(form: &CheckoutForm) -> Result<ValidatedCheckout, FieldErrors> {
    let mut errors = FieldErrors::default();

    let full_name = form.full_name.trim();
    min_len(&mut errors, "full_name", full_name, 2, "Full name is required");

    let email = Email::parse(form.email.trim());
    if email.is_err() {
        errors.add("email", "Invalid email address");
    }

    let address_line1 = form.address_line1.trim();
    min_len(&mut errors, "address_line1", address_line1, 5, "Address is required");
    let city = form.city.trim();
    min_len(&mut errors, "city", city, 2, "City is required");
    let state = form.state.trim();
    min_len(&mut errors, "state", state, 2, "State/Province is required");
    let zip_code = form.zip_code.trim();
    min_len(&mut errors, "zip_code", zip_code, 5, "Zip/Postal code is required");

    let country = Country::ALL
        .into_iter()
        .find(|c| c.code() == form.country.trim());
    if country.is_none() {
        errors.add("country", "Country is required");
    }

    let payment_method = form.payment_method();
    if payment_method == PaymentMethod::CreditCard {
        validate_card(&mut errors, form);
    }

    match (email, country) {
        (Ok(email), Some(country)) if errors.is_empty() => Ok(ValidatedCheckout {
            contact: OrderContact {
                email,
                full_name: full_name.to_string(),
                ship_to: ship_to(form, country),
            },
            country,
            shipping_method: form.shipping_method(),
            payment_method,
        }),
        _ => Err(errors),
    }
}

fn validate_card(errors: &mut FieldErrors, form: &CheckoutForm) {
    let card_number = form.card_number.trim();
    if card_number.chars().count() != 16 {
        errors.add("card_number", "Card number must be 16 digits");
    } else if !all_digits(card_number) {
        errors.add("card_number", "Invalid card number");
    }

    if !EXPIRY_RE.is_match(form.expiry_date.trim()) {
        errors.add("expiry_date", "Invalid expiry date (MM/YY)");
    }

    let cvv = form.cvv.trim();
    if cvv.chars().count() != 3 {
        errors.add("cvv", "CVV must be 3 digits");
    } else if !all_digits(cvv) {
        errors.add("cvv", "Invalid CVV");
    }

    min_len(
        errors,
        "card_holder_name",
        form.card_holder_name.trim(),
        2,
        "Card holder name is required",
    );
}

fn min_len(errors: &mut FieldErrors, field: &'static str, value: &str, min: usize, message: &str) {
    if value.chars().count() < min {
        errors.add(field, message);
    }
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// One-line shipping address for the confirmation page.
fn ship_to(form: &CheckoutForm, country: Country) -> String {
    let mut parts = vec![form.address_line1.trim().to_string()];
    let line2 = form.address_line2.trim();
    if !line2.is_empty() {
        parts.push(line2.to_string());
    }
    parts.push(form.city.trim().to_string());
    parts.push(format!("{} {}", form.state.trim(), form.zip_code.trim()));
    parts.push(country.name().to_string());
    parts.join(", ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            address_line1: "12 Analytical Way".to_string(),
            city: "London".to_string(),
            state: "LDN".to_string(),
            zip_code: "10001".to_string(),
            card_holder_name: "Ada Lovelace".to_string(),
            card_number: "4242424242424242".to_string(),
            expiry_date: "08/29".to_string(),
            cvv: "123".to_string(),
            ..CheckoutForm::default()
        }
    }

    #[test]
    fn test_valid_card_checkout() {
        let checkout = validate(&valid_form()).unwrap();
        assert_eq!(checkout.contact.email.as_str(), "ada@example.com");
        assert_eq!(checkout.country, Country::USA);
        assert_eq!(checkout.shipping_method, ShippingMethod::Standard);
        assert_eq!(checkout.payment_method, PaymentMethod::CreditCard);
        assert_eq!(
            checkout.contact.ship_to,
            "12 Analytical Way, London, LDN 10001, United States"
        );
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate(&CheckoutForm::default()).unwrap_err();
        assert_eq!(errors.get("full_name"), Some("Full name is required"));
        assert_eq!(errors.get("email"), Some("Invalid email address"));
        assert_eq!(errors.get("address_line1"), Some("Address is required"));
        assert_eq!(errors.get("city"), Some("City is required"));
        assert_eq!(errors.get("state"), Some("State/Province is required"));
        assert_eq!(errors.get("zip_code"), Some("Zip/Postal code is required"));
        assert_eq!(errors.get("card_number"), Some("Card number must be 16 digits"));
        assert_eq!(errors.get("expiry_date"), Some("Invalid expiry date (MM/YY)"));
        assert_eq!(errors.get("cvv"), Some("CVV must be 3 digits"));
        assert_eq!(
            errors.get("card_holder_name"),
            Some("Card holder name is required")
        );
        assert!(errors.get("country").is_none());
        assert!(errors.has_shipping_errors());
    }

    #[test]
    fn test_card_length_checked_before_digits() {
        let mut form = valid_form();
        form.card_number = "4242x".to_string();
        form.cvv = "12a".to_string();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get("card_number"), Some("Card number must be 16 digits"));
        assert_eq!(errors.get("cvv"), Some("Invalid CVV"));

        form.card_number = "4242424242424x42".to_string();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get("card_number"), Some("Invalid card number"));
        assert!(!errors.has_shipping_errors());
    }

    #[test]
    fn test_spaced_card_number_rejected() {
        let mut form = valid_form();
        form.card_number = "4242 4242 4242 4242".to_string();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get("card_number"), Some("Card number must be 16 digits"));

        form.card_number = " 4242424242424242 ".to_string();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_expiry_format() {
        for bad in ["13/25", "00/25", "1/25", "01/2025", "01-25"] {
            let mut form = valid_form();
            form.expiry_date = bad.to_string();
            let errors = validate(&form).unwrap_err();
            assert_eq!(errors.len(), 1, "{bad}");
        }
    }

    #[test]
    fn test_paypal_skips_card_fields() {
        let form = CheckoutForm {
            payment_method: "paypal".to_string(),
            card_number: String::new(),
            cvv: String::new(),
            expiry_date: String::new(),
            card_holder_name: String::new(),
            shipping_method: "express".to_string(),
            ..valid_form()
        };
        let checkout = validate(&form).unwrap();
        assert_eq!(checkout.payment_method, PaymentMethod::PayPal);
        assert_eq!(checkout.shipping_method, ShippingMethod::Express);
    }

    #[test]
    fn test_unknown_country_rejected() {
        let mut form = valid_form();
        form.country = "XX".to_string();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get("country"), Some("Country is required"));
    }

    #[test]
    fn test_redisplay_drops_card_secrets() {
        let form = valid_form().redisplay();
        assert!(form.card_number.is_empty());
        assert!(form.cvv.is_empty());
        assert_eq!(form.expiry_date, "08/29");
    }
}
