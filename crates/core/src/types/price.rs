//! Type-safe price representation using decimal arithmetic.
//!
//! All storefront money goes through [`Price`]: unit prices, line totals,
//! subtotals and shipping. Amounts are kept in the currency's standard unit
//! (dollars, not cents) and displayed with two decimal places.

use core::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price from an amount in the smallest currency unit.
    ///
    /// ```
    /// use electromart_core::{CurrencyCode, Price};
    ///
    /// assert_eq!(Price::from_cents(24_999, CurrencyCode::USD).to_string(), "$249.99");
    /// ```
    #[must_use]
    pub fn from_cents(cents: i64, currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::new(cents, 2), currency_code)
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Whether the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Multiply by a quantity (line total).
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Add another price of the same currency.
    ///
    /// The currency of `self` wins; mixing currencies is a programming error
    /// caught in debug builds.
    #[must_use]
    pub fn plus(self, other: Self) -> Self {
        debug_assert_eq!(
            self.currency_code, other.currency_code,
            "cannot add prices in different currencies"
        );
        Self::new(self.amount + other.amount, self.currency_code)
    }

    /// Sum an iterator of prices, starting from zero in `currency_code`.
    pub fn sum<I>(prices: I, currency_code: CurrencyCode) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        prices
            .into_iter()
            .fold(Self::zero(currency_code), Self::plus)
    }

    /// Amount in the smallest currency unit, rounded half-up. Negative amounts
    /// saturate to zero.
    #[must_use]
    pub fn cents(&self) -> u64 {
        (self.amount * Decimal::ONE_HUNDRED)
            .round()
            .to_u64()
            .unwrap_or(0)
    }

    /// The amount formatted with two decimals and no currency symbol.
    #[must_use]
    pub fn amount_string(&self) -> String {
        format!("{:.2}", self.amount.round_dp(2))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency_code.symbol(), self.amount_string())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}
