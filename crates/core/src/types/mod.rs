//! Core types for ElectroMart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod checkout;
pub mod email;
pub mod id;
pub mod price;

pub use checkout::{Country, PaymentMethod, ShippingMethod};
pub use email::{Email, EmailError};
pub use id::*;
pub use price::{CurrencyCode, Price};
