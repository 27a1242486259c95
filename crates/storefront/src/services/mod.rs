//! Business logic services for storefront.
//!
//! # Services
//!
//! - `checkout` - Checkout form validation

pub mod checkout;
