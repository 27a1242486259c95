//! ElectroMart Core - Shared types library.
//!
//! This crate provides common types used across the ElectroMart components:
//! - `storefront` - Server-rendered storefront (pages, cart, checkout)
//! - `integration-tests` - End-to-end tests driving the storefront router
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no templates. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype handles, prices, emails, and checkout options

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
