//! Mercadito Core - Shared domain types library.
//!
//! This crate provides the domain types used across all Mercadito components:
//! - `storefront` - The in-memory store engine (catalog, cart, checkout)
//! - `cli` - Interactive terminal front-end for the demo
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no stores, no rendering.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and money, plus the
//!   product, cart line, customer, and order record shapes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
