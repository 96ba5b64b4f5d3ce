//! Core types for Mercadito.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod category;
pub mod customer;
pub mod id;
pub mod money;
pub mod order;
pub mod product;

pub use cart::CartLine;
pub use category::{Category, CategoryParseError};
pub use customer::{CustomerField, CustomerInfo};
pub use id::*;
pub use money::Money;
pub use order::{Order, OrderItem};
pub use product::{Product, ProductDraft};
