//! Cart line records.

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// One product-quantity pairing in the active cart.
///
/// Lines reference products by id rather than holding a copy, so the
/// catalog stays the single owner of product data. The cart store keeps at
/// most one line per product id and never holds a zero quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl CartLine {
    /// A new line with quantity 1, as created on first add-to-cart.
    #[must_use]
    pub fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            quantity: 1,
        }
    }
}
