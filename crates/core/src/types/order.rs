//! Order shapes produced by the checkout composer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::customer::CustomerInfo;
use super::id::OrderId;
use super::money::Money;
use super::product::Product;

/// A cart line resolved against the catalog: the full product record plus
/// the ordered quantity. The checkout composer works on resolved items so
/// the summary can name products and price lines without a catalog in hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: Product,
    pub quantity: u32,
}

impl OrderItem {
    /// Price of this line: unit price times quantity, at full precision.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

/// A composed order.
///
/// Orders exist only transiently inside the composed summary handed to the
/// mail client; they are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<OrderItem>,
    pub customer: CustomerInfo,
    pub total: Money,
    pub placed_at: DateTime<Utc>,
}
