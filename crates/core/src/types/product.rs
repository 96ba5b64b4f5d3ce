//! Product records.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::id::ProductId;
use super::money::Money;

/// A product in the catalog.
///
/// Products are immutable once created; there is no edit operation. The
/// `image` field is an opaque URI string - either an external URL, the
/// configured placeholder, or a `data:` URI produced by the front-end's
/// image loader. The catalog never inspects its contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,
    pub description: String,
    pub category: Category,
}

/// A product as submitted by the admin form, before the catalog assigns
/// an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: Money,
    pub image: String,
    pub description: String,
    pub category: Category,
}

impl ProductDraft {
    /// Attach a fresh id, turning the draft into a catalog record.
    #[must_use]
    pub fn into_product(self) -> Product {
        Product {
            id: ProductId::generate(),
            name: self.name,
            price: self.price,
            image: self.image,
            description: self.description,
            category: self.category,
        }
    }
}
