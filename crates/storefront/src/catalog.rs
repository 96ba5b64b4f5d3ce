//! Product catalog store.

use mercadito_core::{Category, Money, Product, ProductDraft, ProductId};

/// Holds the products available for purchase, in insertion order.
///
/// The catalog is the exclusive owner of product records; everything else
/// refers to them by [`ProductId`]. Removal here is a plain map operation -
/// the cart cascade lives in [`crate::shop::Shop::delete_product`], the only
/// public delete path.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// An empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// A catalog seeded with the demo's sample product.
    #[must_use]
    pub fn with_sample_product(placeholder_image: &str) -> Self {
        let mut catalog = Self::new();
        catalog.add(ProductDraft {
            name: "Sample Product".to_owned(),
            price: Money::from_cents(25_99),
            image: placeholder_image.to_owned(),
            description: "An example product showing how the store works.".to_owned(),
            category: Category::Electronics,
        });
        catalog
    }

    /// Assign a fresh unique id to the draft, append it, and return the
    /// created record.
    ///
    /// No validation happens here; the admin form has already vetted the
    /// draft by the time it reaches the catalog.
    pub fn add(&mut self, draft: ProductDraft) -> Product {
        let product = draft.into_product();
        tracing::debug!(product_id = %product.id, name = %product.name, "product added to catalog");
        self.products.push(product.clone());
        product
    }

    /// Remove the product with the given id, returning it if present.
    ///
    /// Absent ids are a no-op, not an error.
    pub fn remove(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| &p.id == id)?;
        let product = self.products.remove(index);
        tracing::debug!(product_id = %product.id, name = %product.name, "product removed from catalog");
        Some(product)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products, in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
