//! Active-screen tracking and per-view render models.
//!
//! The render models prepare display strings (formatted prices, counts)
//! from current store state; actually drawing them is the front-end's job.

use mercadito_core::{Money, Product, ProductId};

use crate::cart::CartStore;
use crate::catalog::CatalogStore;

/// The three mutually exclusive screens of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// The product grid shoppers browse. Initial screen.
    #[default]
    Catalog,
    /// The add/remove product panel.
    Admin,
    /// The cart with the checkout form.
    Cart,
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Catalog => "catalog",
            Self::Admin => "admin",
            Self::Cart => "cart",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "catalog" | "store" => Ok(Self::Catalog),
            "admin" => Ok(Self::Admin),
            "cart" => Ok(Self::Cart),
            _ => Err(format!("unknown view: {s}")),
        }
    }
}

/// Tracks which screen is currently presented.
///
/// Transitions happen only on explicit navigation; nothing is persisted
/// across restarts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewController {
    current: View,
}

impl ViewController {
    /// Starts on the catalog screen.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: View::Catalog,
        }
    }

    /// The screen currently presented.
    #[must_use]
    pub const fn current(&self) -> View {
        self.current
    }

    /// Switch to another screen. No guards.
    pub fn navigate(&mut self, view: View) {
        tracing::debug!(from = %self.current, to = %view, "view changed");
        self.current = view;
    }
}

// =============================================================================
// Render models
// =============================================================================

/// Product card display data for the catalog screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub image: String,
    pub description: String,
    pub category: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
            description: product.description.clone(),
            category: product.category.to_string(),
        }
    }
}

/// Catalog screen display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub products: Vec<ProductCardView>,
}

impl From<&CatalogStore> for CatalogView {
    fn from(catalog: &CatalogStore) -> Self {
        Self {
            products: catalog.products().iter().map(ProductCardView::from).collect(),
        }
    }
}

/// One row of the admin screen's product listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminProductRow {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: String,
}

/// Admin screen display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminView {
    pub products: Vec<AdminProductRow>,
    pub product_count: usize,
}

impl From<&CatalogStore> for AdminView {
    fn from(catalog: &CatalogStore) -> Self {
        Self {
            products: catalog
                .products()
                .iter()
                .map(|product| AdminProductRow {
                    id: product.id.clone(),
                    name: product.name.clone(),
                    category: product.category.to_string(),
                    price: product.price.to_string(),
                })
                .collect(),
            product_count: catalog.len(),
        }
    }
}

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// Cart screen display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// An empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: "$0.00".to_owned(),
            item_count: 0,
        }
    }

    /// Resolve cart lines against the catalog into display rows.
    ///
    /// The delete cascade keeps every line resolvable; a line whose product
    /// is somehow gone is skipped rather than rendered half-empty.
    #[must_use]
    pub fn build(cart: &CartStore, catalog: &CatalogStore) -> Self {
        let items: Vec<CartItemView> = cart
            .lines()
            .iter()
            .filter_map(|line| {
                catalog.get(&line.product_id).map(|product| CartItemView {
                    product_id: product.id.clone(),
                    name: product.name.clone(),
                    image: product.image.clone(),
                    quantity: line.quantity,
                    unit_price: product.price.to_string(),
                    line_total: (product.price * line.quantity).to_string(),
                })
            })
            .collect();

        let total: Money = cart
            .lines()
            .iter()
            .filter_map(|line| catalog.get(&line.product_id).map(|p| p.price * line.quantity))
            .sum();

        Self {
            items,
            total: total.to_string(),
            item_count: cart.item_count(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mercadito_core::{Category, ProductDraft};

    fn catalog_with(name: &str, price: &str) -> (CatalogStore, ProductId) {
        let mut catalog = CatalogStore::new();
        let id = catalog
            .add(ProductDraft {
                name: name.to_owned(),
                price: price.parse().unwrap(),
                image: "/placeholder.svg".to_owned(),
                description: String::new(),
                category: Category::Books,
            })
            .id;
        (catalog, id)
    }

    #[test]
    fn test_initial_view_is_catalog() {
        let controller = ViewController::new();
        assert_eq!(controller.current(), View::Catalog);
    }

    #[test]
    fn test_navigation_is_unguarded() {
        let mut controller = ViewController::new();
        controller.navigate(View::Admin);
        assert_eq!(controller.current(), View::Admin);
        controller.navigate(View::Cart);
        assert_eq!(controller.current(), View::Cart);
        controller.navigate(View::Cart);
        assert_eq!(controller.current(), View::Cart);
    }

    #[test]
    fn test_view_from_str() {
        assert_eq!("catalog".parse::<View>().unwrap(), View::Catalog);
        assert_eq!("store".parse::<View>().unwrap(), View::Catalog);
        assert_eq!("ADMIN".parse::<View>().unwrap(), View::Admin);
        assert!("checkout".parse::<View>().is_err());
    }

    #[test]
    fn test_catalog_view_formats_prices() {
        let (catalog, _) = catalog_with("Book", "12.5");
        let view = CatalogView::from(&catalog);
        let card = view.products.first().unwrap();
        assert_eq!(card.price, "$12.50");
        assert_eq!(card.category, "Books");
    }

    #[test]
    fn test_cart_view_totals() {
        let (catalog, id) = catalog_with("Book", "12.50");
        let mut cart = CartStore::new();
        cart.add(&id);
        cart.add(&id);

        let view = CartView::build(&cart, &catalog);
        assert_eq!(view.item_count, 2);
        let item = view.items.first().unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.unit_price, "$12.50");
        assert_eq!(item.line_total, "$25.00");
        assert_eq!(view.total, "$25.00");
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::empty();
        assert!(view.items.is_empty());
        assert_eq!(view.total, "$0.00");
        assert_eq!(view.item_count, 0);
    }

    #[test]
    fn test_admin_view_counts_products() {
        let (catalog, _) = catalog_with("Book", "1");
        let view = AdminView::from(&catalog);
        assert_eq!(view.product_count, 1);
        assert_eq!(view.products.first().unwrap().name, "Book");
    }
}
