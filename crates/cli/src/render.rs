//! Text rendering of the three screens and toast delivery.
//!
//! Everything here turns the engine's render models into plain strings;
//! the REPL decides when to print them.

use std::fmt::Write as _;

use mercadito_storefront::admin::{CheckoutForm, ProductForm};
use mercadito_storefront::notify::{Notification, Notifier};
use mercadito_storefront::shop::Shop;
use mercadito_storefront::view::{AdminView, CartView, CatalogView, View};

/// Delivers notifications as toast lines on stdout.
pub struct ToastNotifier;

impl Notifier for ToastNotifier {
    fn notify(&mut self, event: Notification) {
        println!("{}", toast(event));
    }
}

/// One toast line, e.g. `[Product added] The product has been added to the store.`
#[must_use]
pub fn toast(event: Notification) -> String {
    format!("[{}] {}", event.title(), event.description())
}

/// Render whichever screen is currently active.
#[must_use]
pub fn screen(shop: &Shop) -> String {
    match shop.current_view() {
        View::Catalog => catalog_screen(&shop.catalog_view(), shop.cart_item_count()),
        View::Admin => admin_screen(&shop.admin_view(), shop.product_form()),
        View::Cart => cart_screen(&shop.cart_view(), shop.checkout_form()),
    }
}

/// The product grid shoppers browse.
#[must_use]
pub fn catalog_screen(view: &CatalogView, cart_count: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Our Products (cart: {cart_count}) ===");
    if view.products.is_empty() {
        let _ = writeln!(out, "No products available yet.");
        let _ = writeln!(out, "Visit the admin screen to add products to your store.");
        return out;
    }
    for (index, card) in view.products.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {} - {} [{}]",
            index + 1,
            card.name,
            card.price,
            card.category
        );
        let _ = writeln!(out, "     {}", card.description);
    }
    out
}

/// The admin panel: form state plus the current product listing.
#[must_use]
pub fn admin_screen(view: &AdminView, form: &ProductForm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Add New Product ===");
    let _ = writeln!(out, "name:        {}", form.name);
    let _ = writeln!(out, "price:       {}", form.price);
    let _ = writeln!(out, "category:    {}", form.category);
    let _ = writeln!(out, "description: {}", form.description);
    let _ = writeln!(
        out,
        "image:       {}",
        if form.image.is_empty() { "(placeholder)" } else { "(set)" }
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "=== Existing Products ({}) ===", view.product_count);
    if view.products.is_empty() {
        let _ = writeln!(out, "No products added yet.");
        return out;
    }
    for (index, row) in view.products.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {} - {} [{}]",
            index + 1,
            row.name,
            row.price,
            row.category
        );
    }
    out
}

/// The cart with the checkout contact form.
#[must_use]
pub fn cart_screen(view: &CartView, form: &CheckoutForm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Shopping Cart ===");
    if view.items.is_empty() {
        let _ = writeln!(out, "Your cart is empty.");
        let _ = writeln!(out, "Add some products to your cart to continue.");
        return out;
    }
    for (index, item) in view.items.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {} x{} @ {} = {}",
            index + 1,
            item.name,
            item.quantity,
            item.unit_price,
            item.line_total
        );
    }
    let _ = writeln!(out, "Total: {}", view.total);
    let _ = writeln!(out);
    let _ = writeln!(out, "=== Shipping Information ===");
    let customer = &form.customer;
    let _ = writeln!(out, "name:     {}", customer.name);
    let _ = writeln!(out, "email:    {}", customer.email);
    let _ = writeln!(out, "phone:    {}", customer.phone);
    let _ = writeln!(out, "address:  {}", customer.address);
    let _ = writeln!(out, "city:     {}", customer.city);
    let _ = writeln!(out, "zip:      {}", customer.zip_code);
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mercadito_storefront::config::ShopConfig;

    fn demo_shop() -> Shop {
        Shop::new(ShopConfig::default())
    }

    #[test]
    fn test_catalog_screen_lists_products() {
        let shop = demo_shop();
        let text = catalog_screen(&shop.catalog_view(), 0);
        assert!(text.contains("Sample Product"));
        assert!(text.contains("$25.99"));
        assert!(text.contains("cart: 0"));
    }

    #[test]
    fn test_empty_catalog_screen() {
        let config = ShopConfig {
            seed_catalog: false,
            ..ShopConfig::default()
        };
        let shop = Shop::new(config);
        let text = catalog_screen(&shop.catalog_view(), 0);
        assert!(text.contains("No products available yet."));
    }

    #[test]
    fn test_empty_cart_screen() {
        let shop = demo_shop();
        let text = cart_screen(&shop.cart_view(), shop.checkout_form());
        assert!(text.contains("Your cart is empty."));
    }

    #[test]
    fn test_cart_screen_shows_lines_and_total() {
        let mut shop = demo_shop();
        let id = shop.catalog().products().first().unwrap().id.clone();
        shop.add_to_cart(&id);
        shop.add_to_cart(&id);

        let text = cart_screen(&shop.cart_view(), shop.checkout_form());
        assert!(text.contains("Sample Product x2 @ $25.99 = $51.98"));
        assert!(text.contains("Total: $51.98"));
    }

    #[test]
    fn test_toast_format() {
        assert_eq!(
            toast(Notification::OrderSubmitted),
            "[Order sent] The order has been handed to your email client."
        );
    }
}
