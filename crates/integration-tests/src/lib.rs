//! Integration tests for Mercadito.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mercadito-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_flow` - Full admin -> catalog -> cart -> checkout flows
//! - `cart_rules` - Cart/catalog state-transition invariants
//! - `checkout_policy` - Checkout validation and the cart-clearing policy
//!
//! This crate only hosts shared helpers; the scenarios live in `tests/`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use mercadito_core::{CustomerInfo, ProductId};
use mercadito_storefront::config::ShopConfig;
use mercadito_storefront::notify::RecordingNotifier;
use mercadito_storefront::shop::Shop;

/// A shop with no seeded catalog plus a handle on its notifications.
#[must_use]
pub fn shop_with_recorder(config: ShopConfig) -> (Shop, RecordingNotifier) {
    let recorder = RecordingNotifier::new();
    let shop = Shop::with_notifier(config, Box::new(recorder.clone()));
    (shop, recorder)
}

/// An unseeded default configuration.
#[must_use]
pub fn empty_shop_config() -> ShopConfig {
    ShopConfig {
        seed_catalog: false,
        ..ShopConfig::default()
    }
}

/// Drive the admin form to create a product, panicking on rejection.
///
/// # Panics
///
/// Panics if the form does not validate; test inputs are expected valid.
pub fn submit_product(shop: &mut Shop, name: &str, price: &str) -> ProductId {
    let form = shop.product_form_mut();
    form.name = name.to_owned();
    form.price = price.to_owned();
    form.description = format!("{name} description");
    form.category = "other".to_owned();
    match shop.submit_product() {
        Ok(product) => product.id,
        Err(e) => panic!("product form rejected in test setup: {e}"),
    }
}

/// A fully filled customer contact form.
#[must_use]
pub fn complete_customer() -> CustomerInfo {
    CustomerInfo {
        name: "Ana García".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: "555-0100".to_owned(),
        address: "Calle Mayor 1".to_owned(),
        city: "Madrid".to_owned(),
        zip_code: "28001".to_owned(),
    }
}
