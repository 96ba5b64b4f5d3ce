//! Checkout validation outcomes and the cart-clearing policy.

#![allow(clippy::unwrap_used)]

use mercadito_core::{CustomerField, CustomerInfo};
use mercadito_integration_tests::{
    complete_customer, empty_shop_config, shop_with_recorder, submit_product,
};
use mercadito_storefront::checkout::CheckoutError;
use mercadito_storefront::config::ShopConfig;
use mercadito_storefront::notify::Notification;

#[test]
fn test_empty_cart_always_rejected() {
    let (mut shop, recorder) = shop_with_recorder(empty_shop_config());

    // Even a perfect contact form cannot check out an empty cart
    shop.checkout_form_mut().customer = complete_customer();
    assert_eq!(shop.checkout().unwrap_err(), CheckoutError::EmptyCart);
    assert_eq!(recorder.events(), vec![Notification::CartEmpty]);
}

#[test]
fn test_missing_fields_reported_and_state_preserved() {
    let (mut shop, recorder) = shop_with_recorder(empty_shop_config());
    let id = submit_product(&mut shop, "X", "10");
    shop.add_to_cart(&id);

    let mut customer = complete_customer();
    customer.phone = String::new();
    customer.address = "   ".to_owned();
    shop.checkout_form_mut().customer = customer.clone();

    let err = shop.checkout().unwrap_err();
    assert_eq!(
        err,
        CheckoutError::MissingFields(vec![CustomerField::Phone, CustomerField::Address])
    );

    // Cart and form survive for correction
    assert_eq!(shop.cart_item_count(), 1);
    assert_eq!(shop.checkout_form().customer, customer);
    assert!(recorder.events().contains(&Notification::FormIncomplete));
}

#[test]
fn test_default_policy_keeps_cart_after_submit() {
    let (mut shop, _) = shop_with_recorder(empty_shop_config());
    let id = submit_product(&mut shop, "X", "10");
    shop.add_to_cart(&id);
    shop.checkout_form_mut().customer = complete_customer();

    shop.checkout().expect("checkout should compose");

    // Observed demo behavior: only the contact form resets
    assert_eq!(shop.cart_item_count(), 1);
    assert_eq!(shop.checkout_form().customer, CustomerInfo::default());
}

#[test]
fn test_clear_cart_policy_empties_cart_after_submit() {
    let config = ShopConfig {
        seed_catalog: false,
        clear_cart_on_submit: true,
        ..ShopConfig::default()
    };
    let (mut shop, _) = shop_with_recorder(config);
    let id = submit_product(&mut shop, "X", "10");
    shop.add_to_cart(&id);
    shop.checkout_form_mut().customer = complete_customer();

    shop.checkout().expect("checkout should compose");

    assert!(shop.cart().is_empty());
}

#[test]
fn test_failed_checkout_never_clears_cart_even_with_policy() {
    let config = ShopConfig {
        seed_catalog: false,
        clear_cart_on_submit: true,
        ..ShopConfig::default()
    };
    let (mut shop, _) = shop_with_recorder(config);
    let id = submit_product(&mut shop, "X", "10");
    shop.add_to_cart(&id);
    // Contact form left blank

    assert!(shop.checkout().is_err());
    assert_eq!(shop.cart_item_count(), 1);
}

#[test]
fn test_order_recipient_comes_from_config() {
    let config = ShopConfig {
        seed_catalog: false,
        order_email: "store-owner@example.net".to_owned(),
        ..ShopConfig::default()
    };
    let (mut shop, _) = shop_with_recorder(config);
    let id = submit_product(&mut shop, "X", "10");
    shop.add_to_cart(&id);
    shop.checkout_form_mut().customer = complete_customer();

    let summary = shop.checkout().expect("checkout should compose");
    assert!(summary.mailto.starts_with("mailto:store-owner@example.net?"));
}
