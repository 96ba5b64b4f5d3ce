//! Checkout composition.
//!
//! Turns the cart and the customer's contact details into a plain-text
//! order summary plus a ready-to-open `mailto:` URI. The engine's contract
//! ends at those strings; actually opening a mail client is the front-end's
//! concern.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use thiserror::Error;

use mercadito_core::{CustomerField, CustomerInfo, Money, Order, OrderId, OrderItem};

/// Validation failures that abort a checkout attempt.
///
/// Both are recovered at the submission site: store state is untouched and
/// the checkout form keeps its values for correction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Checkout was attempted with no items in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// One or more mandatory contact fields are blank.
    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<CustomerField>),
}

fn join_fields(fields: &[CustomerField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The artifacts of a successful checkout composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    /// The transient order record (never stored).
    pub order: Order,
    /// Mail subject line.
    pub subject: String,
    /// Plain-text mail body.
    pub body: String,
    /// Fully composed `mailto:` URI with percent-encoded subject and body.
    pub mailto: String,
}

/// Compose an order summary from resolved cart items and customer details.
///
/// `placed_at` is passed in rather than read from the clock so composition
/// stays deterministic; callers stamp it with `Utc::now()`.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] when `items` is empty (checked
/// before anything else, regardless of the customer details), or
/// [`CheckoutError::MissingFields`] naming every required contact field
/// that is empty or whitespace-only.
pub fn compose(
    items: &[OrderItem],
    customer: &CustomerInfo,
    recipient: &str,
    placed_at: DateTime<Utc>,
) -> Result<OrderSummary, CheckoutError> {
    if items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let missing = customer.missing_required_fields();
    if !missing.is_empty() {
        return Err(CheckoutError::MissingFields(missing));
    }

    let total: Money = items.iter().map(OrderItem::line_total).sum();

    let mut body = String::new();
    let _ = writeln!(body, "New Purchase Order:");
    let _ = writeln!(body);
    let _ = writeln!(body, "CUSTOMER INFORMATION:");
    let _ = writeln!(body, "Name: {}", customer.name);
    let _ = writeln!(body, "Email: {}", customer.email);
    let _ = writeln!(body, "Phone: {}", customer.phone);
    let _ = writeln!(body, "Address: {}", customer.address);
    let _ = writeln!(body, "City: {}", customer.city);
    let _ = writeln!(body, "Zip Code: {}", customer.zip_code);
    let _ = writeln!(body);
    let _ = writeln!(body, "ORDERED PRODUCTS:");
    for item in items {
        let _ = writeln!(
            body,
            "{} x{} - {}",
            item.product.name,
            item.quantity,
            item.line_total()
        );
    }
    let _ = writeln!(body);
    let _ = writeln!(body, "TOTAL: {total}");
    let _ = writeln!(body);
    let _ = writeln!(body, "Date: {}", placed_at.format("%Y-%m-%d %H:%M:%S UTC"));

    let subject = format!("New Purchase Order - {}", customer.name);
    let mailto = format!(
        "mailto:{recipient}?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    );

    let order = Order {
        id: OrderId::generate(),
        items: items.to_vec(),
        customer: customer.clone(),
        total,
        placed_at,
    };

    tracing::debug!(order_id = %order.id, total = %total, items = items.len(), "order composed");

    Ok(OrderSummary {
        order,
        subject,
        body,
        mailto,
    })
}
