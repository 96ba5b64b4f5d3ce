//! The shop composition root.
//!
//! Owns the catalog, the cart, the view controller, the two forms, and the
//! notifier, and exposes the operations the front-end drives. Cross-store
//! invariants live here - most importantly the delete cascade that keeps
//! the cart free of dangling product references.

use chrono::Utc;

use mercadito_core::{Money, OrderItem, Product, ProductId};

use crate::admin::{CheckoutForm, FormError, ProductForm};
use crate::cart::CartStore;
use crate::catalog::CatalogStore;
use crate::checkout::{self, CheckoutError, OrderSummary};
use crate::config::ShopConfig;
use crate::notify::{Notification, Notifier, TracingNotifier};
use crate::view::{AdminView, CartView, CatalogView, View, ViewController};

/// All storefront state and the operations over it.
///
/// Passed into the front-end explicitly - there are no ambient globals.
/// Single-threaded by design: mutations take `&mut self` and there is no
/// interior locking.
pub struct Shop {
    config: ShopConfig,
    catalog: CatalogStore,
    cart: CartStore,
    views: ViewController,
    product_form: ProductForm,
    checkout_form: CheckoutForm,
    notifier: Box<dyn Notifier>,
}

impl Shop {
    /// Create a shop that delivers notifications to the tracing log.
    #[must_use]
    pub fn new(config: ShopConfig) -> Self {
        Self::with_notifier(config, Box::new(TracingNotifier))
    }

    /// Create a shop with an explicit notification delivery mechanism.
    #[must_use]
    pub fn with_notifier(config: ShopConfig, notifier: Box<dyn Notifier>) -> Self {
        let catalog = if config.seed_catalog {
            CatalogStore::with_sample_product(&config.placeholder_image)
        } else {
            CatalogStore::new()
        };

        Self {
            config,
            catalog,
            cart: CartStore::new(),
            views: ViewController::new(),
            product_form: ProductForm::default(),
            checkout_form: CheckoutForm::default(),
            notifier,
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ShopConfig {
        &self.config
    }

    /// The product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// The shopping cart.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// The screen currently presented.
    #[must_use]
    pub const fn current_view(&self) -> View {
        self.views.current()
    }

    /// Switch screens.
    pub fn navigate(&mut self, view: View) {
        self.views.navigate(view);
    }

    // =========================================================================
    // Cart operations
    // =========================================================================

    /// Add one unit of a catalog product to the cart.
    ///
    /// Unknown ids are ignored: the cart must never hold a line for a
    /// product the catalog does not have.
    pub fn add_to_cart(&mut self, product_id: &ProductId) {
        if self.catalog.get(product_id).is_none() {
            tracing::warn!(product_id = %product_id, "add_to_cart ignored: product not in catalog");
            return;
        }
        self.cart.add(product_id);
    }

    /// Set a cart line's quantity; zero or below removes the line.
    pub fn set_cart_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        self.cart.set_quantity(product_id, quantity);
    }

    /// Remove a cart line if present.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        self.cart.remove(product_id);
    }

    /// Sum of all cart quantities (the header badge count).
    #[must_use]
    pub fn cart_item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Exact cart total: sum of `price * quantity` over all lines.
    #[must_use]
    pub fn cart_total(&self) -> Money {
        self.resolved_items()
            .iter()
            .map(OrderItem::line_total)
            .sum()
    }

    // =========================================================================
    // Admin operations
    // =========================================================================

    /// The admin product form.
    #[must_use]
    pub const fn product_form(&self) -> &ProductForm {
        &self.product_form
    }

    /// Mutable access for the front-end to fill in fields.
    pub const fn product_form_mut(&mut self) -> &mut ProductForm {
        &mut self.product_form
    }

    /// Submit the admin product form.
    ///
    /// On success the product enters the catalog, the form resets, and a
    /// `ProductAdded` notification fires. On failure the form keeps its
    /// state and `FormIncomplete` fires.
    ///
    /// # Errors
    ///
    /// Propagates the form's [`FormError`].
    pub fn submit_product(&mut self) -> Result<Product, FormError> {
        match self.product_form.validate(&self.config.placeholder_image) {
            Ok(draft) => {
                let product = self.catalog.add(draft);
                self.product_form.reset();
                self.notifier.notify(Notification::ProductAdded);
                Ok(product)
            }
            Err(err) => {
                tracing::warn!(error = %err, "product form rejected");
                self.notifier.notify(Notification::FormIncomplete);
                Err(err)
            }
        }
    }

    /// Delete a product and cascade-remove its cart line.
    ///
    /// The cascade is enforced here, on the only public delete path, so the
    /// cart can never reference a product the catalog no longer has.
    /// Absent ids are a no-op.
    pub fn delete_product(&mut self, product_id: &ProductId) -> Option<Product> {
        let removed = self.catalog.remove(product_id)?;
        self.cart.remove(product_id);
        self.notifier.notify(Notification::ProductDeleted);
        Some(removed)
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// The checkout contact form.
    #[must_use]
    pub const fn checkout_form(&self) -> &CheckoutForm {
        &self.checkout_form
    }

    /// Mutable access for the front-end to fill in fields.
    pub const fn checkout_form_mut(&mut self) -> &mut CheckoutForm {
        &mut self.checkout_form
    }

    /// Compose the order summary for the current cart and contact form.
    ///
    /// On success: `OrderSubmitted` fires, the contact form resets, and -
    /// if `clear_cart_on_submit` is set - the cart empties. On failure the
    /// matching notification (`CartEmpty` or `FormIncomplete`) fires and
    /// all state is preserved for correction.
    ///
    /// # Errors
    ///
    /// Propagates the composer's [`CheckoutError`].
    pub fn checkout(&mut self) -> Result<OrderSummary, CheckoutError> {
        let items = self.resolved_items();
        let result = checkout::compose(
            &items,
            &self.checkout_form.customer,
            &self.config.order_email,
            Utc::now(),
        );

        match &result {
            Ok(summary) => {
                tracing::info!(order_id = %summary.order.id, total = %summary.order.total, "checkout composed");
                self.checkout_form.reset();
                if self.config.clear_cart_on_submit {
                    self.cart.clear();
                }
                self.notifier.notify(Notification::OrderSubmitted);
            }
            Err(CheckoutError::EmptyCart) => {
                tracing::warn!("checkout rejected: cart is empty");
                self.notifier.notify(Notification::CartEmpty);
            }
            Err(CheckoutError::MissingFields(fields)) => {
                tracing::warn!(?fields, "checkout rejected: incomplete contact details");
                self.notifier.notify(Notification::FormIncomplete);
            }
        }

        result
    }

    // =========================================================================
    // Render models
    // =========================================================================

    /// Display data for the catalog screen.
    #[must_use]
    pub fn catalog_view(&self) -> CatalogView {
        CatalogView::from(&self.catalog)
    }

    /// Display data for the admin screen.
    #[must_use]
    pub fn admin_view(&self) -> AdminView {
        AdminView::from(&self.catalog)
    }

    /// Display data for the cart screen.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::build(&self.cart, &self.catalog)
    }

    /// Cart lines resolved against the catalog.
    fn resolved_items(&self) -> Vec<OrderItem> {
        self.cart
            .lines()
            .iter()
            .filter_map(|line| {
                self.catalog.get(&line.product_id).map(|product| OrderItem {
                    product: product.clone(),
                    quantity: line.quantity,
                })
            })
            .collect()
    }
}
