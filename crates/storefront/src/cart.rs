//! Shopping cart store.

use mercadito_core::{CartLine, ProductId};

/// Holds the active cart's lines, in insertion order.
///
/// Invariants: at most one line per product id, and every stored quantity
/// is at least 1. A quantity update to zero or below removes the line.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of a product: increment its existing line, or insert a
    /// new line with quantity 1.
    pub fn add(&mut self, product_id: &ProductId) {
        if let Some(line) = self.lines.iter_mut().find(|l| &l.product_id == product_id) {
            line.quantity = line.quantity.saturating_add(1);
            tracing::debug!(product_id = %product_id, quantity = line.quantity, "cart line incremented");
        } else {
            self.lines.push(CartLine::new(product_id.clone()));
            tracing::debug!(product_id = %product_id, "cart line created");
        }
    }

    /// Set a line's quantity to exactly `quantity`.
    ///
    /// A quantity of zero or below behaves as [`Self::remove`]. Ids not in
    /// the cart are a no-op either way - no line is ever created here.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| &l.product_id == product_id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            tracing::debug!(product_id = %product_id, quantity = line.quantity, "cart quantity set");
        }
    }

    /// Delete the line for a product if present; no-op otherwise.
    pub fn remove(&mut self, product_id: &ProductId) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| &l.product_id == product_id)?;
        let line = self.lines.remove(index);
        tracing::debug!(product_id = %product_id, "cart line removed");
        Some(line)
    }

    /// Sum of all line quantities (the header badge count).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// All lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
        tracing::debug!("cart cleared");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    #[test]
    fn test_repeated_add_merges_into_one_line() {
        let mut cart = CartStore::new();
        cart.add(&id("1"));
        cart.add(&id("1"));
        cart.add(&id("1"));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines().first().unwrap().quantity, 3);
    }

    #[test]
    fn test_add_distinct_products_keeps_order() {
        let mut cart = CartStore::new();
        cart.add(&id("a"));
        cart.add(&id("b"));
        cart.add(&id("a"));

        let ids: Vec<_> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_set_quantity_is_absolute() {
        let mut cart = CartStore::new();
        cart.add(&id("1"));
        cart.set_quantity(&id("1"), 7);
        assert_eq!(cart.lines().first().unwrap().quantity, 7);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = CartStore::new();
        cart.add(&id("1"));
        cart.set_quantity(&id("1"), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_negative_removes_line() {
        let mut cart = CartStore::new();
        cart.add(&id("1"));
        cart.set_quantity(&id("1"), -5);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_on_missing_line_creates_nothing() {
        let mut cart = CartStore::new();
        cart.set_quantity(&id("1"), 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_zero_on_missing_line_is_safe() {
        let mut cart = CartStore::new();
        cart.set_quantity(&id("1"), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = CartStore::new();
        cart.add(&id("1"));
        assert!(cart.remove(&id("2")).is_none());
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut cart = CartStore::new();
        cart.add(&id("a"));
        cart.add(&id("a"));
        cart.add(&id("b"));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new();
        cart.add(&id("a"));
        cart.add(&id("b"));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }
}
